#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The DPLL search engine.
//!
//! A classic chronological-backtracking search: an explicit stack of
//! pending decisions drives the loop, each decision opens a delta frame,
//! unit propagation and the pure-literal rule force further assignments
//! into that frame, and a conflict unwinds frames until the sibling
//! polarity of some decision is still waiting on the pending stack.
//!
//! Both polarities of a branching variable are pushed together, the
//! positive one on top, so `v = true` is explored first and `v = false`
//! is picked up automatically after a backtrack.

use crate::sat::cnf::Cnf;
use crate::sat::literal::{Lit, Variable};
use crate::sat::model::Model;
use crate::sat::occurrence::OccurrenceIndex;
use crate::sat::propagation::Propagator;
use crate::sat::solver::{SearchStats, Solver};
use crate::sat::state::ClauseStateTable;
use crate::sat::trail::Trail;
use log::{debug, trace};

/// A chronological-backtracking DPLL solver.
///
/// All state is rebuilt by every `solve` call; an instance can be reused
/// across formulas.
#[derive(Debug, Clone, Default)]
pub struct DpllSolver {
    cnf: Cnf,
    model: Model,
    occurrences: OccurrenceIndex,
    states: ClauseStateTable,
    trail: Trail,
    pending: Vec<Lit>,
    propagator: Propagator,
    stats: SearchStats,
}

impl Solver for DpllSolver {
    /// Decides satisfiability of `cnf`.
    ///
    /// The empty formula is satisfiable under the empty model; a formula
    /// containing an empty clause is unsatisfiable before any search.
    /// Never panics on well-formed input: internal inconsistencies
    /// surface as an UNSAT verdict.
    fn solve(&mut self, cnf: &Cnf) -> bool {
        if cnf.is_empty() {
            self.model.clear();
            return true;
        }
        if cnf.has_empty_clause() {
            return false;
        }

        self.init(cnf);
        let sat = self.run();

        debug!(
            "verdict: {} ({} decisions, {} forced, {} backtracks)",
            if sat { "sat" } else { "unsat" },
            self.stats.decisions,
            self.stats.propagations,
            self.stats.backtracks
        );
        sat
    }

    /// The model found by the most recent `solve`. Only meaningful after
    /// a positive verdict, when it assigns every variable of the formula.
    fn model(&self) -> &Model {
        &self.model
    }
}

impl DpllSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for the most recent `solve` call.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Resets all search state and seeds the pending-decision stack with
    /// both polarities of the first variable.
    fn init(&mut self, cnf: &Cnf) {
        self.cnf = cnf.clone();
        self.model.clear();
        self.trail.clear();
        self.pending.clear();
        self.propagator.clear_units();
        self.stats = SearchStats::default();

        self.occurrences = OccurrenceIndex::new(&self.cnf);
        self.states = ClauseStateTable::new(&self.cnf, &self.model);

        if let Some(&var) = self.cnf.variables().first() {
            self.push_decisions(var);
        }
    }

    /// The main loop: pop a pending decision, assign and propagate, then
    /// finish, backtrack, or branch on a fresh variable.
    fn run(&mut self) -> bool {
        while let Some(lit) = self.pending.pop() {
            self.stats.decisions += 1;
            trace!("decide {lit} at depth {}", self.trail.depth());

            if !self.assign(lit) {
                if !self.backtrack() {
                    return false;
                }
                continue;
            }

            if self.states.all_inactive() {
                self.complete_model();
                return true;
            }

            if self.all_assigned() {
                // the active flag is only a lower bound on satisfaction:
                // the pure-literal rule deactivates clauses without
                // propagating the negated polarity. Full evaluation is
                // the authoritative check.
                if self.cnf.eval(&self.model) {
                    return true;
                }
                if !self.backtrack() {
                    return false;
                }
                continue;
            }

            let Some(var) = self.choose_variable() else {
                return false;
            };
            self.push_decisions(var);
        }

        false
    }

    /// Decides `lit`: opens a frame, enters it into the model, then runs
    /// unit propagation to a fixed point and applies the pure-literal
    /// rule. Returns false iff a conflict was found.
    fn assign(&mut self, lit: Lit) -> bool {
        self.trail.push(lit);
        self.model.set(lit.variable(), lit.polarity());

        if !self.propagate(lit) {
            return false;
        }

        while let Some(unit) = self.next_unit() {
            self.stats.propagations += 1;
            trace!("forced {unit}");
            self.record_forced(unit);
            self.model.set(unit.variable(), unit.polarity());
            if !self.propagate(unit) {
                return false;
            }
        }

        while let Some(pure) = self.find_pure() {
            self.stats.propagations += 1;
            trace!("pure {pure}");
            self.record_forced(pure);
            self.model.set(pure.variable(), pure.polarity());
            self.deactivate_pure(pure);
        }

        true
    }

    fn propagate(&mut self, lit: Lit) -> bool {
        let Some(frame) = self.trail.top_mut() else {
            return true;
        };
        self.propagator.propagate(
            lit,
            &self.cnf,
            &self.occurrences,
            &self.model,
            &mut self.states,
            frame,
        )
    }

    fn next_unit(&mut self) -> Option<Lit> {
        self.propagator.next_unit(&self.cnf, &self.states, &self.model)
    }

    fn record_forced(&mut self, lit: Lit) {
        if let Some(frame) = self.trail.top_mut() {
            frame.forced.push(lit);
        }
    }

    fn deactivate_pure(&mut self, pure: Lit) {
        let Some(frame) = self.trail.top_mut() else {
            return;
        };
        self.propagator
            .deactivate_pure(pure, &self.occurrences, &mut self.states, frame);
    }

    /// An unassigned variable one of whose polarities occurs in no active
    /// clause, while the other polarity still occurs in at least one.
    fn find_pure(&self) -> Option<Lit> {
        self.cnf
            .variables()
            .iter()
            .filter(|&&var| !self.model.is_assigned(var))
            .find_map(|&var| {
                let positive = self.any_active(self.occurrences.positive(var));
                let negative = self.any_active(self.occurrences.negative(var));
                match (positive, negative) {
                    (true, false) => Some(Lit::positive(var)),
                    (false, true) => Some(Lit::negative(var)),
                    _ => None,
                }
            })
    }

    fn any_active(&self, clause_indices: &[usize]) -> bool {
        clause_indices.iter().any(|&i| self.states[i].active)
    }

    /// Unwinds frames until the top decision is the negation of the next
    /// pending literal (the failed sibling of the polarity about to be
    /// tried), undoes that frame too, and drops stale queued units.
    /// Returns false when the trail or the pending stack runs out first:
    /// the search space is exhausted.
    fn backtrack(&mut self) -> bool {
        if self.trail.is_empty() || self.pending.is_empty() {
            return false;
        }
        let target = self.pending.last().map(|lit| lit.negated());

        while self.trail.top_decision() != target {
            if !self.trail.undo_one(&mut self.model, &mut self.states) {
                return false;
            }
        }
        if !self.trail.undo_one(&mut self.model, &mut self.states) {
            return false;
        }

        self.propagator.clear_units();
        self.stats.backtracks += 1;
        debug!("backtracked to depth {}", self.trail.depth());
        true
    }

    /// The smallest unassigned variable.
    fn choose_variable(&self) -> Option<Variable> {
        self.cnf
            .variables()
            .iter()
            .copied()
            .find(|&var| !self.model.is_assigned(var))
    }

    fn push_decisions(&mut self, var: Variable) {
        self.pending.push(Lit::negative(var));
        self.pending.push(Lit::positive(var));
    }

    fn all_assigned(&self) -> bool {
        self.cnf
            .variables()
            .iter()
            .all(|&var| self.model.is_assigned(var))
    }

    /// Assigns every leftover variable to false: once all clauses are
    /// inactive the remaining variables are unconstrained.
    fn complete_model(&mut self) {
        for &var in self.cnf.variables() {
            if !self.model.is_assigned(var) {
                self.model.set(var, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_clause_forces_assignment() {
        let cnf = Cnf::new(vec![vec![1]]);
        let mut solver = DpllSolver::new();
        assert!(solver.solve(&cnf));
        assert_eq!(solver.model().value(1), Some(true));
    }

    #[test]
    fn test_contradictory_units() {
        let cnf = Cnf::new(vec![vec![1], vec![-1]]);
        let mut solver = DpllSolver::new();
        assert!(!solver.solve(&cnf));
    }

    #[test]
    fn test_empty_formula() {
        let cnf = Cnf::default();
        let mut solver = DpllSolver::new();
        assert!(solver.solve(&cnf));
        assert!(solver.model().is_empty());
    }

    #[test]
    fn test_empty_clause_is_unsat_without_search() {
        let cnf = Cnf::new(vec![vec![1, 2], Vec::new()]);
        let mut solver = DpllSolver::new();
        assert!(!solver.solve(&cnf));
        assert_eq!(solver.stats().decisions, 0);
    }

    #[test]
    fn test_backtracking_finds_second_polarity() {
        // 1 must be false; found after the v=true branch conflicts
        let cnf = Cnf::new(vec![vec![-1, 2], vec![-1, -2], vec![-1, 3]]);
        let mut solver = DpllSolver::new();
        assert!(solver.solve(&cnf));
        assert!(cnf.eval(solver.model()));
        assert_eq!(solver.model().value(1), Some(false));
    }

    #[test]
    fn test_pure_literal_elimination() {
        // after deciding 1 = true, variable 2 occurs only negatively
        let cnf = Cnf::new(vec![vec![1, 2], vec![1, 3], vec![-2, -3]]);
        let mut solver = DpllSolver::new();
        assert!(solver.solve(&cnf));
        assert!(cnf.eval(solver.model()));
    }

    #[test]
    fn test_undo_restores_state_exactly() {
        let cnf = Cnf::new(vec![vec![1, 2], vec![-1, 3], vec![-3, 2]]);
        let mut solver = DpllSolver::new();
        solver.init(&cnf);

        let states_before = solver.states.clone();
        let model_before = solver.model.clone();

        assert!(solver.assign(Lit::positive(1)));
        assert_ne!(solver.states, states_before);

        assert!(solver
            .trail
            .undo_one(&mut solver.model, &mut solver.states));
        assert_eq!(solver.states, states_before);
        assert_eq!(solver.model, model_before);
    }

    #[test]
    fn test_model_is_total_over_formula_variables() {
        let cnf = Cnf::new(vec![vec![1, 2], vec![3, -3]]);
        let mut solver = DpllSolver::new();
        assert!(solver.solve(&cnf));
        for &var in cnf.variables() {
            assert!(solver.model().is_assigned(var), "variable {var} unassigned");
        }
    }

    #[test]
    fn test_solver_reusable_across_formulas() {
        let mut solver = DpllSolver::new();
        assert!(!solver.solve(&Cnf::new(vec![vec![1], vec![-1]])));
        assert!(solver.solve(&Cnf::new(vec![vec![2]])));
        assert_eq!(solver.model().value(2), Some(true));
    }
}
