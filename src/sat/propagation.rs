#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Clause-state maintenance for freshly assigned literals.
//!
//! Assigning a literal touches two sets of clauses: those it satisfies
//! become inactive, and those containing its negation have the matching
//! watcher refreshed to another unassigned literal. Clauses left with one
//! watcher are unit (their literal is queued for forcing); clauses left
//! with none are a conflict.

use crate::sat::clause::Clause;
use crate::sat::cnf::Cnf;
use crate::sat::literal::Lit;
use crate::sat::model::Model;
use crate::sat::occurrence::OccurrenceIndex;
use crate::sat::state::{find_watchable, ClauseState, ClauseStateTable};
use crate::sat::trail::Frame;
use log::debug;

/// Applies assignment consequences to the clause state table and carries
/// the queue of discovered unit literals between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Propagator {
    units: Vec<Lit>,
}

impl Propagator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops queued units. Required after a backtrack: they were
    /// discovered under state that no longer exists.
    pub fn clear_units(&mut self) {
        self.units.clear();
    }

    /// Updates clause states for the just-assigned `lit`. Prior states are
    /// recorded in `frame` before the first mutation of each clause.
    ///
    /// Returns false as soon as some clause becomes empty, leaving the
    /// remaining occurrences of the negation unprocessed; a conflict
    /// undoes the whole enclosing frame.
    pub fn propagate(
        &mut self,
        lit: Lit,
        cnf: &Cnf,
        occurrences: &OccurrenceIndex,
        model: &Model,
        states: &mut ClauseStateTable,
        frame: &mut Frame,
    ) -> bool {
        for &i in occurrences.occurrences(lit) {
            let state = &mut states[i];
            if state.active {
                frame.store_prior(i, *state);
                state.active = false;
            }
        }

        let negated = lit.negated();
        for &i in occurrences.occurrences(negated) {
            if !states[i].active {
                continue;
            }
            frame.store_prior(i, states[i]);

            let clause = &cnf[i];
            Self::refresh_watchers(&mut states[i], clause, negated, model);

            if states[i].is_empty() {
                debug!("conflict: clause {i} {clause} has no watchable literal left");
                return false;
            }
            if let Some(slot) = states[i].unit_slot() {
                self.units.push(clause[slot]);
            }
        }

        true
    }

    /// Deactivates every still-active clause containing `pure`. No watcher
    /// work is needed: no active clause contains the negation.
    pub fn deactivate_pure(
        &mut self,
        pure: Lit,
        occurrences: &OccurrenceIndex,
        states: &mut ClauseStateTable,
        frame: &mut Frame,
    ) {
        for &i in occurrences.occurrences(pure) {
            let state = &mut states[i];
            if state.active {
                frame.store_prior(i, *state);
                state.active = false;
            }
        }
    }

    /// The next unit literal to force, if any: first from the queue
    /// (skipping entries whose variable got assigned meanwhile), then by
    /// scanning the state table for active unit clauses the queue never
    /// saw, such as single-literal input clauses.
    pub fn next_unit(
        &mut self,
        cnf: &Cnf,
        states: &ClauseStateTable,
        model: &Model,
    ) -> Option<Lit> {
        while let Some(unit) = self.units.pop() {
            if !model.is_assigned(unit.variable()) {
                return Some(unit);
            }
        }

        states.iter().enumerate().find_map(|(i, state)| {
            let lit = cnf[i][state.unit_slot()?];
            (!model.is_assigned(lit.variable())).then_some(lit)
        })
    }

    fn refresh_watchers(state: &mut ClauseState, clause: &Clause, falsified: Lit, model: &Model) {
        if state.watch1.is_some_and(|w| clause[w] == falsified) {
            state.watch1 = find_watchable(clause, model, state.watch2);
        } else if state.watch2.is_some_and(|w| clause[w] == falsified) {
            state.watch2 = find_watchable(clause, model, state.watch1);
        }
    }
}
