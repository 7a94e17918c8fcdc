//! End-to-end tests driving the solver through the DIMACS reader, the way
//! the command-line driver does.

use dpll_sat::sat::cnf::Cnf;
use dpll_sat::sat::dimacs::parse_dimacs_text;
use dpll_sat::sat::dpll::DpllSolver;
use dpll_sat::sat::model::Model;
use dpll_sat::sat::occurrence::OccurrenceIndex;
use dpll_sat::sat::solver::Solver;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn solve_text(text: &str) -> (bool, Model, Cnf) {
    let cnf = parse_dimacs_text(text).unwrap();
    let mut solver = DpllSolver::new();
    let sat = solver.solve(&cnf);
    (sat, solver.model().clone(), cnf)
}

/// Checks satisfiability by enumerating every total assignment. Only
/// usable for small variable counts.
fn brute_force_satisfiable(cnf: &Cnf) -> bool {
    let vars = cnf.variables();
    assert!(vars.len() <= 20, "formula too large to enumerate");

    (0..(1u32 << vars.len())).any(|bits| {
        let mut model = Model::new();
        for (position, &var) in vars.iter().enumerate() {
            model.set(var, bits >> position & 1 == 1);
        }
        cnf.eval(&model)
    })
}

/// The standard pigeonhole encoding: every pigeon gets a hole, no hole
/// holds two pigeons. Unsatisfiable whenever `pigeons > holes`.
fn pigeonhole(pigeons: u32, holes: u32) -> Cnf {
    let var = |pigeon: u32, hole: u32| ((pigeon - 1) * holes + hole) as i32;
    let mut clauses: Vec<Vec<i32>> = Vec::new();

    for pigeon in 1..=pigeons {
        clauses.push((1..=holes).map(|hole| var(pigeon, hole)).collect());
    }
    for hole in 1..=holes {
        for first in 1..=pigeons {
            for second in first + 1..=pigeons {
                clauses.push(vec![-var(first, hole), -var(second, hole)]);
            }
        }
    }

    Cnf::new(clauses)
}

#[test]
fn single_positive_unit() {
    let (sat, model, cnf) = solve_text("1 0\n");
    assert!(sat);
    assert_eq!(model.value(1), Some(true));
    assert!(cnf.eval(&model));
}

#[test]
fn contradictory_units_unsat() {
    let (sat, _, _) = solve_text("1 0\n-1 0\n");
    assert!(!sat);
}

#[test]
fn binary_clause_with_forced_negations_unsat() {
    let (sat, _, cnf) = solve_text("1 2 0\n-1 0\n-2 0\n");
    assert!(!sat);
    assert!(!brute_force_satisfiable(&cnf));
}

#[test]
fn implication_chain() {
    let (sat, model, cnf) = solve_text("1 -2 0\n2 -3 0\n3 0\n");
    assert!(sat);
    assert!(cnf.eval(&model));
    // 3 is forced, which propagates up the chain
    assert_eq!(model.value(3), Some(true));
    assert_eq!(model.value(2), Some(true));
    assert_eq!(model.value(1), Some(true));
}

#[test]
fn exclusive_pair() {
    let (sat, model, cnf) = solve_text("1 2 0\n-1 -2 0\n");
    assert!(sat);
    assert!(cnf.eval(&model));
    assert_ne!(model.value(1), model.value(2));
}

#[test]
fn pigeonhole_four_into_three_unsat() {
    let cnf = pigeonhole(4, 3);
    let mut solver = DpllSolver::new();
    assert!(!solver.solve(&cnf));
}

#[test]
fn pigeonhole_three_into_three_sat() {
    let cnf = pigeonhole(3, 3);
    let mut solver = DpllSolver::new();
    assert!(solver.solve(&cnf));
    assert!(cnf.eval(solver.model()));
}

#[test]
fn unsat_verdicts_match_exhaustive_enumeration() {
    for text in ["1 0\n-1 0\n", "1 2 0\n-1 0\n-2 0\n", "1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n"] {
        let (sat, _, cnf) = solve_text(text);
        assert!(!sat);
        assert!(!brute_force_satisfiable(&cnf));
    }
}

#[test]
fn verdicts_agree_with_enumeration_on_generated_formulas() {
    // a fixed seed keeps the instances reproducible
    let mut rng = StdRng::seed_from_u64(0x2545_f491_4f6c_dd1d);

    for _ in 0..50 {
        let num_vars: i32 = rng.gen_range(4..=8);
        let num_clauses = rng.gen_range(3..=17);
        let clauses: Vec<Vec<i32>> = (0..num_clauses)
            .map(|_| {
                (0..3)
                    .map(|_| {
                        let var = rng.gen_range(1..=num_vars);
                        if rng.gen() {
                            var
                        } else {
                            -var
                        }
                    })
                    .collect()
            })
            .collect();
        let cnf = Cnf::new(clauses);

        let mut solver = DpllSolver::new();
        let sat = solver.solve(&cnf);
        assert_eq!(sat, brute_force_satisfiable(&cnf), "formula: {cnf}");
        if sat {
            assert!(cnf.eval(solver.model()), "bad model for: {cnf}");
        }
    }
}

#[test]
fn sat_model_assigns_every_variable() {
    // variable 4 only occurs in a tautological clause, 5 only negatively
    let (sat, model, cnf) = solve_text("1 2 0\n-2 3 0\n4 -4 0\n-5 0\n");
    assert!(sat);
    for &var in cnf.variables() {
        assert!(model.is_assigned(var), "variable {var} left unassigned");
    }
}

#[test]
fn empty_formula_sat_with_empty_model() {
    let (sat, model, _) = solve_text("p cnf 0 0\n");
    assert!(sat);
    assert!(model.is_empty());
}

#[test]
fn empty_clause_unsat() {
    let (sat, _, _) = solve_text("1 2 0\n0\n");
    assert!(!sat);
}

#[test]
fn repeated_solves_are_deterministic() {
    let cnf = parse_dimacs_text("1 2 0\n-1 3 0\n-3 -2 0\n2 -4 0\n").unwrap();
    let mut solver = DpllSolver::new();

    let first_verdict = solver.solve(&cnf);
    let first_model = solver.model().clone();
    let second_verdict = solver.solve(&cnf);

    assert_eq!(first_verdict, second_verdict);
    assert_eq!(&first_model, solver.model());
}

#[test]
fn occurrence_index_unchanged_by_solving() {
    let cnf = parse_dimacs_text("1 -2 0\n2 3 0\n-1 -3 0\n").unwrap();
    let before = OccurrenceIndex::new(&cnf);

    let mut solver = DpllSolver::new();
    solver.solve(&cnf);

    assert_eq!(before, OccurrenceIndex::new(&cnf));
}
