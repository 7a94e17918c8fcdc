//! A chronological-backtracking DPLL solver for Boolean formulas in
//! conjunctive normal form, using watched-literal unit propagation, the
//! pure-literal rule, and an exact delta log for backtracking.

/// The `sat` module holds the formula model, the DIMACS reader, and the
/// DPLL search engine.
pub mod sat;
