#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::sat::cnf::Cnf;
use crate::sat::model::Model;

/// The contract every solver backend satisfies: decide satisfiability and,
/// on a positive verdict, expose a total model over the formula's
/// variables. `model` is meaningful only after `solve` returned true.
pub trait Solver {
    fn solve(&mut self, cnf: &Cnf) -> bool;
    fn model(&self) -> &Model;
}

/// Counters accumulated over one `solve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Literals popped from the pending-decision stack.
    pub decisions: usize,
    /// Literals forced by unit propagation or the pure-literal rule.
    pub propagations: usize,
    /// Successful backtracks to an untried polarity.
    pub backtracks: usize,
}
