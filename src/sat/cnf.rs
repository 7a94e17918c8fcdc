#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Conjunctive normal form: an ordered sequence of clauses.
//!
//! The formula is satisfied iff every clause is satisfied; the empty
//! formula is trivially satisfied. Empty clauses are preserved (they make
//! the formula unsatisfiable and the solver answers accordingly), as are
//! tautological clauses, so every variable occurring in the input is kept
//! visible to the search.

use crate::sat::clause::Clause;
use crate::sat::literal::Variable;
use crate::sat::model::Model;
use itertools::Itertools;
use std::fmt::Display;
use std::ops::Index;

/// A CNF formula: the clause list plus the sorted set of distinct
/// variables occurring in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cnf {
    clauses: Vec<Clause>,
    variables: Vec<Variable>,
}

impl Cnf {
    /// Creates a formula from an iterator of clauses, each an iterator of
    /// signed DIMACS integers.
    ///
    /// Example: `Cnf::new(vec![vec![1, -2], vec![2, 3]])` builds
    /// `(x1 OR !x2) AND (x2 OR x3)`.
    pub fn new<J: IntoIterator<Item = i32>, I: IntoIterator<Item = J>>(clauses: I) -> Self {
        Self::from_clauses(
            clauses
                .into_iter()
                .map(|clause| clause.into_iter().collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        let variables = clauses
            .iter()
            .flat_map(|clause| clause.iter().map(|lit| lit.variable()))
            .sorted_unstable()
            .dedup()
            .collect();

        Self { clauses, variables }
    }

    /// The number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The distinct variables of the formula, in ascending order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The largest variable identity occurring in the formula, `0` for a
    /// formula with no literals.
    #[must_use]
    pub fn max_variable(&self) -> Variable {
        self.variables.last().copied().unwrap_or(0)
    }

    /// True iff the formula contains a clause with no literals.
    #[must_use]
    pub fn has_empty_clause(&self) -> bool {
        self.iter().any(Clause::is_empty)
    }

    /// True iff every clause is satisfied under `model`.
    #[must_use]
    pub fn eval(&self, model: &Model) -> bool {
        self.iter().all(|clause| clause.eval(model))
    }
}

impl Index<usize> for Cnf {
    type Output = Clause;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clauses[index]
    }
}

impl From<Vec<Vec<i32>>> for Cnf {
    fn from(clauses: Vec<Vec<i32>>) -> Self {
        Self::new(clauses)
    }
}

impl Display for Cnf {
    /// Renders the formula in DIMACS CNF format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.max_variable(), self.len())?;
        for clause in self.iter() {
            for lit in clause.iter() {
                write!(f, "{} ", lit.to_dimacs())?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}
