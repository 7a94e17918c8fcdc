#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Clauses: disjunctions of literals.
//!
//! A clause is satisfied under a model iff at least one of its literals
//! evaluates to true. A clause with no literals is unsatisfiable. The
//! literal sequence is fixed at construction and never mutated afterwards,
//! so positions into it remain valid for the lifetime of the formula.

use crate::sat::literal::Lit;
use crate::sat::model::Model;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;
use std::ops::Index;

/// An ordered sequence of literals, interpreted as their disjunction.
///
/// Exact duplicates are dropped at construction; a tautological pair
/// (`v` and `~v`) is kept, since the variable still occurs in the formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Clause {
    literals: SmallVec<[Lit; 8]>,
}

impl Clause {
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lit> {
        self.literals.iter()
    }

    /// True iff some literal is assigned and evaluates to true. A clause
    /// whose literals are all false is falsified; one with an unassigned
    /// literal and no true literal is merely unresolved. Both yield
    /// `false` here.
    #[must_use]
    pub fn eval(&self, model: &Model) -> bool {
        self.iter().any(|&lit| lit.eval(model) == Some(true))
    }
}

impl Index<usize> for Clause {
    type Output = Lit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.literals[index]
    }
}

impl FromIterator<Lit> for Clause {
    /// Collects literals, dropping exact duplicates while preserving
    /// first-occurrence order.
    fn from_iter<I: IntoIterator<Item = Lit>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().unique().collect(),
        }
    }
}

impl FromIterator<i32> for Clause {
    /// Creates a clause from signed DIMACS integers.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        iter.into_iter().map(Lit::from_dimacs).collect()
    }
}

impl From<Vec<i32>> for Clause {
    fn from(literals: Vec<i32>) -> Self {
        literals.into_iter().collect()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.iter().join(", "))
    }
}
