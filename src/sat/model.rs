#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The (partial) truth assignment built during search.
//!
//! A variable is "assigned" iff it is present in the mapping. Rendering
//! follows the DIMACS convention: space-separated signed integers in
//! ascending variable order, a negative integer meaning `false`.

use crate::sat::literal::Variable;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt::Display;

/// A partial mapping from variables to truth values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    assignments: FxHashMap<Variable, bool>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `var` to `value`, overwriting any previous assignment.
    pub fn set(&mut self, var: Variable, value: bool) {
        self.assignments.insert(var, value);
    }

    /// Removes `var` from the mapping.
    pub fn unassign(&mut self, var: Variable) {
        self.assignments.remove(&var);
    }

    /// The truth value of `var`, or `None` when unassigned.
    #[must_use]
    pub fn value(&self, var: Variable) -> Option<bool> {
        self.assignments.get(&var).copied()
    }

    #[must_use]
    pub fn is_assigned(&self, var: Variable) -> bool {
        self.assignments.contains_key(&var)
    }

    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// The number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over the assigned `(variable, value)` pairs in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.assignments.iter().map(|(&var, &value)| (var, value))
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .iter()
            .sorted_unstable_by_key(|&(var, _)| var)
            .map(|(var, value)| {
                #[allow(clippy::cast_possible_wrap)]
                let signed = var as i32;
                if value {
                    signed
                } else {
                    -signed
                }
            })
            .join(" ");
        write!(f, "{rendered}")
    }
}
