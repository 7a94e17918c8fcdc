#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Per-variable occurrence lists: for every variable, the indices of the
//! clauses in which it appears positively and negatively. Built once at
//! solver initialisation and read-only afterwards.

use crate::sat::cnf::Cnf;
use crate::sat::literal::{Lit, Variable};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

type OccList = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OccurrenceIndex {
    positive: FxHashMap<Variable, OccList>,
    negative: FxHashMap<Variable, OccList>,
}

impl OccurrenceIndex {
    /// Scans every clause once. A clause index is listed at most once per
    /// side; a variable occurring in both polarities within one clause is
    /// listed on both sides.
    #[must_use]
    pub fn new(cnf: &Cnf) -> Self {
        let mut index = Self::default();

        for (i, clause) in cnf.iter().enumerate() {
            for &lit in clause.iter() {
                let side = if lit.polarity() {
                    &mut index.positive
                } else {
                    &mut index.negative
                };
                let entries = side.entry(lit.variable()).or_default();
                if entries.last() != Some(&i) {
                    entries.push(i);
                }
            }
        }

        index
    }

    /// The indices of clauses in which `lit` itself occurs.
    #[must_use]
    pub fn occurrences(&self, lit: Lit) -> &[usize] {
        if lit.polarity() {
            self.positive(lit.variable())
        } else {
            self.negative(lit.variable())
        }
    }

    /// The indices of clauses in which `var` occurs positively.
    #[must_use]
    pub fn positive(&self, var: Variable) -> &[usize] {
        self.positive.get(&var).map_or(&[], SmallVec::as_slice)
    }

    /// The indices of clauses in which `var` occurs negatively.
    #[must_use]
    pub fn negative(&self, var: Variable) -> &[usize] {
        self.negative.get(&var).map_or(&[], SmallVec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides() {
        let cnf = Cnf::new(vec![vec![1, -2], vec![2, 3], vec![-1, -3]]);
        let index = OccurrenceIndex::new(&cnf);

        assert_eq!(index.positive(1), &[0]);
        assert_eq!(index.negative(1), &[2]);
        assert_eq!(index.positive(2), &[1]);
        assert_eq!(index.negative(2), &[0]);
        assert_eq!(index.positive(3), &[1]);
        assert_eq!(index.negative(3), &[2]);
    }

    #[test]
    fn test_both_polarities_in_one_clause() {
        let cnf = Cnf::new(vec![vec![1, -1]]);
        let index = OccurrenceIndex::new(&cnf);
        assert_eq!(index.positive(1), &[0]);
        assert_eq!(index.negative(1), &[0]);
    }

    #[test]
    fn test_occurrences_by_literal() {
        let cnf = Cnf::new(vec![vec![1, -2]]);
        let index = OccurrenceIndex::new(&cnf);
        assert_eq!(index.occurrences(Lit::positive(1)), &[0]);
        assert_eq!(index.occurrences(Lit::negative(2)), &[0]);
        assert!(index.occurrences(Lit::negative(1)).is_empty());
    }

    #[test]
    fn test_absent_variable() {
        let cnf = Cnf::new(vec![vec![1]]);
        let index = OccurrenceIndex::new(&cnf);
        assert!(index.positive(9).is_empty());
        assert!(index.negative(9).is_empty());
    }
}
