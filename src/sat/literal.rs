#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Variables and literals.
//!
//! A variable is an unsigned integer identity (`v >= 1` for formulas read
//! from DIMACS input). A literal pairs a variable with a polarity: the
//! positive literal `v` asserts `v = true`, the negative literal `~v`
//! asserts `v = false`.

use crate::sat::model::Model;
use std::fmt::Display;

/// The identity of a propositional variable.
pub type Variable = u32;

/// A literal, packed into a single `u32`: the low 31 bits hold the
/// variable, the top bit holds the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Lit(u32);

/// Extract the variable value.
const VAR_MASK: u32 = 0x7FFF_FFFF;
/// How far to left shift to get to the polarity bit.
const POLARITY_SHIFT: u32 = 31;

impl Lit {
    /// Creates a literal over `var`. `polarity = true` is the positive
    /// literal, `polarity = false` the negated one.
    #[must_use]
    pub const fn new(var: Variable, polarity: bool) -> Self {
        Self(var & VAR_MASK | ((polarity as u32) << POLARITY_SHIFT))
    }

    /// The negated literal over `var`.
    #[must_use]
    pub const fn negative(var: Variable) -> Self {
        Self::new(var, false)
    }

    /// The positive literal over `var`.
    #[must_use]
    pub const fn positive(var: Variable) -> Self {
        Self::new(var, true)
    }

    /// O(1)
    #[must_use]
    pub const fn variable(self) -> Variable {
        self.0 & VAR_MASK
    }

    /// O(1)
    #[must_use]
    pub const fn polarity(self) -> bool {
        (self.0 >> POLARITY_SHIFT) != 0
    }

    #[must_use]
    pub const fn is_negated(self) -> bool {
        !self.polarity()
    }

    /// The same variable with the opposite polarity.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self(self.0 ^ (1 << POLARITY_SHIFT))
    }

    /// Builds a literal from a signed DIMACS integer: `n` is the positive
    /// literal over variable `n`, `-n` the negative one.
    #[must_use]
    pub const fn from_dimacs(value: i32) -> Self {
        Self::new(value.unsigned_abs(), value.is_positive())
    }

    /// The signed DIMACS rendering of this literal.
    #[must_use]
    pub const fn to_dimacs(self) -> i32 {
        #[allow(clippy::cast_possible_wrap)]
        let var = self.variable() as i32;
        if self.polarity() {
            var
        } else {
            -var
        }
    }

    /// Evaluates the literal under a partial model. `None` when the
    /// variable is unassigned.
    #[must_use]
    pub fn eval(self, model: &Model) -> Option<bool> {
        model.value(self.variable()).map(|b| b == self.polarity())
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negated() {
            write!(f, "~{}", self.variable())
        } else {
            write!(f, "{}", self.variable())
        }
    }
}
