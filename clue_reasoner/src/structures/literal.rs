//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation is an integer, with the sign of the integer indicating polarity, as is common in DIMACS and solvers such as MiniSAT.
//!
//! ```rust
//! # use clue_reasoner::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), -79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn negation_keeps_atom() {
        let p = CLiteral::new(12, true);
        assert_eq!(p.negate().atom(), 12);
        assert!(!p.negate().polarity());
        assert_eq!(p.negate().negate(), p);
    }
}
