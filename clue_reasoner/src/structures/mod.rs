//! Abstract elements of a formula and their representation.
//!
//! - [Atoms](atom) are the propositions of a formula.
//! - [Literals](literal) pair an atom with a polarity.
//! - [Clauses](clause) are disjunctions of literals.

pub mod atom;
pub mod clause;
pub mod literal;
