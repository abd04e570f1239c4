/*!
Databases for holding information relevant to a solve.

- [atom](crate::db::atom) holds the current valuation, the previous value of each atom, and the witness of the most recent model.
- [clause](crate::db::clause) holds the formula, as unit literals and (non-unit) clauses.
- [watches](crate::db::watches) holds, for each literal, the clauses watching the literal.
- [trail](crate::db::trail) holds the sequence of assignments made, split into levels.

Clauses are only ever added to the clause database.
A solve reads the formula, and writes only to the valuation, watches, and trail.
*/

pub mod atom;
pub mod clause;
pub mod trail;
pub mod watches;

use crate::structures::literal::CLiteral;

/// The index of a level.
///
/// Level zero holds consequences of the formula alone, and is never undone.
pub type LevelIndex = u32;

/// The index of a (non-unit) clause in the clause database.
pub type FormulaIndex = u32;

/// A key to access a clause in the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// A unit clause, which is keyed by the literal it asserts.
    OriginalUnit(CLiteral),

    /// A clause of two or more literals.
    Original(FormulaIndex),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OriginalUnit(literal) => write!(f, "OriginalUnit({literal})"),
            Self::Original(index) => write!(f, "Original({index})"),
        }
    }
}
