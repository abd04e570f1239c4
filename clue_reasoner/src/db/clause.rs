/*!
A database of clauses.

Unit clauses are stored as the literal asserted, and all other clauses are stored in order of addition, keyed by their index.
Clauses are never removed.

The order of literals in a stored (non-unit) clause is revised during [BCP](crate::procedures::bcp), as the first two literals of a clause are those watched.
*/

use crate::{
    db::{ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::ClauseDBError,
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Literals asserted by unit clauses, in order of addition.
    pub(crate) units: Vec<CLiteral>,

    /// Clauses of two or more literals, in order of addition.
    pub(crate) clauses: Vec<CClause>,
}

impl ClauseDB {
    /// Stores a unit clause.
    pub fn store_unit(&mut self, literal: CLiteral) -> ClauseKey {
        log::trace!(target: targets::CLAUSE_DB, "Unit {literal}");
        self.units.push(literal);
        ClauseKey::OriginalUnit(literal)
    }

    /// Stores a clause of two or more literals.
    pub fn store(&mut self, clause: CClause) -> Result<ClauseKey, ClauseDBError> {
        match clause.len() {
            0 => Err(ClauseDBError::EmptyClause),
            _ => {
                let index = FormulaIndex::try_from(self.clauses.len())
                    .map_err(|_| ClauseDBError::InvalidKeyIndex)?;
                log::trace!(target: targets::CLAUSE_DB, "Clause {index}: {clause:?}");
                self.clauses.push(clause);
                Ok(ClauseKey::Original(index))
            }
        }
    }

    /// The clause for some key, as a vector of literals.
    pub fn get(&self, key: &ClauseKey) -> Result<CClause, ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(literal) => Ok(vec![*literal]),
            ClauseKey::Original(index) => self
                .clauses
                .get(*index as usize)
                .cloned()
                .ok_or(ClauseDBError::InvalidKeyIndex),
        }
    }

    /// A count of all clauses, unit or otherwise.
    pub fn clause_count(&self) -> usize {
        self.units.len() + self.clauses.len()
    }

    /// An iterator over all clauses, with units first.
    pub fn all_clauses(&self) -> impl Iterator<Item = CClause> + '_ {
        self.units
            .iter()
            .map(|unit| vec![*unit])
            .chain(self.clauses.iter().cloned())
    }
}
