/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation.
- The previous value of each atom, used when [phase saving](crate::config::Config::phase_saving).
- A witness, being the valuation of the most recent model found, if no clause has been added since.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::AtomDBError,
};

/// The status of the valuation of an atom, relative to a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom had no value, and is now valued with the polarity of the literal.
    Fresh,

    /// The atom was already valued with the polarity of the literal.
    Set,

    /// The atom was valued with the opposite polarity of the literal.
    Conflict,
}

/// The atom database.
pub struct AtomDB {
    /// The current valuation, indexed by atom.
    /// The atom `0` is a placeholder, and is never valued.
    valuation: Vec<Option<bool>>,

    /// The previous value of each atom.
    previous_valuation: Vec<bool>,

    /// The valuation of the most recent model, if valid.
    witness: Option<Vec<Option<bool>>>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            valuation: vec![None],
            previous_valuation: vec![false],
            witness: None,
        }
    }
}

impl AtomDB {
    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len() - 1
    }

    /// A fresh atom, with the given 'previous' value.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.witness = None;

        Ok(atom)
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The value an atom had when last valued.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation
            .get(atom as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Values the atom of `literal` with the polarity of `literal`, if the atom has no value.
    ///
    /// The atom of `literal` is required to be in the database.
    pub fn set_value(&mut self, literal: CLiteral) -> ValuationStatus {
        let Some(slot) = self.valuation.get_mut(literal.atom() as usize) else {
            log::error!(target: targets::VALUATION, "Attempt to value {literal} outside of the atom database");
            return ValuationStatus::Conflict;
        };

        match *slot {
            None => {
                *slot = Some(literal.polarity());
                ValuationStatus::Fresh
            }
            Some(value) if value == literal.polarity() => ValuationStatus::Set,
            Some(_) => ValuationStatus::Conflict,
        }
    }

    /// Clears the value of an atom, noting the value as the previous value of the atom.
    pub fn drop_value(&mut self, atom: Atom) {
        if let Some(value) = self.valuation[atom as usize].take() {
            self.previous_valuation[atom as usize] = value;
        }
    }

    /// An iterator over atoms without a value, in order.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.valuation
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.is_none().then_some(atom as Atom))
    }

    /// The current valuation, with the placeholder atom removed.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation[1..]
    }

    /// A string of the current valuation, as a sequence of literals.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom as Atom, v).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Records the current valuation as a witness.
    pub fn store_witness(&mut self) {
        self.witness = Some(self.valuation.clone());
    }

    /// Forgets any witness.
    pub fn clear_witness(&mut self) {
        self.witness = None;
    }

    /// The value of an atom on the witness, if there is a witness which values the atom.
    pub fn witness_value_of(&self, atom: Atom) -> Option<bool> {
        self.witness
            .as_ref()
            .and_then(|witness| witness.get(atom as usize).copied().flatten())
    }
}

#[cfg(test)]
mod atom_db_tests {
    use super::*;

    #[test]
    fn set_and_drop() {
        let mut db = AtomDB::default();
        let p = db.fresh_atom(false).expect("fresh atom");
        assert_eq!(p, 1);

        assert_eq!(db.set_value(CLiteral::new(p, true)), ValuationStatus::Fresh);
        assert_eq!(db.set_value(CLiteral::new(p, true)), ValuationStatus::Set);
        assert_eq!(db.set_value(CLiteral::new(p, false)), ValuationStatus::Conflict);

        db.drop_value(p);
        assert_eq!(db.value_of(p), None);
        assert!(db.previous_value_of(p));
    }

    #[test]
    fn witness_is_cleared_by_fresh_atoms() {
        let mut db = AtomDB::default();
        let p = db.fresh_atom(false).expect("fresh atom");
        db.set_value(CLiteral::new(p, false));
        db.store_witness();
        assert_eq!(db.witness_value_of(p), Some(false));

        let _ = db.fresh_atom(false);
        assert_eq!(db.witness_value_of(p), None);
    }
}
