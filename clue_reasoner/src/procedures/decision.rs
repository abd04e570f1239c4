/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

# Heuristics

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom without a value is chosen at random, and otherwise the lowest atom without a value is chosen.

If [phase saving](crate::config::Config::phase_saving) is enabled the chosen atom is valued with the value it last held.
Otherwise, the atom is valued true with probability [polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::seq::IteratorRandom;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng> GenericContext<R> {
    /// Chooses a value for some atom without a value, if possible.
    ///
    /// Note, the decision is not assigned.
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.atom_without_value() {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision_literal = match self.config.phase_saving.value {
                    true => {
                        let previous_value = self.atom_db.previous_value_of(chosen_atom);
                        CLiteral::new(chosen_atom, previous_value)
                    }
                    false => {
                        let random_value = self.rng.random_bool(self.config.polarity_lean.value);
                        CLiteral::new(chosen_atom, random_value)
                    }
                };
                log::trace!(target: targets::SOLVE, "Decision {decision_literal}");

                DecisionOk::Literal(decision_literal)
            }
            None => DecisionOk::Exhausted,
        }
    }

    /// Returns an atom which has no value on the current valuation, either by random choice or by order.
    pub fn atom_without_value(&mut self) -> Option<Atom> {
        match self.rng.random_bool(self.config.random_decision_bias.value) {
            true => self.atom_db.unvalued_atoms().choose(&mut self.rng),
            false => self.atom_db.unvalued_atoms().next(),
        }
    }
}
