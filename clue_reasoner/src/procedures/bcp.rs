/*!
A context method to aid boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the atom with the opposite polarity and updating the watches of the clause, if possible, assigning the consequence of the asserting clause, or identifying the clause conflicts with the current valuation.

# Complications

The watch list under examination is taken from the watch database for the duration of BCP, and restored afterwards.
This avoids a mutable borrow of the watch list conflicting with the mutable borrow of the watch database when some clause moves its watch.
Still, the *taken* watch list is never the target of a moved watch, as a watch only moves to a literal which is not false, and the taken list is for a literal which has just become false.
*/

use crate::{
    context::GenericContext,
    db::{atom::ValuationStatus, ClauseKey},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// Noted outcomes of boolean constraint propagation which halt propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BCPError {
    /// A conflict was found with the given clause.
    Conflict(ClauseKey),
}

impl<R: rand::Rng> GenericContext<R> {
    /// Values the atom of `literal` with the polarity of `literal`, and notes the assignment on the trail if the atom had no value.
    pub fn assign(&mut self, literal: CLiteral) -> ValuationStatus {
        let status = self.atom_db.set_value(literal);
        if status == ValuationStatus::Fresh {
            log::trace!(target: targets::VALUATION, "Assigned {literal} at level {}", self.trail.level());
            self.trail.store_assignment(literal);
        }
        status
    }

    /// Propagates every assignment on the trail which has not been propagated.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// # Soundness
    /// The implementation of BCP requires the literals at index 0 and 1 of each clause are watched.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), BCPError> {
        self.counters.total_propagations += 1;

        let false_literal = literal.negate();
        let mut list = std::mem::take(self.watches.list_mut(false_literal));

        let mut index = 0;
        let mut result = Ok(());

        'watch_loop: while index < list.len() {
            let key = list[index];
            let ClauseKey::Original(formula_index) = key else {
                log::error!(target: targets::PROPAGATION, "Unit clause {key} found in a watch list");
                index += 1;
                continue 'watch_loop;
            };

            let clause = &mut self.clause_db.clauses[formula_index as usize];
            if clause[0] == false_literal {
                clause.swap(0, 1);
            }

            let other = clause[0];
            if self.atom_db.value_of(other.atom()) == Some(other.polarity()) {
                index += 1;
                continue 'watch_loop;
            }

            for candidate_index in 2..clause.len() {
                let candidate = clause[candidate_index];
                if self.atom_db.value_of(candidate.atom()) != Some(!candidate.polarity()) {
                    clause.swap(1, candidate_index);
                    self.watches.watch(candidate, key);
                    list.swap_remove(index);
                    continue 'watch_loop;
                }
            }

            match self.assign(other) {
                ValuationStatus::Fresh | ValuationStatus::Set => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is {other}");
                    index += 1;
                }

                ValuationStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is contradiction");
                    result = Err(BCPError::Conflict(key));
                    break 'watch_loop;
                }
            }
        }

        *self.watches.list_mut(false_literal) = list;
        result
    }
}
