//! Undoing assignments.
//!
//! A backjump is a 'jump' from some (higher) level to some previous (lower) level.
//! All assignments made at levels above the target level are undone, and any assignment not yet propagated is forgotten.
//!
//! As no clause is learnt during a solve, backjumps are always chronological, to the level just below the most recent decision which has not been flipped.

use crate::{context::GenericContext, db::LevelIndex, misc::log::targets, structures::literal::Literal};

impl<R: rand::Rng> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// Passing a target level greater than the current level is safe, and nothing will happen.
    pub fn backjump(&mut self, target: LevelIndex) {
        if target < self.trail.level() {
            log::trace!(target: targets::VALUATION, "Backjump from {} to {target}", self.trail.level());
        }

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }

    /// Resets all decisions, assumptions, and consequences of those choices.
    ///
    /// In other words, backjumps to before any choice was made.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
    }
}
