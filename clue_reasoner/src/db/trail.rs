/*!
The trail of assignments made, in order, split into levels.

- Level zero holds consequences of the formula, and is never undone.
- At most one level of assumptions follows, holding the assumptions of a solve and their consequences.
- Each remaining level begins with a decision, followed by consequences of the decision.

A decision may be *flipped*, in which case the level begins with the negation of the original decision, and the decision is not revisited.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// The reason a level was opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    /// A level of assumptions.
    Assumptions,

    /// A level opened with a decision.
    Decision {
        /// The literal decided.
        literal: CLiteral,

        /// Whether the decision is the negation of some earlier decision.
        flipped: bool,
    },
}

/// A level on the trail.
#[derive(Clone, Copy, Debug)]
pub struct Level {
    /// The index of the first assignment of the level.
    pub start: usize,

    /// The reason for the level.
    pub kind: LevelKind,
}

#[derive(Default)]
pub struct Trail {
    /// Assignments, in order.
    pub literals: Vec<CLiteral>,

    /// Levels above level zero.
    pub levels: Vec<Level>,

    /// The index of the first assignment which has not been propagated.
    pub q_head: usize,
}

impl Trail {
    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.levels.len() as LevelIndex
    }

    /// Opens a fresh level.
    pub fn push_level(&mut self, kind: LevelKind) {
        self.levels.push(Level {
            start: self.literals.len(),
            kind,
        });
    }

    /// Stores an assignment at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The next assignment to propagate, if any, marking the assignment as propagated.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }

    /// The highest level opened with a decision which has not been flipped, together with the decision.
    pub fn highest_open_decision(&self) -> Option<(LevelIndex, CLiteral)> {
        self.levels
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, level)| match level.kind {
                LevelKind::Decision {
                    literal,
                    flipped: false,
                } => Some(((index + 1) as LevelIndex, literal)),
                _ => None,
            })
    }

    /// Removes levels above the given level, returning the assignments removed.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any assignment.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        match self.levels.get(level as usize) {
            Some(&Level { start, .. }) => {
                self.levels.truncate(level as usize);
                let removed = self.literals.split_off(start);
                self.q_head = self.q_head.min(self.literals.len());
                removed
            }
            None => Vec::default(),
        }
    }
}

#[cfg(test)]
#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn open_decisions_skip_flips_and_assumptions() {
        let mut trail = Trail::default();
        trail.store_assignment(1);

        trail.push_level(LevelKind::Assumptions);
        trail.store_assignment(-2);

        trail.push_level(LevelKind::Decision {
            literal: 3,
            flipped: false,
        });
        trail.store_assignment(3);

        trail.push_level(LevelKind::Decision {
            literal: -4,
            flipped: true,
        });
        trail.store_assignment(-4);

        assert_eq!(trail.highest_open_decision(), Some((2, 3)));

        let removed = trail.clear_assignments_above(1);
        assert_eq!(removed, vec![3, -4]);
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.highest_open_decision(), None);
    }
}
