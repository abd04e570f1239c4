//! The reasoner, which owns a roster, the cards of a game, and an oracle holding every clause added so far.
//!
//! The axioms of the game are added when the reasoner is built, and so are always added before any [fact](crate::clue::facts).

use crate::{
    clue::{
        axioms::base_axioms,
        cards::{Card, CardUniverse},
        encoder::VariableEncoder,
        roster::{Location, Roster},
    },
    config::Config,
    context::Context,
    misc::log::targets::{self},
    oracle::EntailmentOracle,
    structures::clause::CClause,
    types::err::{ErrorKind, SetupError},
};

/// Deductions for a game, over some oracle.
pub struct ClueReasoner<O: EntailmentOracle = Context> {
    roster: Roster,
    universe: CardUniverse,
    encoder: VariableEncoder,
    oracle: O,
}

impl ClueReasoner<Context> {
    /// A reasoner using a [Context] built from `config` as the oracle.
    pub fn from_config(roster: Roster, universe: CardUniverse, config: Config) -> Result<Self, ErrorKind> {
        Self::new(roster, universe, Context::from_config(config))
    }
}

impl<O: EntailmentOracle> ClueReasoner<O> {
    /// A reasoner with the given roster, cards, and oracle.
    ///
    /// The oracle is expected to be fresh, and the axioms of the game are added to the oracle.
    pub fn new(roster: Roster, universe: CardUniverse, oracle: O) -> Result<Self, ErrorKind> {
        for name in roster.players().chain(std::iter::once(roster.case_file())) {
            if universe.contains(name) {
                return Err(ErrorKind::from(SetupError::DuplicateName(name.to_string())));
            }
        }

        let encoder = VariableEncoder::new(roster.count(), universe.count());
        let mut reasoner = ClueReasoner {
            roster,
            universe,
            encoder,
            oracle,
        };

        let axioms = base_axioms(&reasoner.encoder, &reasoner.universe);
        log::info!(target: targets::AXIOMS, "Adding {} axioms", axioms.len());
        reasoner.append(&axioms)?;

        Ok(reasoner)
    }

    /// The location with the given name.
    pub fn player(&self, name: &str) -> Result<Location, ErrorKind> {
        Ok(self.roster.lookup(name)?)
    }

    /// The card with the given name.
    pub fn card(&self, name: &str) -> Result<Card, ErrorKind> {
        Ok(self.universe.lookup(name)?)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn universe(&self) -> &CardUniverse {
        &self.universe
    }

    pub fn encoder(&self) -> &VariableEncoder {
        &self.encoder
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// Adds each clause to the oracle.
    pub(crate) fn append(&mut self, clauses: &[CClause]) -> Result<(), ErrorKind> {
        for clause in clauses {
            self.oracle.add_clause(clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod reasoner_tests {
    use super::*;
    use crate::reports::Entailment;

    #[test]
    fn player_named_as_card() {
        let roster = Roster::new(["A", "Knife"]).expect("valid roster");
        let reasoner = ClueReasoner::from_config(roster, CardUniverse::classic(), Config::default());
        assert_eq!(
            reasoner.err(),
            Some(ErrorKind::Setup(SetupError::DuplicateName("Knife".to_string())))
        );
    }

    #[test]
    fn nothing_known_at_start() {
        let roster = Roster::new(["A", "B", "C"]).expect("valid roster");
        let mut reasoner =
            ClueReasoner::from_config(roster, CardUniverse::classic(), Config::default()).expect("valid setup");
        assert_eq!(reasoner.query_names("B", "Rope"), Ok(Entailment::Unknown));
        assert_eq!(reasoner.query_names("cf", "Study"), Ok(Entailment::Unknown));
    }
}
