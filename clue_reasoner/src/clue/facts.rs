/*!
Observed events, as clauses.

# Hands

A player showing their hand holds each card of the hand, and so each card gives a unit clause.

# Suggestions

A suggestion names three cards, and players are asked in seating order (starting after the suggester) to refute the suggestion by showing one of the cards.

- If nobody refutes, nobody other than the suggester holds any of the cards.
- If some player refutes, each player asked before the refuter holds none of the cards, and the refuter holds at least one of the cards.
  If the shown card is known, the refuter holds that card.

# Validation

Events are given by name, and every name is resolved and every argument checked before any clause is added.
So, a rejected event leaves the clause set as it was.
*/

use crate::{
    clue::{cards::Card, encoder::VariableEncoder, reasoner::ClueReasoner, roster::Location, roster::Roster},
    misc::log::targets::{self},
    oracle::EntailmentOracle,
    structures::clause::{CClause, Clause},
    types::err::{ErrorKind, EventError},
};

/// A refutation of a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refutation {
    /// The seat of the refuting player.
    pub refuter: usize,

    /// The card shown, if known.
    pub shown: Option<Card>,
}

/// Unit clauses stating the player at `seat` holds each of `cards`.
pub fn hand_clauses(encoder: &VariableEncoder, seat: usize, cards: &[Card]) -> Vec<CClause> {
    cards
        .iter()
        .map(|card| vec![encoder.literal(Location::Player(seat), *card, true)])
        .collect()
}

/// Clauses for a suggestion of `cards` by the player at seat `suggester`, with the given refutation, if any.
pub fn suggestion_clauses(
    encoder: &VariableEncoder,
    roster: &Roster,
    suggester: usize,
    cards: [Card; 3],
    refutation: Option<Refutation>,
) -> Vec<CClause> {
    let mut clauses = Vec::default();

    let refuter = refutation.map(|refutation| refutation.refuter);
    for seat in roster.seats_between(suggester, refuter) {
        for card in cards {
            clauses.push(vec![encoder.literal(Location::Player(seat), card, false)]);
        }
    }

    match refutation {
        None => {}

        Some(Refutation {
            refuter,
            shown: Some(card),
        }) => clauses.push(vec![encoder.literal(Location::Player(refuter), card, true)]),

        Some(Refutation { refuter, shown: None }) => clauses.push(
            cards
                .iter()
                .map(|card| encoder.literal(Location::Player(refuter), *card, true))
                .collect(),
        ),
    }

    clauses
}

impl<O: EntailmentOracle> ClueReasoner<O> {
    /// Resolves `name` to the seat of a player, where the case file is not a player.
    fn seat(&self, name: &str) -> Result<usize, ErrorKind> {
        match self.player(name)? {
            Location::Player(seat) => Ok(seat),
            Location::CaseFile => Err(ErrorKind::from(EventError::CaseFileAsPlayer)),
        }
    }

    /// Notes `player` holds each of `cards`.
    ///
    /// Returns the clauses added.
    pub fn hand(&mut self, player: &str, cards: &[&str]) -> Result<Vec<CClause>, ErrorKind> {
        let seat = self.seat(player)?;
        let cards = cards
            .iter()
            .map(|name| self.card(name))
            .collect::<Result<Vec<_>, _>>()?;

        let clauses = hand_clauses(self.encoder(), seat, &cards);
        log::debug!(target: targets::FACTS, "Hand of {player}: {} clauses", clauses.len());

        self.append(&clauses)?;
        Ok(clauses)
    }

    /// Notes `suggester` suggested `cards`, and either `refuter` refuted the suggestion (perhaps showing `shown`) or nobody refuted.
    ///
    /// Returns the clauses added.
    pub fn suggest(
        &mut self,
        suggester: &str,
        cards: [&str; 3],
        refuter: Option<&str>,
        shown: Option<&str>,
    ) -> Result<Vec<CClause>, ErrorKind> {
        let suggester_seat = self.seat(suggester)?;
        let [first, second, third] = cards;
        let cards = [self.card(first)?, self.card(second)?, self.card(third)?];

        let refutation = match (refuter, shown) {
            (None, None) => None,

            (None, Some(_)) => return Err(ErrorKind::from(EventError::ShownWithoutRefuter)),

            (Some(refuter), shown) => {
                let refuter = self.seat(refuter)?;
                if refuter == suggester_seat {
                    return Err(ErrorKind::from(EventError::RefuterIsSuggester));
                }

                let shown = match shown {
                    None => None,
                    Some(name) => {
                        let card = self.card(name)?;
                        if !cards.contains(&card) {
                            return Err(ErrorKind::from(EventError::ShownCardNotSuggested(name.to_string())));
                        }
                        Some(card)
                    }
                };

                Some(Refutation { refuter, shown })
            }
        };

        let clauses = suggestion_clauses(self.encoder(), self.roster(), suggester_seat, cards, refutation);
        log::debug!(target: targets::FACTS, "Suggestion by {suggester}: {} clauses", clauses.len());
        for clause in &clauses {
            log::trace!(target: targets::FACTS, "{}", clause.as_dimacs(false));
        }

        self.append(&clauses)?;
        Ok(clauses)
    }
}

#[cfg(test)]
mod fact_tests {
    use super::*;

    fn four() -> (VariableEncoder, Roster) {
        let roster = Roster::new(["A", "B", "C", "D"]).expect("valid roster");
        (VariableEncoder::new(roster.count(), 21), roster)
    }

    #[test]
    fn hand_is_units() {
        let (encoder, _) = four();
        let clauses = hand_clauses(&encoder, 2, &[Card(0), Card(7)]);
        assert_eq!(clauses, vec![vec![43], vec![50]]);
    }

    #[test]
    fn refuter_without_card() {
        let (encoder, roster) = four();
        let cards = [Card(0), Card(6), Card(12)];
        let refutation = Refutation {
            refuter: 0,
            shown: None,
        };

        let clauses = suggestion_clauses(&encoder, &roster, 2, cards, Some(refutation));

        // D is passed over, then A refutes.
        assert_eq!(clauses.len(), 4);
        assert_eq!(&clauses[..3], &[vec![-64], vec![-70], vec![-76]]);
        assert_eq!(clauses[3], vec![1, 7, 13]);
    }

    #[test]
    fn adjacent_refuter() {
        let (encoder, roster) = four();
        let cards = [Card(0), Card(6), Card(12)];
        let refutation = Refutation {
            refuter: 1,
            shown: Some(Card(6)),
        };

        let clauses = suggestion_clauses(&encoder, &roster, 0, cards, Some(refutation));
        assert_eq!(clauses, vec![vec![28]]);
    }
}
