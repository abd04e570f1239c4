/*!
A sample game, with the classic cards and four players, as seen by the player `A`.

The deal is fixed, and each suggestion is refuted (or not) as the deal requires.
A sees the card shown when A suggests or refutes, and otherwise only sees who refuted.

The case file holds Scarlet, the rope, and the library.
*/

use crate::{
    clue::{cards::CardUniverse, reasoner::ClueReasoner, roster::Roster},
    oracle::EntailmentOracle,
    structures::clause::CClause,
    types::err::ErrorKind,
};

/// The players, in seating order.
pub const PLAYERS: [&str; 4] = ["A", "B", "C", "D"];

/// The cards held at each location, with the case file last.
pub const DEAL: [(&str, &[&str]); 5] = [
    ("A", &["Mustard", "Knife", "Hall", "Kitchen", "Study"]),
    ("B", &["Plum", "Candlestick", "Wrench", "Lounge", "Ballroom"]),
    ("C", &["Green", "Revolver", "Dining", "Conservatory"]),
    ("D", &["Peacock", "White", "Pipe", "Billiard"]),
    ("cf", &["Scarlet", "Rope", "Library"]),
];

/// Something observed during play.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    Hand {
        player: &'static str,
        cards: &'static [&'static str],
    },

    Suggestion {
        suggester: &'static str,
        cards: [&'static str; 3],
        refuter: Option<&'static str>,
        shown: Option<&'static str>,
    },
}

impl Event {
    /// Notes the event with `reasoner`, returning the clauses added.
    pub fn apply<O: EntailmentOracle>(&self, reasoner: &mut ClueReasoner<O>) -> Result<Vec<CClause>, ErrorKind> {
        match *self {
            Event::Hand { player, cards } => reasoner.hand(player, cards),

            Event::Suggestion {
                suggester,
                cards,
                refuter,
                shown,
            } => reasoner.suggest(suggester, cards, refuter, shown),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Hand { player, cards } => write!(f, "{player} holds {}", cards.join(", ")),

            Event::Suggestion {
                suggester,
                cards,
                refuter,
                shown,
            } => {
                write!(f, "{suggester} suggests {}", cards.join(", "))?;
                match (refuter, shown) {
                    (None, _) => write!(f, ", and nobody refutes"),
                    (Some(refuter), None) => write!(f, ", and {refuter} refutes"),
                    (Some(refuter), Some(card)) => write!(f, ", and {refuter} shows {card}"),
                }
            }
        }
    }
}

const fn suggestion(
    suggester: &'static str,
    cards: [&'static str; 3],
    refuter: Option<&'static str>,
    shown: Option<&'static str>,
) -> Event {
    Event::Suggestion {
        suggester,
        cards,
        refuter,
        shown,
    }
}

/// The events of the game, in order of play.
pub const EVENTS: [Event; 11] = [
    Event::Hand {
        player: "A",
        cards: DEAL[0].1,
    },
    suggestion("A", ["Scarlet", "Rope", "Lounge"], Some("B"), Some("Lounge")),
    suggestion("B", ["Green", "Knife", "Library"], Some("C"), None),
    suggestion("C", ["Peacock", "Pipe", "Hall"], Some("D"), None),
    suggestion("D", ["Scarlet", "Rope", "Study"], Some("A"), Some("Study")),
    suggestion("A", ["White", "Candlestick", "Library"], Some("B"), Some("Candlestick")),
    suggestion("B", ["Scarlet", "Rope", "Library"], None, None),
    suggestion("C", ["Mustard", "Revolver", "Billiard"], Some("D"), None),
    suggestion("A", ["Green", "Pipe", "Dining"], Some("C"), Some("Dining")),
    suggestion("D", ["Plum", "Wrench", "Conservatory"], Some("B"), None),
    suggestion("A", ["Peacock", "Revolver", "Ballroom"], Some("B"), Some("Ballroom")),
];

/// A reasoner for the sample game, with nothing yet observed.
pub fn reasoner<O: EntailmentOracle>(oracle: O) -> Result<ClueReasoner<O>, ErrorKind> {
    ClueReasoner::new(Roster::new(PLAYERS)?, CardUniverse::classic(), oracle)
}
