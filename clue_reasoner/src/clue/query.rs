/*!
Questions about where cards are.

A query asks whether the clauses added so far entail a card is at some location, entail the card is not at the location, or neither.
If the clauses are themselves unsatisfiable, every query is a [contradiction](Entailment::Contradiction).

Queries never add a clause, though the oracle may solve to answer a query.

# The notepad

The [notepad](ClueReasoner::notepad) is the answer to every query, laid out as a grid with a column for each player (and the case file) and a row for each card:

```none
        A       B       C       D       cf
Mustard n       n       Y       n       n
Plum    -       -       n       -       -
...
```
*/

use crate::{
    clue::{
        cards::{Card, Category},
        reasoner::ClueReasoner,
        roster::Location,
    },
    misc::log::targets::{self},
    oracle::EntailmentOracle,
    reports::Entailment,
    types::err::ErrorKind,
};

/// The mark used for an entailment on the notepad.
pub fn symbol(entailment: Entailment) -> &'static str {
    match entailment {
        Entailment::True => "Y",
        Entailment::False => "n",
        Entailment::Unknown => "-",
        Entailment::Contradiction => "X",
    }
}

/// The result of every query, for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notepad {
    /// The names of each location, in order.
    pub locations: Vec<String>,

    /// For each card, the name of the card and the result of the query for each location.
    pub rows: Vec<(String, Vec<Entailment>)>,
}

impl Notepad {
    /// The result of the query for `card` at `location`, given the index of the location.
    pub fn get(&self, card: Card, location_index: usize) -> Option<Entailment> {
        self.rows.get(card.0)?.1.get(location_index).copied()
    }
}

impl std::fmt::Display for Notepad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for location in &self.locations {
            write!(f, "\t{location}")?;
        }
        writeln!(f)?;

        for (card, entailments) in &self.rows {
            write!(f, "{card}")?;
            for entailment in entailments {
                write!(f, "\t{}", symbol(*entailment))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<O: EntailmentOracle> ClueReasoner<O> {
    /// Whether `card` is at `location`.
    pub fn query(&mut self, location: Location, card: Card) -> Result<Entailment, ErrorKind> {
        let literal = self.encoder().literal(location, card, true);
        let entailment = self.oracle_mut().test_literal(literal)?;
        log::trace!(target: targets::QUERY, "{literal}: {entailment}");
        Ok(entailment)
    }

    /// Whether the card named `card` is at the location named `location`.
    pub fn query_names(&mut self, location: &str, card: &str) -> Result<Entailment, ErrorKind> {
        let location = self.player(location)?;
        let card = self.card(card)?;
        self.query(location, card)
    }

    /// The result of every query.
    pub fn notepad(&mut self) -> Result<Notepad, ErrorKind> {
        let locations = self.roster().locations().collect::<Vec<_>>();
        let cards = self.universe().cards().collect::<Vec<_>>();

        let mut rows = Vec::with_capacity(cards.len());
        for card in cards {
            let mut entailments = Vec::with_capacity(locations.len());
            for location in &locations {
                entailments.push(self.query(*location, card)?);
            }
            rows.push((self.universe().name(card).to_string(), entailments));
        }

        Ok(Notepad {
            locations: locations
                .iter()
                .map(|location| self.roster().name(*location).to_string())
                .collect(),
            rows,
        })
    }

    /// The cards of `category` which may yet be in the case file.
    ///
    /// If the case file is known to hold some card of the category, that card is the only candidate.
    pub fn case_file_candidates(&mut self, category: Category) -> Result<Vec<Card>, ErrorKind> {
        let cards = self.universe().cards_in(category).collect::<Vec<_>>();

        let mut candidates = Vec::default();
        for card in cards {
            match self.query(Location::CaseFile, card)? {
                Entailment::True => return Ok(vec![card]),
                Entailment::Unknown => candidates.push(card),
                Entailment::False => {}
                Entailment::Contradiction => return Ok(Vec::default()),
            }
        }

        log::debug!(target: targets::QUERY, "{} candidates for {category}", candidates.len());
        Ok(candidates)
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn notepad_layout() {
        let notepad = Notepad {
            locations: vec!["A".to_string(), "cf".to_string()],
            rows: vec![
                ("Knife".to_string(), vec![Entailment::True, Entailment::False]),
                ("Rope".to_string(), vec![Entailment::Unknown, Entailment::Contradiction]),
            ],
        };

        assert_eq!(notepad.to_string(), "\tA\tcf\nKnife\tY\tn\nRope\t-\tX\n");
        assert_eq!(notepad.get(Card(1), 0), Some(Entailment::Unknown));
        assert_eq!(notepad.get(Card(2), 0), None);
    }
}
