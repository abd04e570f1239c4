//! The cards of a game, each in one of three categories.
//!
//! Cards are ordered suspects first, then weapons, then rooms, and a [Card] is the index of a card in this order.

use std::ops::Range;

use crate::types::err::{LookupError, SetupError};

/// A category of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Suspects,
    Weapons,
    Rooms,
}

impl Category {
    /// Every category, in order.
    pub const ALL: [Category; 3] = [Category::Suspects, Category::Weapons, Category::Rooms];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suspects => write!(f, "suspects"),
            Self::Weapons => write!(f, "weapons"),
            Self::Rooms => write!(f, "rooms"),
        }
    }
}

/// A card, as an index into a [CardUniverse].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(pub usize);

/// The (fixed) cards of a game.
#[derive(Clone, Debug)]
pub struct CardUniverse {
    names: Vec<String>,
    suspect_count: usize,
    weapon_count: usize,
}

impl CardUniverse {
    /// A universe from the names of the cards of each category.
    ///
    /// Each category must have some card, and no name may be used twice.
    pub fn new<S: Into<String>>(
        suspects: impl IntoIterator<Item = S>,
        weapons: impl IntoIterator<Item = S>,
        rooms: impl IntoIterator<Item = S>,
    ) -> Result<Self, SetupError> {
        let mut names: Vec<String> = Vec::default();
        let mut counts = [0; 3];

        for (category, category_names) in [
            (Category::Suspects, suspects.into_iter().map(Into::into).collect::<Vec<String>>()),
            (Category::Weapons, weapons.into_iter().map(Into::into).collect()),
            (Category::Rooms, rooms.into_iter().map(Into::into).collect()),
        ] {
            if category_names.is_empty() {
                return Err(SetupError::EmptyCategory(category));
            }
            counts[category as usize] = category_names.len();

            for name in category_names {
                if names.contains(&name) {
                    return Err(SetupError::DuplicateName(name));
                }
                names.push(name);
            }
        }

        Ok(CardUniverse {
            names,
            suspect_count: counts[0],
            weapon_count: counts[1],
        })
    }

    /// The cards of the standard game.
    pub fn classic() -> Self {
        CardUniverse {
            names: [
                "Mustard", "Plum", "Green", "Peacock", "Scarlet", "White", //
                "Knife", "Candlestick", "Revolver", "Rope", "Pipe", "Wrench", //
                "Hall", "Lounge", "Dining", "Kitchen", "Ballroom", "Conservatory", "Billiard", "Library", "Study",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            suspect_count: 6,
            weapon_count: 6,
        }
    }

    /// A count of all cards.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Every card, in order.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        (0..self.count()).map(Card)
    }

    /// The range of card indices for a category.
    fn range(&self, category: Category) -> Range<usize> {
        let weapons_end = self.suspect_count + self.weapon_count;
        match category {
            Category::Suspects => 0..self.suspect_count,
            Category::Weapons => self.suspect_count..weapons_end,
            Category::Rooms => weapons_end..self.count(),
        }
    }

    /// The cards of a category, in order.
    pub fn cards_in(&self, category: Category) -> impl Iterator<Item = Card> {
        self.range(category).map(Card)
    }

    /// The category of a card.
    pub fn category_of(&self, card: Card) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.range(*category).contains(&card.0))
    }

    /// The name of a card.
    pub fn name(&self, card: Card) -> &str {
        self.names.get(card.0).map(String::as_str).unwrap_or("?")
    }

    /// The card with the given name.
    pub fn lookup(&self, name: &str) -> Result<Card, LookupError> {
        self.names
            .iter()
            .position(|card_name| card_name == name)
            .map(Card)
            .ok_or_else(|| LookupError::UnknownCard(name.to_string()))
    }

    /// Whether some card has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|card_name| card_name == name)
    }
}

#[cfg(test)]
mod card_tests {
    use super::*;

    #[test]
    fn classic_categories() {
        let universe = CardUniverse::classic();
        assert_eq!(universe.count(), 21);
        assert_eq!(universe.cards_in(Category::Suspects).count(), 6);
        assert_eq!(universe.cards_in(Category::Weapons).count(), 6);
        assert_eq!(universe.cards_in(Category::Rooms).count(), 9);

        let knife = universe.lookup("Knife").expect("Knife is a card");
        assert_eq!(universe.category_of(knife), Some(Category::Weapons));
        assert_eq!(universe.name(knife), "Knife");
    }

    #[test]
    fn unknown_card() {
        let universe = CardUniverse::classic();
        assert_eq!(
            universe.lookup("Spoon"),
            Err(LookupError::UnknownCard("Spoon".to_string()))
        );
    }

    #[test]
    fn setup_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(
            CardUniverse::new(["Plum"], empty, ["Hall"]).err(),
            Some(SetupError::EmptyCategory(Category::Weapons))
        );
        assert_eq!(
            CardUniverse::new(["Plum"], ["Rope"], ["Plum"]).err(),
            Some(SetupError::DuplicateName("Plum".to_string()))
        );
    }
}
