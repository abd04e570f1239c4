/*!
The pairing of locations and cards with atoms.

Locations are indexed by seat, with the case file following the last seat, and the atom for card *c* at location *p* is *p* · *card count* + *c* + 1.
So, atoms for the first location are `1..=card count`, atoms for the second location follow, and so on.

The pairing is a bijection between (location, card) pairs and the atoms `1..=(player count + 1) · card count`.
In particular, no atom is `0`.

```rust
# use clue_reasoner::clue::{cards::Card, encoder::VariableEncoder, roster::Location};
let encoder = VariableEncoder::new(4, 21);

assert_eq!(encoder.atom(Location::Player(0), Card(0)), 1);
assert_eq!(encoder.atom(Location::Player(1), Card(0)), 22);
assert_eq!(encoder.atom(Location::CaseFile, Card(20)), 105);

assert_eq!(encoder.decode(22), Some((Location::Player(1), Card(0))));
```
*/

use crate::{
    clue::{cards::Card, roster::Location},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The pairing function on location and card indices.
pub fn pair_number(location_index: usize, card_index: usize, card_count: usize) -> Atom {
    (location_index * card_count + card_index + 1) as Atom
}

/// Pairs locations and cards of a game with atoms.
#[derive(Clone, Copy, Debug)]
pub struct VariableEncoder {
    player_count: usize,
    card_count: usize,
}

impl VariableEncoder {
    pub fn new(player_count: usize, card_count: usize) -> Self {
        VariableEncoder {
            player_count,
            card_count,
        }
    }

    /// The index of a location, with the case file following the last seat.
    pub fn location_index(&self, location: Location) -> usize {
        match location {
            Location::Player(seat) => seat,
            Location::CaseFile => self.player_count,
        }
    }

    /// The atom for `card` being at `location`.
    pub fn atom(&self, location: Location, card: Card) -> Atom {
        pair_number(self.location_index(location), card.0, self.card_count)
    }

    /// The literal for `card` being at `location` (if `polarity` is true) or not being at `location` (otherwise).
    pub fn literal(&self, location: Location, card: Card, polarity: bool) -> CLiteral {
        CLiteral::new(self.atom(location, card), polarity)
    }

    /// The location and card paired with `atom`, if any.
    pub fn decode(&self, atom: Atom) -> Option<(Location, Card)> {
        let index = (atom as usize).checked_sub(1)?;
        if self.card_count == 0 || index >= self.atom_count() {
            return None;
        }

        let location = match index / self.card_count {
            seat if seat < self.player_count => Location::Player(seat),
            _ => Location::CaseFile,
        };
        Some((location, Card(index % self.card_count)))
    }

    /// Every location, being each seat in order followed by the case file.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        (0..self.player_count)
            .map(Location::Player)
            .chain(std::iter::once(Location::CaseFile))
    }

    /// A count of atoms used by the pairing.
    pub fn atom_count(&self) -> usize {
        (self.player_count + 1) * self.card_count
    }
}

#[cfg(test)]
mod encoder_tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn pairing_is_injective() {
        let encoder = VariableEncoder::new(6, 21);
        let mut seen = HashSet::new();

        for location in encoder.locations() {
            for card in (0..21).map(Card) {
                let atom = encoder.atom(location, card);
                assert_ne!(atom, 0);
                assert!(seen.insert(atom), "{atom} paired twice");
                assert_eq!(encoder.decode(atom), Some((location, card)));
            }
        }

        assert_eq!(seen.len(), encoder.atom_count());
    }

    #[test]
    fn decode_out_of_range() {
        let encoder = VariableEncoder::new(3, 4);
        assert_eq!(encoder.decode(0), None);
        assert_eq!(encoder.decode(17), None);
        assert_eq!(encoder.decode(16), Some((Location::CaseFile, Card(3))));
    }
}
