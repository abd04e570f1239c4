//! The players of a game, in seating order, and the case file.

use crate::types::err::{LookupError, SetupError};

/// The name of the case file, unless given otherwise.
pub const CASE_FILE: &str = "cf";

/// Somewhere a card may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// The hand of the player at the given seat.
    Player(usize),

    /// The case file.
    CaseFile,
}

/// The (fixed) players of a game, in seating order.
#[derive(Clone, Debug)]
pub struct Roster {
    players: Vec<String>,
    case_file: String,
}

impl Roster {
    /// A roster from the names of players in seating order, with the case file named [CASE_FILE].
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Result<Self, SetupError> {
        Self::with_case_file(players, CASE_FILE)
    }

    /// A roster from the names of players in seating order, and the name of the case file.
    pub fn with_case_file<S: Into<String>>(
        players: impl IntoIterator<Item = S>,
        case_file: impl Into<String>,
    ) -> Result<Self, SetupError> {
        let case_file = case_file.into();
        let mut names: Vec<String> = Vec::default();

        for name in players.into_iter().map(Into::into) {
            if name == case_file {
                return Err(SetupError::ReservedName(name));
            }
            if names.contains(&name) {
                return Err(SetupError::DuplicateName(name));
            }
            names.push(name);
        }

        match names.is_empty() {
            true => Err(SetupError::EmptyRoster),
            false => Ok(Roster {
                players: names,
                case_file,
            }),
        }
    }

    /// A count of players (excluding the case file).
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// The name of the case file.
    pub fn case_file(&self) -> &str {
        &self.case_file
    }

    /// The name of a location.
    pub fn name(&self, location: Location) -> &str {
        match location {
            Location::Player(seat) => self.players.get(seat).map(String::as_str).unwrap_or("?"),
            Location::CaseFile => &self.case_file,
        }
    }

    /// The location with the given name, where the name of the case file resolves to the case file.
    pub fn lookup(&self, name: &str) -> Result<Location, LookupError> {
        if name == self.case_file {
            return Ok(Location::CaseFile);
        }

        self.players
            .iter()
            .position(|player| player == name)
            .map(Location::Player)
            .ok_or_else(|| LookupError::UnknownPlayer(name.to_string()))
    }

    /// Whether some player, or the case file, has the given name.
    pub fn contains(&self, name: &str) -> bool {
        name == self.case_file || self.players.iter().any(|player| player == name)
    }

    /// The names of every player, in seating order.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    /// Every location, being each player in seating order followed by the case file.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        (0..self.count())
            .map(Location::Player)
            .chain(std::iter::once(Location::CaseFile))
    }

    /// The seats visited after `from`, in order, up to but excluding `to`, wrapping past the last seat to the first.
    ///
    /// If `to` is `None`, every seat other than `from` is visited.
    pub fn seats_between(&self, from: usize, to: Option<usize>) -> Vec<usize> {
        let count = self.count();
        (1..count)
            .map(|offset| (from + offset) % count)
            .take_while(|seat| Some(*seat) != to)
            .collect()
    }
}

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[test]
    fn lookup() {
        let roster = Roster::new(["A", "B", "C"]).expect("valid roster");
        assert_eq!(roster.lookup("B"), Ok(Location::Player(1)));
        assert_eq!(roster.lookup("cf"), Ok(Location::CaseFile));
        assert_eq!(
            roster.lookup("Z"),
            Err(LookupError::UnknownPlayer("Z".to_string()))
        );
    }

    #[test]
    fn seats_wrap() {
        let roster = Roster::new(["A", "B", "C", "D"]).expect("valid roster");
        assert_eq!(roster.seats_between(2, Some(1)), vec![3, 0]);
        assert_eq!(roster.seats_between(0, Some(1)), Vec::<usize>::new());
        assert_eq!(roster.seats_between(1, None), vec![2, 3, 0]);
    }

    #[test]
    fn setup_errors() {
        assert_eq!(
            Roster::new(["A", "cf"]).err(),
            Some(SetupError::ReservedName("cf".to_string()))
        );
        assert_eq!(
            Roster::new(["A", "A"]).err(),
            Some(SetupError::DuplicateName("A".to_string()))
        );
        let nobody: [&str; 0] = [];
        assert_eq!(Roster::new(nobody).err(), Some(SetupError::EmptyRoster));
    }

    #[test]
    fn locations_end_with_case_file() {
        let roster = Roster::new(["A", "B"]).expect("valid roster");
        let locations = roster.locations().collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec![Location::Player(0), Location::Player(1), Location::CaseFile]
        );
    }
}
