//! Error types used in the library.
//!
//! - Errors from the [context](crate::context) (e.g. a clause database error) indicate misuse of the context, and are not expected when the context is driven by a [reasoner](crate::clue::reasoner).
//! - Errors from the [reasoner](crate::clue::reasoner) are external, e.g. an unrecognised player name, and may be recovered from by the caller without harm to the reasoning session.
//!   In particular, an event is validated in full before any clause is added, so a rejected event leaves the clause set untouched.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::clue::cards::Category;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Event(EventError),
    Lookup(LookupError),
    Setup(SetupError),

    /// A request which is not valid given the state of the context.
    InvalidState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause contained `0`, which is not a literal.
    ZeroLiteral,

    /// A clause key did not point to a stored clause.
    InvalidKeyIndex,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// A name which does not resolve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LookupError {
    /// No player (or case file) has the name.
    UnknownPlayer(String),

    /// No card has the name.
    UnknownCard(String),
}

impl From<LookupError> for ErrorKind {
    fn from(e: LookupError) -> Self {
        ErrorKind::Lookup(e)
    }
}

/// An event which names valid players and cards, but which could not have happened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventError {
    /// The case file was given where a player was required.
    CaseFileAsPlayer,

    /// A player refuted their own suggestion.
    RefuterIsSuggester,

    /// A card was shown, though no player refuted.
    ShownWithoutRefuter,

    /// The shown card was not one of the suggested cards.
    ShownCardNotSuggested(String),
}

impl From<EventError> for ErrorKind {
    fn from(e: EventError) -> Self {
        ErrorKind::Event(e)
    }
}

/// Issues with the roster of players or the universe of cards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SetupError {
    /// No players.
    EmptyRoster,

    /// A category without any cards.
    EmptyCategory(Category),

    /// A name is used for two different things.
    DuplicateName(String),

    /// A player has the name of the case file.
    ReservedName(String),
}

impl From<SetupError> for ErrorKind {
    fn from(e: SetupError) -> Self {
        ErrorKind::Setup(e)
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlayer(name) => write!(f, "Illegal player: {name}"),
            Self::UnknownCard(name) => write!(f, "Illegal card: {name}"),
        }
    }
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CaseFileAsPlayer => write!(f, "The case file is not a player"),
            Self::RefuterIsSuggester => write!(f, "A player cannot refute their own suggestion"),
            Self::ShownWithoutRefuter => write!(f, "A card was shown, but nobody refuted"),
            Self::ShownCardNotSuggested(card) => write!(f, "{card} was shown but not suggested"),
        }
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "At least one player is required"),
            Self::EmptyCategory(category) => write!(f, "No {category} were given"),
            Self::DuplicateName(name) => write!(f, "The name {name} is used more than once"),
            Self::ReservedName(name) => write!(f, "{name} is reserved for the case file"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "Atom database: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database: {e:?}"),
            Self::Event(e) => write!(f, "{e}"),
            Self::Lookup(e) => write!(f, "{e}"),
            Self::Setup(e) => write!(f, "{e}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
