/*!
(The internal representation of) an atom, aka. a 'variable'.

Each atom is a positive u32.
The atom `0` is never used, as `0` has no polarity when written as an integer literal.

In the card game an atom stands for the proposition that some card is at some location, and atoms are obtained through the [pairing function](crate::clue::encoder::pair_number).
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded so any atom may be negated as an [i32] literal.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
