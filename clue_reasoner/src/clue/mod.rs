/*!
Deductions for a Clue-style card game.

# Overview

The cards of the game are split into three categories (suspects, weapons, rooms), and each card is at exactly one location: the hand of some player, or the case file.
The case file holds exactly one card of each category, and the aim of the game is to deduce which.

The game is encoded as a formula over propositions of the form 'card *c* is at location *p*':
- The [encoder] pairs each location and card with an atom.
- The [axioms] state the rules of the game, and are added once, when a [reasoner] is built.
- The [facts] state what has been observed during play (hands, suggestions, refutations), and are added as play happens.
- [Queries](query) ask whether the formula entails that some card is (or is not) at some location.

The formula is held by an [oracle](crate::oracle::EntailmentOracle), and the reasoner holds no record of play other than the clauses given to the oracle.

# Example

```rust
# use clue_reasoner::clue::{cards::CardUniverse, reasoner::ClueReasoner, roster::Roster};
# use clue_reasoner::config::Config;
# use clue_reasoner::reports::Entailment;
let roster = Roster::new(["A", "B", "C", "D"]).unwrap();
let mut reasoner = ClueReasoner::from_config(roster, CardUniverse::classic(), Config::default()).unwrap();

reasoner.suggest("A", ["Knife", "Hall", "Plum"], Some("C"), Some("Knife")).unwrap();

assert_eq!(reasoner.query_names("C", "Knife"), Ok(Entailment::True));
assert_eq!(reasoner.query_names("B", "Knife"), Ok(Entailment::False));
assert_eq!(reasoner.query_names("D", "Hall"), Ok(Entailment::Unknown));
```
*/

pub mod axioms;
pub mod cards;
pub mod encoder;
pub mod facts;
pub mod query;
pub mod reasoner;
pub mod roster;
pub mod sample;
