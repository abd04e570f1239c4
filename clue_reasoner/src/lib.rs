//! Deductions for a Clue-style card game, by way of satisfiability.
//!
//! The rules of the game and the events observed during play are encoded as clauses, and questions about where cards are become questions of entailment.
//!
//! # Orientation
//!
//! The library is in two parts:
//!
//! - The [clue] module, which encodes a game as clauses and reads deductions back out of an oracle.
//!   A [reasoner](clue::reasoner::ClueReasoner) is the place to start.
//! - A small incremental satisfiability [context], which is the default [oracle].
//!
//! The reasoner only appends clauses to and asks questions of an [oracle::EntailmentOracle], so any engine supporting incremental clause addition and entailment tests may be used in place of a context.
//!
//! The context is built from:
//! - [structures], the abstract elements of a formula (atoms, literals, clauses).
//! - [db], databases for atoms, clauses, watches, and the trail.
//! - [procedures], which together determine satisfiability and entailment.
//! - [config], for the few choices to be made during a solve.
//!
//! # Example
//!
//! ```rust
//! # use clue_reasoner::clue::{cards::CardUniverse, reasoner::ClueReasoner, roster::Roster};
//! # use clue_reasoner::config::Config;
//! # use clue_reasoner::reports::Entailment;
//! let roster = Roster::new(["A", "B", "C", "D"]).unwrap();
//! let mut reasoner = ClueReasoner::from_config(roster, CardUniverse::classic(), Config::default()).unwrap();
//!
//! reasoner.hand("A", &["Knife", "Hall", "Plum"]).unwrap();
//! reasoner.suggest("A", ["Knife", "Library", "Scarlet"], None, None).unwrap();
//!
//! // A holds the knife, and nobody else holds the library or Scarlet.
//! assert_eq!(reasoner.query_names("cf", "Knife"), Ok(Entailment::False));
//! assert_eq!(reasoner.query_names("B", "Library"), Ok(Entailment::False));
//! assert_eq!(reasoner.query_names("cf", "Scarlet"), Ok(Entailment::Unknown));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the clauses for each event can be seen with `RUST_LOG=facts=trace …`.

#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod oracle;
pub mod reports;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;

pub mod clue;
