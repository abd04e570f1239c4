/*!
The context, to which clauses are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, while a context fixes the source of randomness to [SmallRng].

# Example
```rust
# use clue_reasoner::context::Context;
# use clue_reasoner::config::Config;
# use clue_reasoner::reports::{Entailment, Report};
let mut the_context = Context::from_config(Config::default());

let (p, q) = (1, 2);

assert!(the_context.add_clause([p, q]).is_ok());
assert!(the_context.add_clause([-p]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.test_literal(q), Ok(Entailment::True));
```
*/

mod counters;
pub use counters::Counters;

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, ClauseKey},
    reports::Report,
    structures::atom::Atom,
    types::err::ErrorKind,
};

/// The state of a context, with respect to the consistency of the formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The consistency of the formula is unknown, e.g. as some clause has been added since the last solve.
    Input,

    /// The formula is known to be consistent, and the [witness](AtomDB::witness_value_of) is a model of the formula.
    Consistent,

    /// The formula is known to be inconsistent, with the given clause conflicting with the consequences of the formula.
    Inconsistent(ClauseKey),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Consistent => write!(f, "Consistent"),
            Self::Inconsistent(_) => write!(f, "Inconsistent"),
        }
    }
}

/// A generic context, parameratised to a source of randomness.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists for each atom.
    pub watches: Watches,

    /// The trail of assignments.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

/// A context which uses [SmallRng] as a source of randomness.
pub type Context = GenericContext<SmallRng>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed.value),
            config,

            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            trail: Trail::default(),

            state: ContextState::Input,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// A report on the consistency of the formula of the context, as known from the most recent solve.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input => Report::Unknown,
            ContextState::Consistent => Report::Satisfiable,
            ContextState::Inconsistent(_) => Report::Unsatisfiable,
        }
    }

    /// The clause with which inconsistency of the context was determined.
    pub fn unsatisfiable_clause(&self) -> Result<ClauseKey, ErrorKind> {
        match self.state {
            ContextState::Inconsistent(key) => Ok(key),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The value of an atom on the current valuation.
    ///
    /// After a satisfiable solve, and until the next clause is added or solve is made, the current valuation is a model.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }
}
