/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [ensure_atom](crate::context::GenericContext::ensure_atom), to extend the atoms of a context up to some atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

Atoms are named by the integers used for literals, and so [add_clause](crate::context::GenericContext::add_clause) ensures each atom of a clause before storing the clause.

# Example

```rust
# use clue_reasoner::context::Context;
# use clue_reasoner::config::Config;
# use clue_reasoner::builder::ClauseOk;
# use clue_reasoner::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert_eq!(the_context.add_clause([1, -2]), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause([-1, 2]), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause([2, -2]), Ok(ClauseOk::Tautology));

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

use crate::{
    context::{ContextState, GenericContext},
    db::atom::ValuationStatus,
    misc::log::targets::{self},
    procedures::bcp::BCPError,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{ClauseDBError, ErrorKind},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Ensures `atom`, and every atom below `atom`, is part of the context.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        while self.atom_db.count() < atom as usize {
            let previous_value = self.rng.random_bool(self.config.polarity_lean.value);
            let fresh = self.atom_db.fresh_atom(previous_value)?;
            self.watches.ensure(fresh);

            if self.state == ContextState::Consistent {
                self.state = ContextState::Input;
            }
        }
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// Duplicate literals are removed (keeping the first instance), and tautologies are skipped.
    /// Any decision or assumption is cleared, and consequences of a unit clause are propagated immediately.
    ///
    /// An empty clause, or a clause containing `0`, is an error.
    pub fn add_clause(&mut self, clause: impl AsRef<[CLiteral]>) -> Result<ClauseOk, ErrorKind> {
        let mut the_clause = CClause::default();
        for &literal in clause.as_ref() {
            if literal == 0 {
                return Err(ErrorKind::from(ClauseDBError::ZeroLiteral));
            }
            if !the_clause.contains(&literal) {
                the_clause.push(literal);
            }
        }

        if the_clause.is_empty() {
            return Err(ErrorKind::from(ClauseDBError::EmptyClause));
        }

        if the_clause.is_tautology() {
            log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {}", the_clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        for literal in &the_clause {
            self.ensure_atom(literal.atom())?;
        }

        self.clear_decisions();
        if self.state == ContextState::Consistent {
            self.state = ContextState::Input;
        }
        self.atom_db.clear_witness();

        match the_clause.as_slice() {
            [unit] => {
                let key = self.clause_db.store_unit(*unit);
                if self.assign(*unit) == ValuationStatus::Conflict {
                    self.note_inconsistency(key);
                }
            }

            _ => {
                // Literals which are not false at level zero are moved to the front, so the watched literals are as open as possible.
                let (mut open, closed): (CClause, CClause) = the_clause
                    .into_iter()
                    .partition(|literal| self.atom_db.value_of(literal.atom()) != Some(!literal.polarity()));
                let open_count = open.len();
                open.extend(closed);

                let (first, second) = (open[0], open[1]);
                let key = self.clause_db.store(open)?;
                self.watches.watch(first, key);
                self.watches.watch(second, key);

                match open_count {
                    0 => self.note_inconsistency(key),
                    1 => {
                        self.assign(first);
                    }
                    _ => {}
                }
            }
        }

        if let ContextState::Inconsistent(_) = self.state {
            return Ok(ClauseOk::Added);
        }

        if let Err(BCPError::Conflict(key)) = self.propagate() {
            self.note_inconsistency(key);
        }

        Ok(ClauseOk::Added)
    }
}
