/*!
Determines whether a literal, or the negation of the literal, is entailed by the formula of a context.

# Overview

A literal is entailed by a formula if the literal is true on every model of the formula.

1. If the consistency of the formula is unknown, a solve is made.
   An inconsistent formula entails everything, and this is reported as a [contradiction](Entailment::Contradiction).
2. If the atom of the literal is valued at level zero, the value is a consequence of the formula alone.
3. Otherwise, the witness of consistency (a model of the formula) values the literal one way.
   So, the formula is satisfiable with that value, and the formula entails the value iff the formula is unsatisfiable when assuming the opposite value.

As a consequence, at most two solves are made per test, and only one if the consistency of the formula is known.

No clause is added or removed by a test.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    reports::{Entailment, Report},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// For documentation see [procedures::entailment](crate::procedures::entailment).
    pub fn test_literal(&mut self, literal: CLiteral) -> Result<Entailment, ErrorKind> {
        self.ensure_atom(literal.atom())?;

        if self.state == ContextState::Input {
            self.solve()?;
        }

        if let ContextState::Inconsistent(_) = self.state {
            return Ok(Entailment::Contradiction);
        }

        self.clear_decisions();
        if let Some(value) = self.atom_db.value_of(literal.atom()) {
            log::trace!(target: targets::SOLVE, "{literal} is settled at level zero");
            return Ok(Entailment::settled(value == literal.polarity()));
        }

        let witnessed = match self.atom_db.witness_value_of(literal.atom()) {
            Some(value) => value == literal.polarity(),
            None => {
                log::error!(target: targets::SOLVE, "No witness for {literal} on a consistent formula");
                return Err(ErrorKind::InvalidState);
            }
        };

        let challenge = match witnessed {
            true => literal.negate(),
            false => literal,
        };

        let entailment = match self.solve_given(vec![challenge])? {
            Report::Unsatisfiable => Entailment::settled(witnessed),
            Report::Satisfiable => Entailment::Unknown,
            Report::Unknown => Entailment::Unknown,
        };

        self.clear_decisions();
        Ok(entailment)
    }
}
