/*!
The seam between the [reasoner](crate::clue::reasoner) and a satisfiability engine.

The reasoner appends clauses and asks about literals, and nothing more.
So, any engine which supports incremental addition of clauses and tests of entailment may be used.

A [context](crate::context::GenericContext) is the engine used by default.
*/

use crate::{
    builder::ClauseOk,
    context::GenericContext,
    reports::Entailment,
    structures::literal::CLiteral,
    types::err::ErrorKind,
};

/// An incremental store of clauses, which answers questions of entailment.
pub trait EntailmentOracle {
    /// Appends a (disjunctive) clause to the persistent clause set.
    fn add_clause(&mut self, clause: &[CLiteral]) -> Result<ClauseOk, ErrorKind>;

    /// Reports the entailment of `literal` by the current clause set, without revising the clause set.
    fn test_literal(&mut self, literal: CLiteral) -> Result<Entailment, ErrorKind>;
}

impl<R: rand::Rng> EntailmentOracle for GenericContext<R> {
    fn add_clause(&mut self, clause: &[CLiteral]) -> Result<ClauseOk, ErrorKind> {
        GenericContext::add_clause(self, clause)
    }

    fn test_literal(&mut self, literal: CLiteral) -> Result<Entailment, ErrorKind> {
        GenericContext::test_literal(self, literal)
    }
}
