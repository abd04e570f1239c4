//! Determines the satisfiability of the formula in a context, perhaps relative to some assumptions.
//!
//! # Overview
//!
//! The procedure is a DPLL search over the trail:
//!
//! - Consequences of all assignments are propagated.
//! - If propagation finds a conflict, the most recent decision which has not been flipped is flipped.
//!   If there is no such decision, the formula (together with any assumptions) is unsatisfiable.
//! - Otherwise, if every atom has a value the valuation is a model, and if not a decision is made.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |
//!   |       +---------------+
//!   |               ⌃
//!   |               | if there is no conflict, and the valuation is partial
//!   |               |
//!   ⌄   +-----------+-----+
//! --+-->|    propagate    |-----> satisfiable, if the valuation is complete
//!   ⌃   +-----------+-----+
//!   |               |
//!   |               | if there is a conflict and an open decision, otherwise unsatisfiable
//!   |               ⌄
//!   |           +-------------------+
//!   +-----------| flip the decision |
//!               +-------------------+
//! ```
//!
//! No clause is learnt, and so the formula of a context is the same before and after a solve.
//!
//! # Assumptions
//!
//! Assumptions are asserted together on a single level, above level zero and below any decision.
//! As the assumption level is never flipped, a conflict without any open decision shows the formula and the assumptions are jointly unsatisfiable.
//! And, if no assumptions were made, that the formula itself is unsatisfiable.
//!
//! Any model found (with or without assumptions) is a model of the formula, and is stored as the witness of the consistency of the formula.

use crate::{
    context::{ContextState, GenericContext},
    db::{atom::ValuationStatus, trail::LevelKind, ClauseKey},
    misc::log::targets::{self},
    procedures::{bcp::BCPError, decision::DecisionOk},
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default())
    }

    /// Determines the satisfiability of the formula of the context together with the given assumptions.
    ///
    /// On a satisfiable result the current valuation is a model, until the next solve or clause addition.
    pub fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        self.counters.total_solves += 1;
        self.backjump(0);

        if let ContextState::Inconsistent(_) = self.state {
            return Ok(Report::Unsatisfiable);
        }

        if let Err(BCPError::Conflict(key)) = self.propagate() {
            self.note_inconsistency(key);
            return Ok(Report::Unsatisfiable);
        }

        if !assumptions.is_empty() {
            for assumption in &assumptions {
                self.ensure_atom(assumption.atom())?;
            }

            self.trail.push_level(LevelKind::Assumptions);
            for assumption in assumptions {
                if self.assign(assumption) == ValuationStatus::Conflict {
                    log::trace!(target: targets::SOLVE, "Assumption {assumption} conflicts with the formula");
                    self.backjump(0);
                    return Ok(Report::Unsatisfiable);
                }
            }
        }
        let assumptions_made = self.trail.level() > 0;

        'solve_loop: loop {
            match self.propagate() {
                Err(BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;

                    match self.trail.highest_open_decision() {
                        Some((level, decision)) => {
                            self.backjump(level - 1);

                            let flip = decision.negate();
                            self.trail.push_level(LevelKind::Decision {
                                literal: flip,
                                flipped: true,
                            });
                            self.assign(flip);
                            continue 'solve_loop;
                        }

                        None => {
                            match assumptions_made {
                                true => {
                                    log::trace!(target: targets::SOLVE, "Assumptions are inconsistent with the formula");
                                }
                                false => self.note_inconsistency(key),
                            }
                            self.backjump(0);
                            return Ok(Report::Unsatisfiable);
                        }
                    }
                }

                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.trail.push_level(LevelKind::Decision {
                            literal: decision,
                            flipped: false,
                        });
                        self.assign(decision);
                    }

                    DecisionOk::Exhausted => break 'solve_loop,
                },
            }
        }

        self.atom_db.store_witness();
        self.state = ContextState::Consistent;
        log::trace!(target: targets::SOLVE, "Model: {}", self.atom_db.valuation_string());

        Ok(Report::Satisfiable)
    }

    /// Notes the formula is inconsistent, as witnessed by the clause of `key`.
    pub(crate) fn note_inconsistency(&mut self, key: ClauseKey) {
        log::debug!(target: targets::SOLVE, "Formula is inconsistent, on {key}");
        self.atom_db.clear_witness();
        self.state = ContextState::Inconsistent(key);
    }
}
