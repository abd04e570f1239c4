/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when following the deductions of a game, or when extending the library.

Note, no log implementation is provided by the library.
The `clue_cli` binary uses [env_logger](https://docs.rs/env_logger/latest/env_logger/), and so logs may be filtered by target, e.g. `RUST_LOG=facts=debug`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [solves](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to the [game axioms](crate::clue::axioms)
    pub const AXIOMS: &str = "axioms";

    /// Logs related to [observed events](crate::clue::facts)
    pub const FACTS: &str = "facts";

    /// Logs related to [queries](crate::clue::query)
    pub const QUERY: &str = "query";
}
