/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every solve, with or without assumptions.
    pub total_solves: usize,

    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all literals propagated.
    pub total_propagations: usize,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "solves: {}, decisions: {}, conflicts: {}, propagations: {}",
            self.total_solves, self.total_decisions, self.total_conflicts, self.total_propagations
        )
    }
}
