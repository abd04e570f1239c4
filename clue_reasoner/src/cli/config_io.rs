/// Options for what is displayed, as distinct from options for the reasoner.
#[derive(Clone, Default)]
pub struct ConfigIO {
    pub show_each: bool,
    pub show_clauses: bool,
    pub show_stats: bool,
}
