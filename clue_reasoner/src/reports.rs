//! Details on the result of some procedure.

/// High-level reports regarding a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, e.g. as no solve has been made.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The status of a literal with respect to the formula of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entailment {
    /// The formula entails the literal.
    True,

    /// The formula entails the negation of the literal.
    False,

    /// The formula is satisfiable with the literal true, and with the literal false.
    Unknown,

    /// The formula is unsatisfiable, and so entails both the literal and its negation.
    Contradiction,
}

impl Entailment {
    /// The entailment of a literal whose value is settled, where `holds` is the value of the literal.
    pub fn settled(holds: bool) -> Self {
        match holds {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl std::fmt::Display for Entailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Contradiction => write!(f, "Contradiction"),
        }
    }
}
