/*!
Clauses, aka. disjunctions of literals.

The canonical representation of a clause is a vector of [CLiteral]s.
The order of literals is irrelevant to the meaning of a clause, though it is kept so output is deterministic.

```rust
# use clue_reasoner::structures::clause::{CClause, Clause};
let clause: CClause = vec![1, -2, 3];
assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
assert_eq!(clause.size(), 3);
```
*/

use crate::structures::literal::{CLiteral, Literal};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// Something which behaves as a disjunction of literals.
pub trait Clause {
    /// A string of the clause in DIMACS form, terminated with `0` if `zero` is true.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The literals of the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool {
        self.literals()
            .any(|literal| self.literals().any(|other| *other == literal.negate()))
    }
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }
}
