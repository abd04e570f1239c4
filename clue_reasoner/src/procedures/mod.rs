/*!
Procedures, for determining the satisfiability of the formula in a context, and for determining entailment.

- [bcp] propagates the consequences of an assignment.
- [decision] chooses a value for some atom without a value.
- [backjump] undoes assignments.
- [solve] determines satisfiability, perhaps relative to some assumptions.
- [entailment] determines whether a literal (or its negation) is a consequence of the formula.

Each procedure is implemented as a method on a [context](crate::context::GenericContext).
*/

pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod entailment;
pub mod solve;
