/*!
The rules of the game, as clauses.

Four families of clauses, which together state each card is at exactly one location and the case file holds exactly one card of each category:

- [existence], each card is at some location.
- [uniqueness], no card is at two locations.
- [case_file_existence], the case file holds some card of each category.
- [case_file_uniqueness], the case file holds no two cards of the same category.

'Exactly one' is encoded as a single 'at least one' clause together with a binary 'not both' clause for each pair of alternatives.
So, for *n* alternatives there are 1 + *n*(*n* - 1)/2 clauses.

The functions here only build clauses.
The clauses are added to an oracle once, when a [reasoner](crate::clue::reasoner::ClueReasoner) is built.
*/

use crate::{
    clue::{
        cards::{Card, CardUniverse, Category},
        encoder::VariableEncoder,
        roster::Location,
    },
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
};

/// An 'at least one' clause and pairwise 'not both' clauses over the given literals.
fn exactly_one(literals: &[CLiteral]) -> (CClause, Vec<CClause>) {
    let mut pairs = Vec::default();
    for (index, first) in literals.iter().enumerate() {
        for second in &literals[index + 1..] {
            pairs.push(vec![-first, -second]);
        }
    }
    (literals.to_vec(), pairs)
}

fn at_each_location(encoder: &VariableEncoder, card: Card) -> Vec<CLiteral> {
    encoder
        .locations()
        .map(|location| encoder.literal(location, card, true))
        .collect()
}

fn in_case_file(encoder: &VariableEncoder, universe: &CardUniverse, category: Category) -> Vec<CLiteral> {
    universe
        .cards_in(category)
        .map(|card| encoder.literal(Location::CaseFile, card, true))
        .collect()
}

/// For each card, a clause stating the card is at some location.
pub fn existence(encoder: &VariableEncoder, universe: &CardUniverse) -> Vec<CClause> {
    universe.cards().map(|card| at_each_location(encoder, card)).collect()
}

/// For each card, and each pair of distinct locations, a clause stating the card is not at both locations.
pub fn uniqueness(encoder: &VariableEncoder, universe: &CardUniverse) -> Vec<CClause> {
    universe
        .cards()
        .flat_map(|card| exactly_one(&at_each_location(encoder, card)).1)
        .collect()
}

/// For each category, a clause stating the case file holds some card of the category.
pub fn case_file_existence(encoder: &VariableEncoder, universe: &CardUniverse) -> Vec<CClause> {
    Category::ALL
        .iter()
        .map(|category| in_case_file(encoder, universe, *category))
        .collect()
}

/// For each category, and each pair of distinct cards of the category, a clause stating the case file does not hold both cards.
pub fn case_file_uniqueness(encoder: &VariableEncoder, universe: &CardUniverse) -> Vec<CClause> {
    Category::ALL
        .iter()
        .flat_map(|category| exactly_one(&in_case_file(encoder, universe, *category)).1)
        .collect()
}

/// Every axiom of the game, in the order: existence, uniqueness, case file existence, case file uniqueness.
pub fn base_axioms(encoder: &VariableEncoder, universe: &CardUniverse) -> Vec<CClause> {
    let mut axioms = existence(encoder, universe);
    log::debug!(target: targets::AXIOMS, "Existence: {} clauses", axioms.len());

    let unique = uniqueness(encoder, universe);
    log::debug!(target: targets::AXIOMS, "Uniqueness: {} clauses", unique.len());
    axioms.extend(unique);

    let case_file = case_file_existence(encoder, universe);
    log::debug!(target: targets::AXIOMS, "Case file existence: {} clauses", case_file.len());
    axioms.extend(case_file);

    let case_file_unique = case_file_uniqueness(encoder, universe);
    log::debug!(target: targets::AXIOMS, "Case file uniqueness: {} clauses", case_file_unique.len());
    axioms.extend(case_file_unique);

    axioms
}

#[cfg(test)]
mod axiom_tests {
    use super::*;

    fn classic_four() -> (VariableEncoder, CardUniverse) {
        let universe = CardUniverse::classic();
        (VariableEncoder::new(4, universe.count()), universe)
    }

    #[test]
    fn existence_counts() {
        let (encoder, universe) = classic_four();
        let clauses = existence(&encoder, &universe);

        assert_eq!(clauses.len(), 21);
        assert!(clauses.iter().all(|clause| clause.len() == 5));
        assert_eq!(clauses[0], vec![1, 22, 43, 64, 85]);
    }

    #[test]
    fn uniqueness_counts() {
        let (encoder, universe) = classic_four();
        let clauses = uniqueness(&encoder, &universe);

        // five locations give ten pairs per card
        assert_eq!(clauses.len(), 21 * 10);
        assert!(clauses.iter().all(|clause| clause.len() == 2));
        assert!(clauses.iter().flatten().all(|literal| *literal < 0));
    }

    #[test]
    fn case_file_counts() {
        let (encoder, universe) = classic_four();

        let some = case_file_existence(&encoder, &universe);
        assert_eq!(
            some.iter().map(|clause| clause.len()).collect::<Vec<_>>(),
            vec![6, 6, 9]
        );
        assert!(some.iter().flatten().all(|literal| *literal > 84));

        let unique = case_file_uniqueness(&encoder, &universe);
        assert_eq!(unique.len(), 15 + 15 + 36);
    }

    #[test]
    fn base_is_every_family() {
        let (encoder, universe) = classic_four();
        assert_eq!(base_axioms(&encoder, &universe).len(), 21 + 210 + 3 + 66);
    }
}
