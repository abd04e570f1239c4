use clue_reasoner::{
    builder::ClauseOk,
    clue::{
        cards::{CardUniverse, Category},
        reasoner::ClueReasoner,
        roster::Roster,
    },
    config::Config,
    context::Context,
    oracle::EntailmentOracle,
    reports::Entailment,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{ErrorKind, EventError, LookupError},
};

/// Passes clauses to a context, keeping a copy of each.
#[derive(Default)]
struct RecordingOracle {
    clauses: Vec<CClause>,
    context: Context,
}

impl EntailmentOracle for RecordingOracle {
    fn add_clause(&mut self, clause: &[CLiteral]) -> Result<ClauseOk, ErrorKind> {
        self.clauses.push(clause.to_vec());
        self.context.add_clause(clause)
    }

    fn test_literal(&mut self, literal: CLiteral) -> Result<Entailment, ErrorKind> {
        self.context.test_literal(literal)
    }
}

fn four_players() -> ClueReasoner<RecordingOracle> {
    let roster = Roster::new(["A", "B", "C", "D"]).expect("valid roster");
    ClueReasoner::new(roster, CardUniverse::classic(), RecordingOracle::default()).expect("valid setup")
}

fn classic(players: &[&str]) -> ClueReasoner {
    let roster = Roster::new(players.iter().copied()).expect("valid roster");
    ClueReasoner::from_config(roster, CardUniverse::classic(), Config::default()).expect("valid setup")
}

mod setup {

    use super::*;

    #[test]
    fn axioms_added_once() {
        let reasoner = four_players();
        assert_eq!(reasoner.oracle().clauses.len(), 21 + 210 + 3 + 66);
    }
}

mod suggestions {

    use super::*;

    #[test]
    fn nobody_refutes() {
        let mut reasoner = four_players();
        let before = reasoner.oracle().clauses.len();

        let added = reasoner
            .suggest("A", ["Knife", "Hall", "Plum"], None, None)
            .expect("valid suggestion");

        assert_eq!(added.len(), 9);
        assert_eq!(reasoner.oracle().clauses[before..], added[..]);

        let encoder = *reasoner.encoder();
        let mut expected = Vec::default();
        for player in ["B", "C", "D"] {
            for card in ["Knife", "Hall", "Plum"] {
                let location = reasoner.player(player).expect("player");
                let card = reasoner.card(card).expect("card");
                expected.push(vec![encoder.literal(location, card, false)]);
            }
        }
        assert_eq!(added, expected);

        assert_eq!(reasoner.query_names("B", "Knife"), Ok(Entailment::False));
    }

    #[test]
    fn refuter_shows_card() {
        let mut reasoner = four_players();
        let encoder = *reasoner.encoder();

        let added = reasoner
            .suggest("A", ["Knife", "Hall", "Plum"], Some("C"), Some("Knife"))
            .expect("valid suggestion");

        let b = reasoner.player("B").expect("player");
        let c = reasoner.player("C").expect("player");
        let card = |name| reasoner.card(name).expect("card");

        assert_eq!(
            added,
            vec![
                vec![encoder.literal(b, card("Knife"), false)],
                vec![encoder.literal(b, card("Hall"), false)],
                vec![encoder.literal(b, card("Plum"), false)],
                vec![encoder.literal(c, card("Knife"), true)],
            ]
        );

        assert_eq!(reasoner.query_names("C", "Knife"), Ok(Entailment::True));
        assert_eq!(reasoner.query_names("D", "Knife"), Ok(Entailment::False));
        assert_eq!(reasoner.query_names("D", "Hall"), Ok(Entailment::Unknown));
        assert_eq!(reasoner.query_names("cf", "Knife"), Ok(Entailment::False));
    }

    #[test]
    fn refuter_hides_card() {
        let mut reasoner = four_players();

        let added = reasoner
            .suggest("B", ["Rope", "Study", "Green"], Some("A"), None)
            .expect("valid suggestion");

        // C and D are passed over, wrapping to A.
        assert_eq!(added.len(), 7);
        assert_eq!(added[6].len(), 3);

        assert_eq!(reasoner.query_names("C", "Rope"), Ok(Entailment::False));
        assert_eq!(reasoner.query_names("A", "Rope"), Ok(Entailment::Unknown));

        // Once two of the cards are elsewhere, A must hold the third.
        reasoner.hand("B", &["Rope", "Study"]).expect("valid hand");
        assert_eq!(reasoner.query_names("A", "Green"), Ok(Entailment::True));
    }

    #[test]
    fn invalid_events_add_nothing() {
        let mut reasoner = four_players();
        let before = reasoner.oracle().clauses.len();

        assert_eq!(
            reasoner.suggest("Z", ["Knife", "Hall", "Plum"], None, None),
            Err(ErrorKind::Lookup(LookupError::UnknownPlayer("Z".to_string())))
        );
        assert_eq!(
            reasoner.suggest("A", ["Knife", "Hall", "Spoon"], Some("B"), None),
            Err(ErrorKind::Lookup(LookupError::UnknownCard("Spoon".to_string())))
        );
        assert_eq!(
            reasoner.suggest("A", ["Knife", "Hall", "Plum"], Some("Q"), None),
            Err(ErrorKind::Lookup(LookupError::UnknownPlayer("Q".to_string())))
        );
        assert_eq!(
            reasoner.suggest("A", ["Knife", "Hall", "Plum"], Some("A"), None),
            Err(ErrorKind::Event(EventError::RefuterIsSuggester))
        );
        assert_eq!(
            reasoner.suggest("A", ["Knife", "Hall", "Plum"], None, Some("Knife")),
            Err(ErrorKind::Event(EventError::ShownWithoutRefuter))
        );
        assert_eq!(
            reasoner.suggest("A", ["Knife", "Hall", "Plum"], Some("B"), Some("Rope")),
            Err(ErrorKind::Event(EventError::ShownCardNotSuggested("Rope".to_string())))
        );
        assert_eq!(
            reasoner.suggest("cf", ["Knife", "Hall", "Plum"], None, None),
            Err(ErrorKind::Event(EventError::CaseFileAsPlayer))
        );
        assert_eq!(
            reasoner.hand("A", &["Knife", "Spoon"]),
            Err(ErrorKind::Lookup(LookupError::UnknownCard("Spoon".to_string())))
        );
        assert_eq!(
            reasoner.query_names("A", "Spoon"),
            Err(ErrorKind::Lookup(LookupError::UnknownCard("Spoon".to_string())))
        );

        assert_eq!(reasoner.oracle().clauses.len(), before);
    }
}

mod hands {

    use super::*;

    #[test]
    fn exactly_one_location() {
        let mut reasoner = classic(&["A", "B", "C"]);
        reasoner.hand("B", &["Revolver"]).expect("valid hand");

        assert_eq!(reasoner.query_names("B", "Revolver"), Ok(Entailment::True));
        for location in ["A", "C", "cf"] {
            assert_eq!(reasoner.query_names(location, "Revolver"), Ok(Entailment::False));
        }
    }

    #[test]
    fn idempotent() {
        let mut once = classic(&["A", "B", "C"]);
        let mut twice = classic(&["A", "B", "C"]);

        once.hand("A", &["Mustard", "Rope", "Hall"]).expect("valid hand");
        twice.hand("A", &["Mustard", "Rope", "Hall"]).expect("valid hand");
        twice.hand("A", &["Mustard", "Rope", "Hall"]).expect("valid hand");

        assert_eq!(once.notepad(), twice.notepad());
    }

    #[test]
    fn case_file_by_elimination() {
        let mut reasoner = classic(&["A", "B", "C"]);
        reasoner
            .hand("A", &["Mustard", "Plum", "Green", "Peacock", "Scarlet"])
            .expect("valid hand");

        let suspects = reasoner.case_file_candidates(Category::Suspects).expect("candidates");
        assert_eq!(suspects, vec![reasoner.card("White").expect("card")]);
        assert_eq!(reasoner.query_names("cf", "White"), Ok(Entailment::True));
        assert_eq!(reasoner.query_names("B", "White"), Ok(Entailment::False));

        let weapons = reasoner.case_file_candidates(Category::Weapons).expect("candidates");
        assert_eq!(weapons.len(), 6);
    }

    #[test]
    fn contradiction() {
        let mut reasoner = classic(&["A", "B", "C"]);
        reasoner.hand("A", &["Knife"]).expect("valid hand");
        reasoner.hand("B", &["Knife"]).expect("valid hand");

        assert_eq!(reasoner.query_names("A", "Knife"), Ok(Entailment::Contradiction));
        assert_eq!(reasoner.query_names("B", "Knife"), Ok(Entailment::Contradiction));

        let notepad = reasoner.notepad().expect("notepad");
        assert!(notepad.to_string().contains("Knife\tX\tX\tX\tX"));
    }
}

mod notepad {

    use super::*;

    #[test]
    fn layout() {
        let mut reasoner = classic(&["A", "B"]);
        reasoner.hand("A", &["Mustard"]).expect("valid hand");

        let notepad = reasoner.notepad().expect("notepad").to_string();
        let mut lines = notepad.lines();

        assert_eq!(lines.next(), Some("\tA\tB\tcf"));
        assert_eq!(lines.next(), Some("Mustard\tY\tn\tn"));
        assert_eq!(lines.next(), Some("Plum\t-\t-\t-"));
        assert_eq!(notepad.lines().count(), 22);
    }
}
