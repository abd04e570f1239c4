use clue_reasoner::{
    clue::{cards::Category, roster::Location, sample},
    config::Config,
    context::Context,
    reports::Entailment,
};

mod sample_game {

    use super::*;

    fn holder(card: &str) -> &'static str {
        sample::DEAL
            .iter()
            .find(|(_, cards)| cards.contains(&card))
            .map(|(location, _)| *location)
            .expect("dealt card")
    }

    #[test]
    fn deal_is_complete() {
        let reasoner = sample::reasoner(Context::default()).expect("valid setup");
        let universe = reasoner.universe();

        let dealt = sample::DEAL.iter().map(|(_, cards)| cards.len()).sum::<usize>();
        assert_eq!(dealt, universe.count());

        for card in universe.cards() {
            assert!(sample::DEAL
                .iter()
                .any(|(_, cards)| cards.contains(&universe.name(card))));
        }
    }

    #[test]
    fn deductions_are_sound() {
        let mut reasoner = sample::reasoner(Context::from_config(Config::default())).expect("valid setup");

        for event in sample::EVENTS {
            assert!(event.apply(&mut reasoner).is_ok(), "{event}");

            let notepad = reasoner.notepad().expect("notepad");
            for (card, entailments) in &notepad.rows {
                for (location, entailment) in notepad.locations.iter().zip(entailments) {
                    let held = holder(card) == location;
                    match entailment {
                        Entailment::True => assert!(held, "{location} does not hold {card}"),
                        Entailment::False => assert!(!held, "{location} holds {card}"),
                        Entailment::Unknown => {}
                        Entailment::Contradiction => panic!("Contradiction after {event}"),
                    }
                }
            }
        }
    }

    #[test]
    fn expected_deductions() {
        let mut reasoner = sample::reasoner(Context::default()).expect("valid setup");
        for event in sample::EVENTS {
            assert!(event.apply(&mut reasoner).is_ok());
        }

        // Shown to A.
        assert_eq!(reasoner.query_names("B", "Lounge"), Ok(Entailment::True));
        assert_eq!(reasoner.query_names("C", "Dining"), Ok(Entailment::True));

        // C refuted B with one of Green, Knife, Library, where A holds the knife and C passed on the library.
        assert_eq!(reasoner.query_names("C", "Green"), Ok(Entailment::True));

        // Nobody refuted B.
        assert_eq!(reasoner.query_names("D", "Rope"), Ok(Entailment::False));
        assert_eq!(reasoner.query_names("cf", "Rope"), Ok(Entailment::Unknown));

        for category in Category::ALL {
            let candidates = reasoner.case_file_candidates(category).expect("candidates");
            let solution = candidates
                .iter()
                .filter(|card| holder(reasoner.universe().name(**card)) == "cf")
                .count();
            assert_eq!(solution, 1, "{category}");

            for card in candidates {
                assert_ne!(reasoner.query(Location::CaseFile, card), Ok(Entailment::False));
            }
        }
    }
}
