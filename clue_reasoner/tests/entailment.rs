use clue_reasoner::{config::Config, context::Context, reports::Entailment};

mod entailment {

    use super::*;

    #[test]
    fn by_propagation() {
        let mut ctx = Context::from_config(Config::default());
        let (p, q) = (1, 2);

        assert!(ctx.add_clause([p, q]).is_ok());
        assert!(ctx.add_clause([-p]).is_ok());

        assert_eq!(ctx.test_literal(q), Ok(Entailment::True));
        assert_eq!(ctx.test_literal(-q), Ok(Entailment::False));
        assert_eq!(ctx.test_literal(p), Ok(Entailment::False));
    }

    #[test]
    fn by_cases() {
        let mut ctx = Context::from_config(Config::default());
        let (a, b, c) = (1, 2, 3);

        assert!(ctx.add_clause([a, b]).is_ok());
        assert!(ctx.add_clause([-a, c]).is_ok());
        assert!(ctx.add_clause([-b, c]).is_ok());

        assert_eq!(ctx.test_literal(c), Ok(Entailment::True));
        assert_eq!(ctx.test_literal(a), Ok(Entailment::Unknown));
        assert_eq!(ctx.test_literal(-b), Ok(Entailment::Unknown));
    }

    #[test]
    fn unknown_either_way() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause([1, 2]).is_ok());

        assert_eq!(ctx.test_literal(1), Ok(Entailment::Unknown));
        assert_eq!(ctx.test_literal(-2), Ok(Entailment::Unknown));

        // An atom not in any clause.
        assert_eq!(ctx.test_literal(9), Ok(Entailment::Unknown));
    }

    #[test]
    fn revised_by_clauses() {
        let mut ctx = Context::from_config(Config::default());
        let (p, q) = (1, 2);

        assert!(ctx.add_clause([p, q]).is_ok());
        assert_eq!(ctx.test_literal(p), Ok(Entailment::Unknown));

        assert!(ctx.add_clause([-q, -p]).is_ok());
        assert!(ctx.add_clause([-q]).is_ok());
        assert_eq!(ctx.test_literal(p), Ok(Entailment::True));
    }

    #[test]
    fn contradiction() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause([1, 2]).is_ok());
        assert!(ctx.add_clause([-1]).is_ok());
        assert!(ctx.add_clause([-2]).is_ok());

        assert_eq!(ctx.test_literal(1), Ok(Entailment::Contradiction));
        assert_eq!(ctx.test_literal(-1), Ok(Entailment::Contradiction));
        assert_eq!(ctx.test_literal(3), Ok(Entailment::Contradiction));
    }

    #[test]
    fn contradiction_by_search() {
        let mut ctx = Context::from_config(Config::default());

        for clause in [[1, 2], [-1, 2], [1, -2], [-1, -2]] {
            assert!(ctx.add_clause(clause).is_ok());
        }

        assert_eq!(ctx.test_literal(1), Ok(Entailment::Contradiction));
    }

    #[test]
    fn tests_add_no_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause([1, 2, 3]).is_ok());
        assert!(ctx.add_clause([-1, -2]).is_ok());
        let count = ctx.clause_db.clause_count();

        for literal in [1, -1, 2, -2, 3, -3] {
            assert!(ctx.test_literal(literal).is_ok());
        }

        assert_eq!(ctx.clause_db.clause_count(), count);
        assert_eq!(ctx.trail.level(), 0);
    }

    #[test]
    fn independent_of_config() {
        let (a, b, c, d) = (1, 2, 3, 4);
        let formula = [vec![a, b, c], vec![-a, d], vec![-b, d], vec![-c, d], vec![-d, -a]];

        for seed in 0..8 {
            let mut config = Config::default();
            config.seed.value = seed;
            config.polarity_lean.value = 0.5;
            config.random_decision_bias.value = 0.5;
            config.phase_saving.value = seed % 2 == 0;

            let mut ctx = Context::from_config(config);
            for clause in &formula {
                assert!(ctx.add_clause(clause).is_ok());
            }

            assert_eq!(ctx.test_literal(d), Ok(Entailment::True));
            assert_eq!(ctx.test_literal(a), Ok(Entailment::False));
            assert_eq!(ctx.test_literal(b), Ok(Entailment::Unknown));
        }
    }
}
