use std::{cell::RefCell, rc::Rc};

use otter_sls::{
    config::{Algorithm, Config},
    context::{Context, GenericContext},
    generic::random::MinimalPCG32,
    procedures::walksat::Noise,
    reports::{Report, Step, StepKind},
    structures::valuation::CValuation,
};

fn context_from(config: Config, formula: &str) -> Context {
    let mut the_context = Context::from_config(config);
    assert!(the_context.read_lines(formula.as_bytes()).is_ok());
    the_context
}

fn config_with(algorithm: Algorithm, seed: u64) -> Config {
    let mut config = Config::default();
    config.algorithm.value = algorithm;
    config.seed.value = seed;
    config
}

const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::GSAT,
    Algorithm::WalkSAT,
    Algorithm::AgingWalkSAT,
    Algorithm::ResetWalkSAT,
];

mod scenarios {
    use super::*;

    #[test]
    fn exclusive_or() {
        for algorithm in ALGORITHMS {
            for seed in 0..16 {
                let mut the_context =
                    context_from(config_with(algorithm, seed), "a b\n-a -b\n");
                assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

                let evaluation = the_context.evaluate(false).unwrap();
                assert_eq!(evaluation.satisfied, 2);
                assert_ne!(the_context.value_of("a"), the_context.value_of("b"));
            }
        }
    }

    #[test]
    fn contradiction_walksat() {
        let mut config = config_with(Algorithm::WalkSAT, 3);
        config.max_flips.value = 250;
        let mut the_context = context_from(config, "a\n-a\n");

        assert_eq!(the_context.solve(), Ok(Report::SearchExhausted));
        assert_eq!(the_context.counters.flips, 250);
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn contradiction_aging_walksat() {
        let mut config = config_with(Algorithm::AgingWalkSAT, 3);
        config.max_flips.value = 100;
        let mut the_context = context_from(config, "a\n-a\n");

        assert_eq!(the_context.solve(), Ok(Report::SearchExhausted));
        assert_eq!(the_context.counters.flips, 100);
    }

    #[test]
    fn contradiction_restarts() {
        let mut config = config_with(Algorithm::ResetWalkSAT, 3);
        config.max_flips.value = 20;
        config.restarts.value = 4;
        let mut the_context = context_from(config, "a\n-a\n");

        let restarts = Rc::new(RefCell::new(Vec::default()));
        let restarts_clone = restarts.clone();
        the_context.set_callback_step(Box::new(move |step: &Step| {
            restarts_clone.borrow_mut().push(step.restart)
        }));

        assert_eq!(the_context.solve(), Ok(Report::RestartsExhausted));
        assert_eq!(the_context.counters.total_flips, 80);
        assert_eq!(the_context.counters.restarts, 3);

        let restarts = restarts.borrow();
        for restart in 0..4 {
            assert_eq!(restarts.iter().filter(|r| **r == restart).count(), 20);
        }
    }

    #[test]
    fn contradiction_gsat_bounded() {
        let mut config = config_with(Algorithm::GSAT, 3);
        config.gsat_flip_limit.value = 64;
        let mut the_context = context_from(config, "a\n-a\n");

        assert_eq!(the_context.solve(), Ok(Report::SearchExhausted));
        assert_eq!(the_context.counters.flips, 64);
    }

    #[test]
    fn single_clause_gsat() {
        for seed in 0..64 {
            let mut the_context = context_from(config_with(Algorithm::GSAT, seed), "a b c\n");
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
            assert!(the_context.counters.flips <= 1);
        }
    }
}

mod determinism {
    use super::*;

    fn flips_and_valuation(algorithm: Algorithm, seed: u64) -> (Vec<Step>, CValuation) {
        let formula = "
a b -c
-a c d
-b -d
c -e
e f a
-f -a
b e
";
        let mut the_context = context_from(config_with(algorithm, seed), formula);

        let steps = Rc::new(RefCell::new(Vec::default()));
        let steps_clone = steps.clone();
        the_context.set_callback_step(Box::new(move |step: &Step| {
            steps_clone.borrow_mut().push(*step)
        }));

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        let steps = steps.borrow().clone();
        (steps, the_context.valuation.clone())
    }

    #[test]
    fn same_seed_same_search() {
        for algorithm in ALGORITHMS {
            for seed in [0, 1, 2, 1024] {
                assert_eq!(
                    flips_and_valuation(algorithm, seed),
                    flips_and_valuation(algorithm, seed)
                );
            }
        }
    }

    #[test]
    fn steps_are_counted() {
        let (steps, _) = flips_and_valuation(Algorithm::WalkSAT, 5);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.iteration, index + 1);
            assert_eq!(step.clause_count, 7);
        }
        if let Some(last) = steps.last() {
            assert_eq!(last.satisfied, 7);
        }
    }
}

mod steps {
    use super::*;

    #[test]
    fn all_greedy() {
        let mut config = config_with(Algorithm::WalkSAT, 9);
        config.threshold.value = 1.0;
        let mut the_context = context_from(config, "a\n-a\n");
        config_flips(&mut the_context, 30);

        assert_eq!(the_context.walksat(), Ok(Report::SearchExhausted));
        assert_eq!(the_context.counters.greedy_steps, 30);
        assert_eq!(the_context.counters.random_steps, 0);
    }

    #[test]
    fn all_random() {
        let mut config = config_with(Algorithm::GSAT, 9);
        config.threshold.value = 0.0;
        config.gsat_flip_limit.value = 30;
        let mut the_context = context_from(config, "a\n-a\n");

        assert_eq!(the_context.gsat(), Ok(Report::SearchExhausted));
        assert_eq!(the_context.counters.random_steps, 30);
        assert_eq!(the_context.counters.greedy_steps, 0);
    }

    fn config_flips(the_context: &mut Context, flips: usize) {
        the_context.config.max_flips.value = flips;
    }

    #[test]
    fn walksat_flips_an_unsatisfied_clause() {
        let mut the_context = context_from(config_with(Algorithm::WalkSAT, 11), "a b\nc\n");

        let formula = the_context.formula.clone();
        let c = formula.atom_of("c").unwrap();

        // Satisfy a b, and falsify c.
        the_context.valuation = vec![true, true, false];
        let evaluation = the_context.evaluate(true).unwrap();
        assert_eq!(evaluation.unsatisfied, Some(vec![1]));

        let (step, next) = the_context
            .walksat_step(Noise::Threshold(0.5), &evaluation)
            .unwrap();
        assert_eq!(step.atom, c);
        assert_eq!(next.satisfied, 2);
        assert_eq!(next.unsatisfied, Some(Vec::default()));
    }

    #[test]
    fn aging_without_satisfied_clauses_is_random() {
        let mut the_context = context_from(config_with(Algorithm::AgingWalkSAT, 5), "a\nb\n");

        for _ in 0..50 {
            the_context.valuation = vec![false, false];
            let evaluation = the_context.evaluate(true).unwrap();
            assert_eq!(evaluation.satisfied, 0);

            let (step, _) = the_context.walksat_step(Noise::Aging, &evaluation).unwrap();
            assert_eq!(step.kind, StepKind::Random);
        }
    }

    #[test]
    fn aging_mostly_satisfied_is_greedy() {
        let formula = (0..19)
            .map(|i| format!("x{i}\n"))
            .chain(std::iter::once("y\n".to_string()))
            .collect::<String>();
        let mut the_context = context_from(config_with(Algorithm::AgingWalkSAT, 5), &formula);
        let y = the_context.formula.atom_of("y").unwrap();

        let mut greedy_steps = 0;
        for _ in 0..200 {
            let mut valuation = vec![true; 19];
            valuation.push(false);
            the_context.valuation = valuation;
            let evaluation = the_context.evaluate(true).unwrap();
            assert_eq!(evaluation.satisfied, 19);

            let (step, _) = the_context.walksat_step(Noise::Aging, &evaluation).unwrap();
            assert_eq!(step.atom, y);
            if step.kind == StepKind::Greedy {
                greedy_steps += 1;
            }
        }

        // Greedy with probability 19/20.
        assert!(greedy_steps > 170);
    }

    #[test]
    fn greedy_gsat_step_is_best() {
        let mut config = config_with(Algorithm::GSAT, 4);
        config.threshold.value = 1.0;
        let mut the_context = context_from(config, "a\nb\nb c\n");

        the_context.valuation = vec![true, false, false];
        let step = the_context.gsat_step().unwrap();

        assert_eq!(step.kind, StepKind::Greedy);
        assert_eq!(step.atom, the_context.formula.atom_of("b").unwrap());
        assert_eq!(step.satisfied, 3);
    }

    #[test]
    fn terminate() {
        let mut config = config_with(Algorithm::GSAT, 0);
        config.gsat_flip_limit.value = 0;
        let mut the_context = context_from(config, "a\n-a\n");

        let mut calls = 0;
        the_context.set_callback_terminate(Box::new(move || {
            calls += 1;
            calls > 10
        }));

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.counters.flips, 10);
    }

    #[test]
    fn generic_rng() {
        use rand::SeedableRng;

        let mut the_context =
            GenericContext::from_config_and_rng(Config::default(), MinimalPCG32::seed_from_u64(1));
        assert!(the_context.read_lines("p -q\nq r\n".as_bytes()).is_ok());
        assert_eq!(the_context.aging_walksat(), Ok(Report::Satisfiable));
    }
}
