use queueing_core::{use_model, Model, Problem, QueueingError};
use proptest::prelude::*;

fn arb_model() -> impl Strategy<Value = Model> {
    prop_oneof![Just(Model::Md1), Just(Model::Mm1), Just(Model::Mmc),]
}

fn implied_utilisation(model: Model, problem: &Problem) -> f64 {
    match model {
        Model::Md1 | Model::Mm1 => problem.offered_load(),
        Model::Mmc => problem.utilisation(),
    }
}

proptest! {
    #[test]
    fn analyse_fails_exactly_when_unstable(
        model in arb_model(),
        servers in 1u32..40,
        arrival in 0.0f64..80.0,
        service in 0.1f64..10.0,
    ) {
        let problem = Problem::new(servers, arrival, service);
        let rho = implied_utilisation(model, &problem);
        match model.analyse(&problem) {
            Ok(analysis) => {
                prop_assert!(rho < 1.0);
                prop_assert_eq!(analysis.utilisation, rho);
            }
            Err(err) => {
                prop_assert!(rho >= 1.0);
                prop_assert_eq!(err, QueueingError::utilisation(rho));
            }
        }
    }

    #[test]
    fn single_server_metrics_are_sane(
        model in prop_oneof![Just(Model::Md1), Just(Model::Mm1)],
        rho in 0.0f64..0.999,
        service in 0.1f64..10.0,
    ) {
        let problem = Problem::single(rho * service, service);
        let analysis = model.analyse(&problem).unwrap();
        prop_assert!(analysis.queued >= 0.0);
        prop_assert!(analysis.sojourn.is_finite());
        // Every arrival spends at least one service time in the system.
        prop_assert!(analysis.sojourn >= 1.0 / service - 1e-9);
        prop_assert_eq!(analysis.queue_probability, analysis.utilisation);
        prop_assert_eq!(analysis.loss_probability, analysis.utilisation);
    }

    #[test]
    fn deterministic_service_never_queues_more_than_exponential(
        rho in 0.0f64..0.999,
        service in 0.1f64..10.0,
    ) {
        let problem = Problem::single(rho * service, service);
        let md1 = Model::Md1.analyse(&problem).unwrap();
        let mm1 = Model::Mm1.analyse(&problem).unwrap();
        prop_assert!(md1.queued <= mm1.queued);
    }

    #[test]
    fn mmc_probabilities_are_bounded(
        servers in 1u32..60,
        utilisation in 0.0f64..0.999,
        service in 0.1f64..10.0,
    ) {
        let arrival = utilisation * f64::from(servers) * service;
        let analysis = Model::Mmc.analyse(&Problem::new(servers, arrival, service)).unwrap();
        prop_assert!((0.0..=1.0).contains(&analysis.queue_probability));
        prop_assert!((0.0..=1.0).contains(&analysis.loss_probability));
    }

    #[test]
    fn analyse_is_bit_identical_across_calls(
        model in arb_model(),
        servers in 1u32..20,
        arrival in 0.0f64..0.99,
    ) {
        let problem = Problem::new(servers, arrival, 1.0);
        prop_assert_eq!(model.analyse(&problem), model.analyse(&problem));
    }

    #[test]
    fn use_model_rejects_everything_else(name in "[A-Za-z0-9/ ]{0,8}") {
        let known = ["M/D/1", "M/M/1", "M/M/c"].contains(&name.as_str());
        match use_model(&name) {
            Ok(model) => {
                prop_assert!(known);
                prop_assert_eq!(model.name(), name.as_str());
            }
            Err(err) => {
                prop_assert!(!known);
                prop_assert!(err.is_unsupported_model());
            }
        }
    }
}
