use queueing_core::erlang::{erlang_b, erlang_c, odds};
use proptest::prelude::*;

proptest! {
    #[test]
    fn erlang_b_is_a_probability(
        servers in 0u32..500,
        arrival in 0.0f64..1000.0,
        service in 0.01f64..100.0,
    ) {
        let b = erlang_b(servers, arrival, service);
        prop_assert!((0.0..=1.0).contains(&b), "erlang_b = {}", b);
    }

    #[test]
    fn erlang_c_is_a_probability(
        servers in 0u32..500,
        arrival in 0.0f64..1000.0,
        service in 0.01f64..100.0,
    ) {
        let c = erlang_c(servers, arrival, service);
        prop_assert!((0.0..=1.0).contains(&c), "erlang_c = {}", c);
    }

    #[test]
    fn erlang_b_never_increases_with_servers(
        servers in 0u32..300,
        traffic in 0.0f64..400.0,
    ) {
        let fewer = erlang_b(servers, traffic, 1.0);
        let more = erlang_b(servers + 1, traffic, 1.0);
        prop_assert!(more <= fewer + 1e-12, "B({}) = {} > B({}) = {}", servers + 1, more, servers, fewer);
    }

    #[test]
    fn erlang_b_approaches_one_when_overloaded(servers in 1u32..50) {
        let traffic = 1000.0 * f64::from(servers);
        prop_assert!(erlang_b(servers, traffic, 1.0) > 0.99);
    }

    #[test]
    fn erlang_c_approaches_one_near_capacity(servers in 1u32..50) {
        prop_assert!(erlang_c(servers, 0.999_999, 1.0) > 0.99);
    }

    #[test]
    fn erlang_is_deterministic(
        servers in 1u32..200,
        arrival in 0.0f64..0.99,
    ) {
        prop_assert_eq!(erlang_b(servers, arrival, 1.0).to_bits(), erlang_b(servers, arrival, 1.0).to_bits());
        prop_assert_eq!(erlang_c(servers, arrival, 1.0).to_bits(), erlang_c(servers, arrival, 1.0).to_bits());
    }

    #[test]
    fn odds_is_non_negative_below_one(x in 0.0f64..1.0) {
        prop_assert!(odds(x) >= 0.0);
    }
}
