//! Erlang B and Erlang C evaluators
//!
//! Both formulas are computed with the standard Erlang B recurrence
//!
//! ```text
//! B(0) = 1
//! B(k) = a·B(k-1) / (a·B(k-1) + k)      k = 1..c
//! ```
//!
//! where `a` is the offered traffic in Erlangs. The recurrence is evaluated
//! bottom-up in a loop, so stack usage is constant for any server count and
//! the cost is O(c) time, O(1) space.
//!
//! # Example
//!
//! ```rust
//! use queueing_core::erlang::{erlang_b, erlang_c};
//!
//! // 150 Erlangs of traffic offered to 150 trunks
//! let loss = erlang_b(150, 60.0, 0.4);
//! assert_eq!((loss * 1000.0).round() / 1000.0, 0.062);
//!
//! let wait = erlang_c(1, 0.9, 1.0);
//! assert_eq!((wait * 100.0).round() / 100.0, 0.90);
//! ```

/// The "odds" of a utilisation, `x / (1 - x)`
///
/// Queue length and sojourn time in the single-server models both scale with
/// this factor.
#[inline]
pub fn odds(x: f64) -> f64 {
    x / (1.0 - x)
}

/// Blocking probability of an arrival to a loss system with `servers` channels
///
/// # Arguments
/// * `servers` - Number of channels, `c`
/// * `arrival_rate` - Mean arrivals per unit time, `λ`
/// * `service_rate` - Mean completions per unit time per channel, `μ`
///
/// # Returns
/// Probability in `[0, 1]` that an arrival finds every channel busy and is lost
pub fn erlang_b(servers: u32, arrival_rate: f64, service_rate: f64) -> f64 {
    erlang_b_traffic(servers, arrival_rate / service_rate)
}

/// Probability that an arrival has to wait for one of `servers` channels
///
/// Assumes an unlimited waiting room. For an unstable system (`λ/μ >= 1`) or
/// zero servers every arrival waits, and the result saturates at 1.
///
/// # Arguments
/// * `servers` - Number of channels, `c`
/// * `arrival_rate` - Mean arrivals per unit time, `λ`
/// * `service_rate` - Mean completions per unit time per channel, `μ`
///
/// # Returns
/// Probability in `[0, 1]` that an arrival is queued
pub fn erlang_c(servers: u32, arrival_rate: f64, service_rate: f64) -> f64 {
    let rho = arrival_rate / service_rate;
    if servers == 0 || rho >= 1.0 {
        return 1.0;
    }
    let x = rho * erlang_b_traffic(servers - 1, f64::from(servers) * rho);
    x / ((1.0 - rho) + x)
}

/// Erlang B recurrence for `channels` channels and offered traffic `traffic`
pub(crate) fn erlang_b_traffic(channels: u32, traffic: f64) -> f64 {
    let mut b = 1.0;
    for k in 1..=channels {
        let x = traffic * b;
        b = x / (x + f64::from(k));
    }
    b
}
