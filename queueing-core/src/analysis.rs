//! Steady-state analysis results

use serde::{Deserialize, Serialize};

/// Steady-state metrics of a stable queue
///
/// Serializes as a flat object:
///
/// ```json
/// {"utilisation":0.8,"queued":3.2,"sojourn":5.0,"queue_probability":0.8,"loss_probability":0.8}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Expected utilisation of each server, in `[0, 1)`
    pub utilisation: f64,

    /// Mean number of arrivals waiting to be served
    pub queued: f64,

    /// Mean time an arrival spends in the system, waiting plus service
    pub sojourn: f64,

    /// Probability that an arrival is queued
    pub queue_probability: f64,

    /// Probability that an arrival is lost if queueing is not allowed
    pub loss_probability: f64,
}

impl Analysis {
    /// Mean time spent waiting before service starts
    ///
    /// Subtracts the mean service time `1/μ` from the sojourn time.
    pub fn waiting_time(&self, service_rate: f64) -> f64 {
        self.sojourn - 1.0 / service_rate
    }
}
