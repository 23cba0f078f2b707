//! Queueing problem descriptor

use serde::{Deserialize, Serialize};

/// Parameters of a queueing problem to be analysed
///
/// Implement this for any caller-owned type that already carries the three
/// rates, then pass it straight to [`Model::analyse`](crate::Model::analyse).
pub trait QueueParameters {
    /// Number of parallel servers
    fn servers(&self) -> u32;

    /// Mean number of arrivals per unit time
    fn arrival_rate(&self) -> f64;

    /// Mean number serviced per unit time by one server
    fn service_rate(&self) -> f64;
}

/// A plain queueing problem value
///
/// The core does not validate the fields; callers are expected to pass
/// `servers >= 1`, a non-negative arrival rate and a positive service rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Number of parallel service channels
    pub servers: u32,

    /// Mean arrivals per unit time (λ)
    pub arrival_rate: f64,

    /// Mean completions per unit time per server (μ)
    pub service_rate: f64,
}

impl Problem {
    pub fn new(servers: u32, arrival_rate: f64, service_rate: f64) -> Self {
        Self {
            servers,
            arrival_rate,
            service_rate,
        }
    }

    /// A single-server problem
    pub fn single(arrival_rate: f64, service_rate: f64) -> Self {
        Self::new(1, arrival_rate, service_rate)
    }

    /// Total offered traffic in Erlangs, `λ/μ`
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Total service capacity, `c·μ`
    pub fn capacity(&self) -> f64 {
        f64::from(self.servers) * self.service_rate
    }

    /// Per-server utilisation, `λ/(c·μ)`
    pub fn utilisation(&self) -> f64 {
        self.arrival_rate / self.capacity()
    }
}

impl QueueParameters for Problem {
    fn servers(&self) -> u32 {
        self.servers
    }

    fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    fn service_rate(&self) -> f64 {
        self.service_rate
    }
}
