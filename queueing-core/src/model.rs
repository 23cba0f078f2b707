//! Queueing models and the model registry
//!
//! Three models are supported, selected by their Kendall notation:
//!
//! | Name    | Arrivals | Service       | Servers |
//! |---------|----------|---------------|---------|
//! | `M/D/1` | Poisson  | Deterministic | 1       |
//! | `M/M/1` | Poisson  | Exponential   | 1       |
//! | `M/M/c` | Poisson  | Exponential   | c       |
//!
//! The set is closed, so the models are variants of one `Copy` enum and the
//! registry is a `match` over the names. Every variant is stateless and can
//! be shared freely between threads.
//!
//! # Example
//!
//! ```rust
//! use queueing_core::{use_model, Problem, MM1};
//!
//! let model = use_model(MM1).unwrap();
//! let analysis = model.analyse(&Problem::single(0.8, 1.0)).unwrap();
//!
//! // Mean wait of 4 service times at 80% load
//! assert_eq!((analysis.waiting_time(1.0) * 1000.0).round() / 1000.0, 4.0);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::analysis::Analysis;
use crate::erlang::{erlang_b, erlang_c, odds};
use crate::error::{QueueingError, Result};
use crate::problem::QueueParameters;

/// Name of the deterministic-service single-server model
pub const MD1: &str = "M/D/1";

/// Name of the exponential-service single-server model
pub const MM1: &str = "M/M/1";

/// Name of the exponential-service multi-server model
pub const MMC: &str = "M/M/c";

/// A steady-state queueing model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// M/D/1: Poisson arrivals, deterministic service, one server
    Md1,
    /// M/M/1: Poisson arrivals, exponential service, one server
    Mm1,
    /// M/M/c: Poisson arrivals, exponential service, c servers
    Mmc,
}

impl Model {
    /// Every supported model, in registry order
    pub const ALL: [Model; 3] = [Model::Md1, Model::Mm1, Model::Mmc];

    /// Canonical Kendall name of the model
    pub fn name(&self) -> &'static str {
        match self {
            Model::Md1 => MD1,
            Model::Mm1 => MM1,
            Model::Mmc => MMC,
        }
    }

    /// Analyse a problem with this model
    ///
    /// # Arguments
    /// * `problem` - Server count and rates to analyse
    ///
    /// # Returns
    /// The steady-state [`Analysis`]
    ///
    /// # Errors
    /// [`QueueingError::Utilisation`] when the implied utilisation (`λ/μ` for
    /// the single-server models, `λ/(c·μ)` for M/M/c) is 1 or more.
    pub fn analyse<P>(&self, problem: &P) -> Result<Analysis>
    where
        P: QueueParameters + ?Sized,
    {
        let analysis = match self {
            Model::Md1 => analyse_md1(problem),
            Model::Mm1 => analyse_mm1(problem),
            Model::Mmc => analyse_mmc(problem),
        };

        match &analysis {
            Ok(a) => trace!(
                model = self.name(),
                servers = problem.servers(),
                arrival_rate = problem.arrival_rate(),
                service_rate = problem.service_rate(),
                utilisation = a.utilisation,
                queued = a.queued,
                sojourn = a.sojourn,
                "Analysed queue"
            ),
            Err(e) => debug!(model = self.name(), error = %e, "Queue is unstable"),
        }

        analysis
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = QueueingError;

    fn from_str(s: &str) -> Result<Self> {
        use_model(s)
    }
}

/// Look up a model by its exact Kendall name
///
/// # Errors
/// [`QueueingError::UnsupportedModel`] for any name other than [`MD1`],
/// [`MM1`] or [`MMC`].
pub fn use_model(name: &str) -> Result<Model> {
    match name {
        MD1 => Ok(Model::Md1),
        MM1 => Ok(Model::Mm1),
        MMC => Ok(Model::Mmc),
        _ => {
            debug!(model = name, "Unsupported queueing model requested");
            Err(QueueingError::unsupported(name))
        }
    }
}

fn check_stable(utilisation: f64) -> Result<()> {
    if utilisation >= 1.0 {
        return Err(QueueingError::utilisation(utilisation));
    }
    Ok(())
}

fn analyse_md1<P: QueueParameters + ?Sized>(problem: &P) -> Result<Analysis> {
    let mu = problem.service_rate();
    let rho = problem.arrival_rate() / mu;
    check_stable(rho)?;

    // Deterministic service halves the M/M/1 factor.
    let f = 0.5 * odds(rho);
    Ok(Analysis {
        utilisation: rho,
        queued: rho * f,
        sojourn: (1.0 + f) / mu,
        queue_probability: rho,
        loss_probability: rho,
    })
}

fn analyse_mm1<P: QueueParameters + ?Sized>(problem: &P) -> Result<Analysis> {
    let lambda = problem.arrival_rate();
    let mu = problem.service_rate();
    let rho = lambda / mu;
    check_stable(rho)?;

    let f = odds(rho);
    // f/λ is 0/0 for an idle queue; the limit is one service time.
    let sojourn = if lambda == 0.0 { 1.0 / mu } else { f / lambda };
    Ok(Analysis {
        utilisation: rho,
        queued: rho * f,
        sojourn,
        queue_probability: rho,
        loss_probability: rho,
    })
}

fn analyse_mmc<P: QueueParameters + ?Sized>(problem: &P) -> Result<Analysis> {
    let servers = problem.servers();
    let lambda = problem.arrival_rate();
    let mu = problem.service_rate();

    let capacity = f64::from(servers) * mu;
    let rho = lambda / capacity;
    check_stable(rho)?;

    let queue_probability = erlang_c(servers, lambda, mu);
    let loss_probability = erlang_b(servers, lambda, mu);

    // Queue length scales with the total offered traffic, not per-server load.
    let offered = lambda / mu;
    let queued = queue_probability * odds(offered);
    Ok(Analysis {
        utilisation: rho,
        queued,
        sojourn: queue_probability / capacity + queued / capacity,
        queue_probability,
        loss_probability,
    })
}
