// Queueing Core Library
//
// Steady-state analysis of single queues: M/D/1, M/M/1 and M/M/c models
// together with the Erlang B and Erlang C evaluators they rely on.

pub mod analysis;
pub mod erlang;
pub mod error;
pub mod model;
pub mod problem;

pub use analysis::Analysis;
pub use erlang::{erlang_b, erlang_c};
pub use error::{QueueingError, Result};
pub use model::{use_model, Model, MD1, MM1, MMC};
pub use problem::{Problem, QueueParameters};
