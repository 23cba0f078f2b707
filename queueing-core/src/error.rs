//! Error types for the queueing core library
//!
//! This module provides structured error types using `thiserror` for
//! type-safe error handling across the library.
//!
//! # Error Hierarchy
//!
//! ```text
//! QueueingError
//! ├── UnsupportedModel - registry lookup with an unknown model name
//! └── Utilisation      - unstable system (utilisation >= 1)
//! ```
//!
//! # Usage
//!
//! Library code returns [`QueueingError`] through the [`Result`] alias:
//!
//! ```rust
//! use queueing_core::{use_model, Problem};
//!
//! let model = use_model("M/M/1")?;
//! let analysis = model.analyse(&Problem::new(1, 0.5, 1.0))?;
//! # Ok::<(), queueing_core::QueueingError>(())
//! ```
//!
//! Application code should use `anyhow` with context:
//!
//! ```rust,ignore
//! use anyhow::Context;
//!
//! let analysis = model.analyse(&problem)
//!     .context("Failed to analyse queue")?;
//! ```

use thiserror::Error;

/// Result alias used throughout the core library
pub type Result<T> = std::result::Result<T, QueueingError>;

/// Errors that can occur while selecting or evaluating a queueing model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueueingError {
    /// The requested model name is not one of the supported models
    #[error("queueing: model is not supported: {0}")]
    UnsupportedModel(String),

    /// The arrival rate meets or exceeds the service capacity
    #[error("queueing: system is fully utilised (utilisation {utilisation} >= 1)")]
    Utilisation { utilisation: f64 },
}

impl QueueingError {
    /// Create an unsupported model error
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedModel(name.into())
    }

    /// Create a utilisation error for the offending utilisation value
    pub fn utilisation(utilisation: f64) -> Self {
        Self::Utilisation { utilisation }
    }

    /// Returns true for [`QueueingError::UnsupportedModel`]
    pub fn is_unsupported_model(&self) -> bool {
        matches!(self, Self::UnsupportedModel(_))
    }

    /// Returns true for [`QueueingError::Utilisation`]
    pub fn is_utilisation(&self) -> bool {
        matches!(self, Self::Utilisation { .. })
    }
}
