//! Configuration for report output and logging.

/// Default number of decimals in the text report
pub const DEFAULT_PRECISION: usize = 3;

/// Default tracing filter when neither `RUST_LOG` nor `QUEUEING_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for rendering an analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Decimals shown for real-valued rows of the text table
    pub precision: usize,

    /// `tracing-subscriber` filter directives
    pub log_filter: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ReportConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("QUEUEING_PRECISION") {
            if let Ok(n) = val.trim().parse() {
                config.precision = n;
            }
        }

        if let Some(val) = lookup("QUEUEING_LOG") {
            if !val.trim().is_empty() {
                config.log_filter = val;
            }
        }

        config
    }

    /// Override the precision when one was given on the command line
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        if let Some(p) = precision {
            self.precision = p;
        }
        self
    }
}
