//! Defaults for analysis settings, overridable through environment variables.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::threshold::Threshold;

/// Default page size in bytes, used when reporting buffer sizes.
pub const DEFAULT_PAGE_SIZE: u64 = 4096;

/// Environment variable names for configuration
pub const ENV_THRESHOLD: &str = "IOBENCH_PLOT_THRESHOLD";
pub const ENV_PAGE_SIZE: &str = "IOBENCH_PLOT_PAGE_SIZE";

/// Configuration defaults for analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Improvement below which a larger buffer isn't worth it
    threshold: Threshold,
    /// Page size in bytes that multipliers are relative to
    page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub const fn new(threshold: Threshold, page_size: u64) -> Self {
        Self {
            threshold,
            page_size,
        }
    }

    /// Create configuration from environment variables if present
    ///
    /// Unset, unparsable, or out of range values fall back to the defaults.
    pub fn from_env() -> Self {
        // Parse environment variables only once and cache the result
        static CONFIG: OnceLock<Config> = OnceLock::new();

        *CONFIG.get_or_init(|| {
            fn parse_env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
                std::env::var(name)
                    .ok()
                    .and_then(|value| value.trim().parse().ok())
            }

            let defaults = Self::default();

            Self {
                threshold: parse_env_var(ENV_THRESHOLD)
                    .and_then(|value| Threshold::new(value).ok())
                    .unwrap_or(defaults.threshold),
                page_size: parse_env_var(ENV_PAGE_SIZE)
                    .filter(|&size| size > 0)
                    .unwrap_or(defaults.page_size),
            }
        })
    }

    /// Get the improvement threshold
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Get the page size in bytes
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Set the improvement threshold for this configuration
    pub const fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the page size for this configuration
    pub const fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }
}
