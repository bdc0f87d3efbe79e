//! Configuration options for analysis and reporting.
//!
//! [`Options`] gathers everything that changes how a sweep is analyzed and how
//! results are reported:
//!
//! - **Format** ([`Format`]): report format (text, JSON, CSV)
//! - **Threshold** ([`Threshold`]): improvement below which a larger buffer isn't worth it
//! - **Page size**: bytes per multiplier step, for reporting buffer sizes
//! - **Chart size**: pixel dimensions overriding each chart's default
//!
//! # Usage
//!
//! ```
//! use iobench_plot::{Format, Options, Threshold};
//!
//! let options = Options::default();
//! assert_eq!(options.format(), Format::Text);
//! assert_eq!(options.page_size(), 4096);
//!
//! let options = Options::default()
//!     .with_format(Format::Json)
//!     .with_threshold(Threshold::new(0.1).unwrap())
//!     .with_chart_size((800, 600));
//! assert_eq!(options.threshold().value(), 0.1);
//! assert_eq!(options.chart_size(), Some((800, 600)));
//! ```
//!
//! # Environment Variables
//!
//! [`Options::from_env`] starts from these, when set:
//!
//! - `IOBENCH_PLOT_THRESHOLD`: improvement threshold as a fraction (default: 0.05)
//! - `IOBENCH_PLOT_PAGE_SIZE`: page size in bytes (default: 4096)

pub mod serialization;

use self::serialization::Format;
use crate::config::Config;
use crate::threshold::Threshold;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Unified configuration for analysis and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Report output format.
    format: Format,

    /// Improvement threshold for the optimal multiplier.
    threshold: Threshold,

    /// Page size in bytes.
    page_size: u64,

    /// Chart size in pixels, or each chart's own default.
    chart_size: Option<(u32, u32)>,
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Options {
    /// Creates options from explicit settings.
    pub const fn new(
        format: Format,
        threshold: Threshold,
        page_size: u64,
        chart_size: Option<(u32, u32)>,
    ) -> Self {
        Self {
            format,
            threshold,
            page_size,
            chart_size,
        }
    }

    /// Creates options with defaults taken from `config`.
    pub const fn from_config(config: Config) -> Self {
        Self::new(Format::Text, config.threshold(), config.page_size(), None)
    }

    /// Creates options with defaults taken from the environment.
    pub fn from_env() -> Self {
        Self::from_config(Config::from_env())
    }

    /// Set report format.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set improvement threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set page size in bytes.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set chart size in pixels.
    #[must_use]
    pub const fn with_chart_size(mut self, size: (u32, u32)) -> Self {
        self.chart_size = Some(size);
        self
    }

    /// Get the report format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the improvement threshold.
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Get the page size in bytes.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Get the chart size override.
    #[must_use]
    pub const fn chart_size(&self) -> Option<(u32, u32)> {
        self.chart_size
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Options {{ format: {}, threshold: {}, page_size: {} }}",
            self.format, self.threshold, self.page_size
        )
    }
}
