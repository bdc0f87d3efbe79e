//! Report output formats.

use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Report output format.
///
/// # Examples
///
/// ```
/// use iobench_plot::Format;
///
/// assert_eq!(Format::default(), Format::Text);
/// assert_eq!(Format::Json.to_string(), "json");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable sentences.
    #[default]
    Text,
    /// A single JSON object.
    Json,
    /// A header row and a value row.
    Csv,
}

impl Format {
    /// Whether the format is meant for people rather than programs.
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
