//! Picks the buffer multiplier past which throughput stops improving.
//!
//! A sweep measures throughput at increasing buffer sizes. Gains are large while
//! the buffer is small and flatten out once syscall overhead stops dominating.
//! [`pick_optimal_multiplier`] walks adjacent measurements in order and stops at
//! the first step whose relative improvement falls below the [`Threshold`].
//!
//! # Examples
//!
//! ```
//! use iobench_plot::{SeriesPoint, optimal_multiplier};
//!
//! let points = [
//!     SeriesPoint::new(1.0, 100.0),
//!     SeriesPoint::new(2.0, 150.0),
//!     SeriesPoint::new(4.0, 155.0),
//!     SeriesPoint::new(8.0, 156.0),
//! ];
//!
//! // 150 -> 155 is a 3.3% gain, so 2x is where growing the buffer stops paying off.
//! assert_eq!(optimal_multiplier(&points).unwrap(), 2.0);
//! ```

use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{Multiplier, Throughput};

/// One metric's throughput at one buffer multiplier.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Buffer size as a multiple of the page size.
    pub multiplier: Multiplier,
    /// Measured throughput in MB/s.
    pub value: Throughput,
}

impl SeriesPoint {
    pub const fn new(multiplier: Multiplier, value: Throughput) -> Self {
        Self { multiplier, value }
    }
}

impl From<(Multiplier, Throughput)> for SeriesPoint {
    fn from((multiplier, value): (Multiplier, Throughput)) -> Self {
        Self::new(multiplier, value)
    }
}

/// Minimum fractional improvement between consecutive measurements that still
/// counts as worth the larger buffer.
///
/// # Examples
///
/// ```
/// use iobench_plot::Threshold;
///
/// assert_eq!(Threshold::default().value(), 0.05);
/// assert_eq!(Threshold::default().to_string(), "5%");
/// assert!(Threshold::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Five percent.
    pub const DEFAULT: f64 = 0.05;

    /// Creates a threshold from a fraction, e.g. `0.05` for 5%.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the value is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(Error::Config(format!(
                "threshold must be a finite number, got {value}"
            )))
        }
    }

    /// Gets the threshold as a fraction.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl Display for Threshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Rounded to six decimals of a percent, hiding noise like 0.07 * 100.
        let percent = self.0 * 100.0;
        let percent = if percent.abs() < 1e9 {
            (percent * 1e6).round() / 1e6
        } else {
            percent
        };

        write!(f, "{}%", percent + 0.0)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// Fractional change from `prev` to `next`, or `None` unless both are positive.
///
/// ```
/// use iobench_plot::threshold::improvement;
///
/// assert_eq!(improvement(100.0, 150.0), Some(0.5));
/// assert_eq!(improvement(100.0, 90.0), Some(-0.1));
/// assert_eq!(improvement(0.0, 50.0), None);
/// ```
pub fn improvement(prev: Throughput, next: Throughput) -> Option<f64> {
    (prev > 0.0 && next > 0.0).then(|| (next - prev) / prev)
}

/// Picks the smallest multiplier after which gains drop below `threshold`.
///
/// Scans adjacent pairs in order. The first pair whose improvement is below the
/// threshold returns the multiplier *before* that step; regressions count as
/// below the threshold. Pairs with a zero or negative value on either side are
/// skipped. When no pair triggers, the first point's multiplier is returned.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `points` is empty.
pub fn pick_optimal_multiplier(
    points: &[SeriesPoint],
    threshold: Threshold,
) -> Result<Multiplier, Error> {
    let first = points
        .first()
        .ok_or_else(|| Error::InvalidInput("measurement series is empty".to_string()))?;

    let optimal = points
        .windows(2)
        .find(|pair| {
            improvement(pair[0].value, pair[1].value)
                .is_some_and(|gain| gain < threshold.value())
        })
        .map_or(first.multiplier, |pair| pair[0].multiplier);

    Ok(optimal)
}

/// Picks the optimal multiplier using the default 5% [`Threshold`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `points` is empty.
pub fn optimal_multiplier(points: &[SeriesPoint]) -> Result<Multiplier, Error> {
    pick_optimal_multiplier(points, Threshold::default())
}
