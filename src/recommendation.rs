//! Combines per-metric picks into one recommendation and reports sweep peaks.

use serde::{Deserialize, Serialize};

use crate::Multiplier;
use crate::error::Error;
use crate::measurement::{MeasurementRow, MeasurementTable, Metric};
use crate::threshold::{Threshold, pick_optimal_multiplier};

/// Recommended multipliers for reads, writes, and both.
///
/// # Examples
///
/// ```
/// use iobench_plot::Recommendation;
///
/// let recommendation = Recommendation::new(2.0, 4.0);
/// assert_eq!(recommendation.combined(), 4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    read: Multiplier,
    write: Multiplier,
    combined: Multiplier,
}

impl Recommendation {
    /// The combined multiplier is the larger of the two picks.
    pub fn new(read: Multiplier, write: Multiplier) -> Self {
        Self {
            read,
            write,
            combined: read.max(write),
        }
    }

    /// Runs the threshold picker over both metrics of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the table has no rows.
    pub fn from_table(table: &MeasurementTable, threshold: Threshold) -> Result<Self, Error> {
        let read = pick_optimal_multiplier(&table.series(Metric::Read), threshold)?;
        let write = pick_optimal_multiplier(&table.series(Metric::Write), threshold)?;

        Ok(Self::new(read, write))
    }

    pub const fn read(&self) -> Multiplier {
        self.read
    }

    pub const fn write(&self) -> Multiplier {
        self.write
    }

    pub const fn combined(&self) -> Multiplier {
        self.combined
    }

    /// Gets the pick for a single metric.
    pub const fn for_metric(&self, metric: Metric) -> Multiplier {
        match metric {
            Metric::Read => self.read,
            Metric::Write => self.write,
        }
    }
}

/// Everything reported about a sweep: global peaks and the recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    peak_read: MeasurementRow,
    peak_write: MeasurementRow,
    recommendation: Recommendation,
    threshold: Threshold,
}

impl Analysis {
    /// Analyzes a loaded sweep.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the table has no rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use iobench_plot::{Analysis, MeasurementRow, MeasurementTable, Threshold};
    ///
    /// let table = MeasurementTable::from(vec![
    ///     MeasurementRow::new(1.0, 100.0, 100.0),
    ///     MeasurementRow::new(2.0, 150.0, 200.0),
    ///     MeasurementRow::new(4.0, 155.0, 300.0),
    ///     MeasurementRow::new(8.0, 156.0, 301.0),
    /// ]);
    /// let analysis = Analysis::new(&table, Threshold::default()).unwrap();
    ///
    /// assert_eq!(analysis.recommendation().read(), 2.0);
    /// assert_eq!(analysis.recommendation().write(), 4.0);
    /// assert_eq!(analysis.recommendation().combined(), 4.0);
    /// ```
    pub fn new(table: &MeasurementTable, threshold: Threshold) -> Result<Self, Error> {
        let empty = || Error::InvalidInput("measurement table has no rows".to_string());
        let peak_read = *table.peak(Metric::Read).ok_or_else(empty)?;
        let peak_write = *table.peak(Metric::Write).ok_or_else(empty)?;
        let recommendation = Recommendation::from_table(table, threshold)?;

        Ok(Self {
            peak_read,
            peak_write,
            recommendation,
            threshold,
        })
    }

    /// The row with the highest read throughput.
    pub const fn peak_read(&self) -> &MeasurementRow {
        &self.peak_read
    }

    /// The row with the highest write throughput.
    pub const fn peak_write(&self) -> &MeasurementRow {
        &self.peak_write
    }

    pub const fn peak(&self, metric: Metric) -> &MeasurementRow {
        match metric {
            Metric::Read => &self.peak_read,
            Metric::Write => &self.peak_write,
        }
    }

    pub const fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }
}
