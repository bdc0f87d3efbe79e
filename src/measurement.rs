//! Buffer-size sweep results: rows of read and write throughput per multiplier.

use core::fmt::{self, Display, Formatter};
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::columns::{ColumnSpec, Header};
use crate::error::Error;
use crate::threshold::SeriesPoint;
use crate::{Multiplier, Throughput};

const MULTIPLIER: ColumnSpec = ColumnSpec::new("multiplier", &["multiplier", "倍数"]);
const READ: ColumnSpec = ColumnSpec::new(
    "read_mbs",
    &["read_mbs", "read", "read throughput (MB/s)", "读取速度(MB/s)"],
);
const WRITE: ColumnSpec = ColumnSpec::new(
    "write_mbs",
    &["write_mbs", "write", "write throughput (MB/s)", "写入速度(MB/s)"],
);

/// Which throughput a series is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Read,
    Write,
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Throughput measured at one buffer multiplier.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRow {
    /// Buffer size relative to the page size.
    pub multiplier: Multiplier,
    /// Read throughput in MB/s.
    pub read_mbs: Throughput,
    /// Write throughput in MB/s.
    pub write_mbs: Throughput,
}

impl MeasurementRow {
    pub const fn new(multiplier: Multiplier, read_mbs: Throughput, write_mbs: Throughput) -> Self {
        Self {
            multiplier,
            read_mbs,
            write_mbs,
        }
    }

    /// Gets the throughput for `metric`.
    pub const fn throughput(&self, metric: Metric) -> Throughput {
        match metric {
            Metric::Read => self.read_mbs,
            Metric::Write => self.write_mbs,
        }
    }

    /// Projects the row onto a single metric.
    pub const fn point(&self, metric: Metric) -> SeriesPoint {
        SeriesPoint::new(self.multiplier, self.throughput(metric))
    }
}

/// Sweep results in ascending multiplier order, immutable once loaded.
///
/// # Examples
///
/// ```
/// use iobench_plot::{MeasurementTable, Metric};
///
/// let csv = "multiplier,read_mbs,write_mbs\n1,100,80\n2,180,150\n4,185,160\n";
/// let table = MeasurementTable::from_reader(csv.as_bytes()).unwrap();
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.peak(Metric::Read).unwrap().multiplier, 4.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementTable {
    rows: Box<[MeasurementRow]>,
}

impl MeasurementTable {
    /// Loads a table from CSV with a header row.
    ///
    /// Headers are matched case-insensitively; both the English names and the
    /// headers written by the sweep tool (`倍数`, `读取速度(MB/s)`, `写入速度(MB/s)`)
    /// are recognized.
    ///
    /// # Errors
    ///
    /// - [`Error::Csv`] if the CSV is malformed or cannot be read
    /// - [`Error::MissingColumn`] if a required column is absent
    /// - [`Error::InvalidValue`] if a cell is not a number
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header = Header::new(csv_reader.headers()?);
        let multiplier = header.position(&MULTIPLIER)?;
        let read = header.position(&READ)?;
        let write = header.position(&WRITE)?;

        let rows = csv_reader
            .records()
            .enumerate()
            .map(|(index, record)| -> Result<MeasurementRow, Error> {
                let record = record?;
                let row = index + 1;
                Ok(MeasurementRow::new(
                    MULTIPLIER.parse(&record, multiplier, row)?,
                    READ.parse(&record, read, row)?,
                    WRITE.parse(&record, write, row)?,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(rows.into())
    }

    /// Gets the rows in table order.
    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Collects one metric as an ordered series.
    pub fn series(&self, metric: Metric) -> Vec<SeriesPoint> {
        self.rows.iter().map(|row| row.point(metric)).collect()
    }

    /// The row with the highest throughput for `metric`, first one on ties.
    pub fn peak(&self, metric: Metric) -> Option<&MeasurementRow> {
        self.rows.iter().reduce(|best, row| {
            if row.throughput(metric) > best.throughput(metric) {
                row
            } else {
                best
            }
        })
    }
}

impl From<Vec<MeasurementRow>> for MeasurementTable {
    fn from(rows: Vec<MeasurementRow>) -> Self {
        Self {
            rows: rows.into_boxed_slice(),
        }
    }
}

impl FromIterator<MeasurementRow> for MeasurementTable {
    fn from_iter<I: IntoIterator<Item = MeasurementRow>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a> IntoIterator for &'a MeasurementTable {
    type Item = &'a MeasurementRow;
    type IntoIter = std::slice::Iter<'a, MeasurementRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
