//! Mean execution times of `cat` implementations for side-by-side comparison.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::columns::{ColumnSpec, Header};
use crate::error::Error;

const PROGRAM: ColumnSpec = ColumnSpec::new("program", &["program", "name"]);
const TIME: ColumnSpec = ColumnSpec::new(
    "time_ms",
    &["time_ms", "mean_ms", "time", "mean execution time (ms)"],
);

/// Programs left out of the optimized comparison by default.
///
/// `mycat1` copies one byte per syscall and dwarfs every other bar.
pub const DEFAULT_EXCLUDED: &[&str] = &["mycat1"];

/// Sample measurements: system `cat` and six variants with growing buffer awareness.
const SAMPLE: [(&str, f64); 7] = [
    ("System cat", 456.0),
    ("mycat1", 1_500_000.0),
    ("mycat2", 779.0),
    ("mycat3", 775.0),
    ("mycat4", 848.0),
    ("mycat5", 436.0),
    ("mycat6", 436.0),
];

/// A program and its mean execution time.
#[derive(Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramTiming {
    pub program: String,
    /// Mean wall-clock time in milliseconds.
    pub mean_ms: f64,
}

impl ProgramTiming {
    pub fn new(program: impl Into<String>, mean_ms: f64) -> Self {
        Self {
            program: program.into(),
            mean_ms,
        }
    }
}

/// Ordered program timings.
///
/// # Examples
///
/// ```
/// use iobench_plot::Comparison;
///
/// let all = Comparison::sample();
/// let optimized = all.without(&["mycat1"]);
///
/// assert_eq!(all.len(), 7);
/// assert_eq!(optimized.len(), 6);
/// assert_eq!(optimized.fastest().unwrap().program, "mycat5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comparison {
    timings: Box<[ProgramTiming]>,
}

impl Comparison {
    /// The built-in sample measurements.
    pub fn sample() -> Self {
        SAMPLE
            .iter()
            .map(|&(program, mean_ms)| ProgramTiming::new(program, mean_ms))
            .collect()
    }

    /// Loads timings from CSV with `program` and `time_ms` columns.
    ///
    /// # Errors
    ///
    /// - [`Error::Csv`] if the CSV is malformed or cannot be read
    /// - [`Error::MissingColumn`] if a required column is absent
    /// - [`Error::InvalidValue`] if a time is not a number
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header = Header::new(csv_reader.headers()?);
        let program = header.position(&PROGRAM)?;
        let time = header.position(&TIME)?;

        csv_reader
            .records()
            .enumerate()
            .map(|(index, record)| -> Result<ProgramTiming, Error> {
                let record = record?;
                Ok(ProgramTiming::new(
                    PROGRAM.text(&record, program),
                    TIME.parse(&record, time, index + 1)?,
                ))
            })
            .collect()
    }

    /// A copy without the named programs, order preserved.
    pub fn without<S: AsRef<str>>(&self, excluded: &[S]) -> Self {
        self.timings
            .iter()
            .filter(|timing| !excluded.iter().any(|name| name.as_ref() == timing.program))
            .cloned()
            .collect()
    }

    pub fn timings(&self) -> &[ProgramTiming] {
        &self.timings
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// Largest mean time, or `None` when empty.
    pub fn max_ms(&self) -> Option<f64> {
        self.timings
            .iter()
            .map(|timing| timing.mean_ms)
            .reduce(f64::max)
    }

    /// The program with the lowest mean time, first one on ties.
    pub fn fastest(&self) -> Option<&ProgramTiming> {
        self.timings.iter().reduce(|best, timing| {
            if timing.mean_ms < best.mean_ms {
                timing
            } else {
                best
            }
        })
    }
}

impl FromIterator<ProgramTiming> for Comparison {
    fn from_iter<I: IntoIterator<Item = ProgramTiming>>(iter: I) -> Self {
        Self {
            timings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Comparison {
    type Item = &'a ProgramTiming;
    type IntoIter = std::slice::Iter<'a, ProgramTiming>;

    fn into_iter(self) -> Self::IntoIter {
        self.timings.iter()
    }
}
