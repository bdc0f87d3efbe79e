//! Analysis and charts for file I/O benchmark results.
//!
//! `iobench-plot` works with two kinds of results:
//!
//! - **Buffer-size sweeps**: read and write throughput measured at buffer sizes that
//!   are multiples of the page size. The library finds the global peaks and the
//!   smallest multiplier after which a larger buffer stops paying off.
//! - **Program comparisons**: mean execution times of `cat` implementations,
//!   charted with and without the outliers that dwarf everything else.
//!
//! ## Module structure
//!
//! - `threshold.rs`: the optimal multiplier heuristic
//! - `recommendation.rs`: combining read and write picks, sweep peaks
//! - `measurement.rs`: sweep tables and CSV loading
//! - `comparison.rs`: program timings, sample data, and subsets
//! - `chart/`: SVG and PNG rendering
//! - `options/`: analysis and report settings
//! - `config.rs`: environment variable defaults
//! - `input.rs`, `output.rs`: reading tables and writing reports
//! - `error.rs`, `exit_code.rs`: error types and process exit codes
//!
//! # Optimal multiplier
//!
//! Throughput at each multiplier is compared with the one before it. The first step
//! that improves by less than the [`Threshold`] (5% unless configured otherwise)
//! stops the scan, and the multiplier before that step is picked. A regression
//! stops the scan too, and pairs with a zero throughput are skipped. When every
//! step improves by at least the threshold, the first multiplier is kept.
//!
//! ```
//! use iobench_plot::{SeriesPoint, optimal_multiplier};
//!
//! let steady_gains = [
//!     SeriesPoint::new(1.0, 100.0),
//!     SeriesPoint::new(2.0, 106.0),
//!     SeriesPoint::new(4.0, 113.0),
//! ];
//! assert_eq!(optimal_multiplier(&steady_gains).unwrap(), 1.0);
//!
//! let regression = [SeriesPoint::new(1.0, 100.0), SeriesPoint::new(2.0, 90.0)];
//! assert_eq!(optimal_multiplier(&regression).unwrap(), 1.0);
//! ```
//!
//! # Analysis
//!
//! ```
//! use iobench_plot::{Analysis, MeasurementTable, Options};
//! use anyhow::Result;
//!
//! # fn example() -> Result<()> {
//! let csv = "multiplier,read_mbs,write_mbs\n1,900,700\n2,1500,1200\n4,1540,1500\n8,1560,1520\n";
//! let table = MeasurementTable::from_reader(csv.as_bytes())?;
//! let options = Options::default();
//! let analysis = Analysis::new(&table, options.threshold())?;
//!
//! assert_eq!(analysis.peak_read().multiplier, 8.0);
//! assert_eq!(analysis.recommendation().read(), 2.0);
//! assert_eq!(analysis.recommendation().write(), 4.0);
//! assert_eq!(analysis.recommendation().combined(), 4.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod chart;
pub(crate) mod columns;
pub mod comparison;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod input;
pub mod measurement;
pub mod options;
pub mod output;
pub mod recommendation;
pub mod threshold;

pub use chart::{BarChart, Chart, ChartFormat, SweepChart};
pub use comparison::{Comparison, ProgramTiming};
pub use config::Config;
pub use error::Error as IobenchError;
pub use exit_code::ExitCode;
pub use input::Input;
pub use measurement::{MeasurementRow, MeasurementTable, Metric};
pub use options::{Options, serialization::Format};
pub use output::Output;
pub use recommendation::{Analysis, Recommendation};
pub use threshold::{SeriesPoint, Threshold, optimal_multiplier, pick_optimal_multiplier};

/// Buffer size as a multiple of the page size.
pub type Multiplier = f64;
/// Transfer rate in MB/s.
pub type Throughput = f64;
