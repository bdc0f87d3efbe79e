//! Write trait abstractions for stdout and file reports.

use crate::Multiplier;
use crate::comparison::{Comparison, ProgramTiming};
use crate::error::Error;
use crate::measurement::MeasurementRow;
use crate::options::Options;
use crate::options::serialization::Format;
use crate::recommendation::{Analysis, Recommendation};
use crate::threshold::Threshold;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, ErrorKind::BrokenPipe, LineWriter, Write};
use std::path::Path;

/// `Writer` dynamic dispatches the `Write` trait.
pub type Writer = Box<dyn Write>;

/// `Output` writes to either a file or stream like stdout or stderr.
pub struct Output {
    writer: Writer,
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &"<dyn Write>")
            .finish()
    }
}

impl Default for Output {
    /// Default output is stdout
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Sweep report as serialized to JSON and CSV.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepReport<'a> {
    peak_read: &'a MeasurementRow,
    peak_write: &'a MeasurementRow,
    recommendation: &'a Recommendation,
    threshold: Threshold,
    page_size: u64,
    buffer_bytes: u64,
}

impl<'a> SweepReport<'a> {
    fn new(analysis: &'a Analysis, page_size: u64) -> Self {
        let recommendation = analysis.recommendation();

        Self {
            peak_read: analysis.peak_read(),
            peak_write: analysis.peak_write(),
            recommendation,
            threshold: analysis.threshold(),
            page_size,
            buffer_bytes: buffer_bytes(recommendation.combined(), page_size),
        }
    }

    /// Get all fields as name-value pairs.
    fn field_pairs(&self) -> [(&'static str, String); 9] {
        [
            ("peak_read_multiplier", self.peak_read.multiplier.to_string()),
            ("peak_read_mbs", self.peak_read.read_mbs.to_string()),
            ("peak_write_multiplier", self.peak_write.multiplier.to_string()),
            ("peak_write_mbs", self.peak_write.write_mbs.to_string()),
            ("recommended_read", self.recommendation.read().to_string()),
            ("recommended_write", self.recommendation.write().to_string()),
            ("recommended", self.recommendation.combined().to_string()),
            ("threshold", self.threshold.value().to_string()),
            ("buffer_bytes", self.buffer_bytes.to_string()),
        ]
    }
}

/// Comparison report as serialized to JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonReport<'a> {
    timings: &'a [ProgramTiming],
    fastest: Option<&'a ProgramTiming>,
}

/// Buffer size in bytes for a multiplier of the page size.
///
/// ```
/// use iobench_plot::output::buffer_bytes;
///
/// assert_eq!(buffer_bytes(8.0, 4096), 32_768);
/// ```
pub fn buffer_bytes(multiplier: Multiplier, page_size: u64) -> u64 {
    (multiplier * page_size as f64).round() as u64
}

impl Output {
    /// Creates an `Output` from an optional path, choosing between file or stdout.
    pub fn new(output: Option<&Path>) -> Result<Self> {
        match output {
            Some(path) if path == Path::new("-") => Ok(Self::stdout()),
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Creates an `Output` that writes to a file with error context.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;

        Ok(Self::from_writer(LineWriter::new(file)))
    }

    /// Creates an `Output` that writes to stdout.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout().lock())
    }

    /// Creates an `Output` that writes to stderr.
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr().lock())
    }

    /// Creates an `Output` from a writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Writes a line to the writer, handling `BrokenPipe` errors gracefully.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        Self::handle_broken_pipe(self.writer.write_all(line.as_bytes()))
    }

    /// Flushes the writer, ensuring all output is written.
    pub fn flush(&mut self) -> Result<()> {
        Self::handle_broken_pipe(self.writer.flush())
    }

    /// Writes a sweep analysis in the format chosen in `options`.
    pub fn write_analysis(&mut self, analysis: &Analysis, options: &Options) -> Result<()> {
        let report = SweepReport::new(analysis, options.page_size());

        match options.format() {
            Format::Text => {
                let recommendation = report.recommendation;
                self.write_line(&format!(
                    "peak read: {}x page size, {} MB/s\n",
                    report.peak_read.multiplier, report.peak_read.read_mbs
                ))?;
                self.write_line(&format!(
                    "peak write: {}x page size, {} MB/s\n",
                    report.peak_write.multiplier, report.peak_write.write_mbs
                ))?;
                self.write_line(&format!(
                    "recommended multiplier (read): {}x\n",
                    recommendation.read()
                ))?;
                self.write_line(&format!(
                    "recommended multiplier (write): {}x\n",
                    recommendation.write()
                ))?;
                self.write_line(&format!(
                    "recommended multiplier: {}x ({} bytes)\n",
                    recommendation.combined(),
                    report.buffer_bytes
                ))?;
            }
            Format::Json => {
                let json = serde_json::to_string(&report).map_err(Error::Json)?;
                self.write_line(&format!("{json}\n"))?;
            }
            Format::Csv => {
                let pairs = report.field_pairs();
                let mut wtr = csv::Writer::from_writer(Vec::new());
                wtr.write_record(pairs.iter().map(|(name, _)| *name))
                    .map_err(Error::Csv)?;
                wtr.write_record(pairs.iter().map(|(_, value)| value))
                    .map_err(Error::Csv)?;
                self.write_csv(wtr)?;
            }
        }

        self.flush()
    }

    /// Writes program timings and the fastest program in the format chosen in `options`.
    pub fn write_comparison(&mut self, comparison: &Comparison, options: &Options) -> Result<()> {
        match options.format() {
            Format::Text => {
                for timing in comparison {
                    self.write_line(&format!("{}: {:.0} ms\n", timing.program, timing.mean_ms))?;
                }
                if let Some(fastest) = comparison.fastest() {
                    self.write_line(&format!(
                        "fastest: {} ({:.0} ms)\n",
                        fastest.program, fastest.mean_ms
                    ))?;
                }
            }
            Format::Json => {
                let report = ComparisonReport {
                    timings: comparison.timings(),
                    fastest: comparison.fastest(),
                };
                let json = serde_json::to_string(&report).map_err(Error::Json)?;
                self.write_line(&format!("{json}\n"))?;
            }
            Format::Csv => {
                let mut wtr = csv::Writer::from_writer(Vec::new());
                wtr.write_record(["program", "time_ms"]).map_err(Error::Csv)?;
                for timing in comparison {
                    wtr.write_record([timing.program.as_str(), &timing.mean_ms.to_string()])
                        .map_err(Error::Csv)?;
                }
                self.write_csv(wtr)?;
            }
        }

        self.flush()
    }

    /// Announces a written chart. Only text reports mention charts, keeping
    /// JSON and CSV output machine-readable.
    pub fn write_chart_saved(&mut self, path: &Path, format: Format) -> Result<()> {
        if format.is_text() {
            self.write_line(&format!("chart saved: {}\n", path.display()))?;
        }

        Ok(())
    }

    /// Writes the contents of an in-memory CSV writer.
    fn write_csv(&mut self, wtr: csv::Writer<Vec<u8>>) -> Result<()> {
        let bytes = wtr
            .into_inner()
            .context("failed to finish CSV output")?;
        let csv_data =
            String::from_utf8(bytes).context("failed to convert CSV output to UTF-8 string")?;

        self.write_line(&csv_data)
    }

    /// Processes the result of a write, handling `BrokenPipe` errors gracefully.
    fn handle_broken_pipe(result: io::Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                BrokenPipe => Ok(()),
                _ => Err(err.into()),
            },
        }
    }
}
