//! Command-line argument parsing.

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use iobench_plot::{ChartFormat, Format, Options, Threshold};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Analyze a buffer-size sweep and chart read/write throughput.
    Sweep(SweepArgs),
    /// Chart mean execution times of cat implementations.
    Compare(CompareArgs),
}

/// Flags shared by every subcommand.
#[derive(Debug, ClapArgs)]
pub(crate) struct CommonArgs {
    /// Report format.
    #[arg(short, long, default_value_t, value_enum, value_name = "FORMAT")]
    pub(crate) format: Format,

    /// Write the report to a file rather than stdout.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Skip writing charts.
    #[arg(long)]
    pub(crate) no_chart: bool,

    /// Chart width in pixels.
    #[arg(
        long,
        value_name = "PIXELS",
        requires = "height",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub(crate) width: Option<u32>,

    /// Chart height in pixels.
    #[arg(
        long,
        value_name = "PIXELS",
        requires = "width",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub(crate) height: Option<u32>,

    /// Print verbose details to stderr.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, ClapArgs)]
pub(crate) struct SweepArgs {
    /// Results table to analyze, or "-" for stdin.
    #[arg(default_value = "buffer_test_results.txt", value_name = "PATH")]
    pub(crate) input: PathBuf,

    /// Improvement below which a larger buffer isn't worth it, as a fraction.
    #[arg(short, long, value_name = "FRACTION", allow_negative_numbers = true)]
    pub(crate) threshold: Option<f64>,

    /// Page size in bytes that multipliers are relative to.
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) page_size: Option<u64>,

    /// Chart output path (.svg, or .png with the `png` feature).
    #[arg(short, long, default_value = "buffer_performance.svg", value_name = "PATH")]
    pub(crate) chart: PathBuf,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

#[derive(Debug, ClapArgs)]
pub(crate) struct CompareArgs {
    /// Timings CSV with `program` and `time_ms` columns; built-in sample data if omitted.
    #[arg(value_name = "PATH")]
    pub(crate) input: Option<PathBuf>,

    /// Programs left out of the optimized chart, comma-delimited.
    #[arg(
        short = 'x',
        long,
        value_delimiter = ',',
        default_value = "mycat1",
        value_name = "PROGRAMS"
    )]
    pub(crate) exclude: Vec<String>,

    /// Chart output path for every program.
    #[arg(long, default_value = "mycat_performance_all.svg", value_name = "PATH")]
    pub(crate) all_chart: PathBuf,

    /// Chart output path for the optimized subset.
    #[arg(long, default_value = "mycat_performance_optimized.svg", value_name = "PATH")]
    pub(crate) optimized_chart: PathBuf,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl CommonArgs {
    /// Rejects chart paths no backend can write, unless charts are skipped.
    fn check_charts(&self, paths: &[&Path]) -> Result<()> {
        if !self.no_chart {
            for path in paths {
                ChartFormat::from_path(path)?;
            }
        }

        Ok(())
    }

    /// Applies shared flags on top of `options`.
    fn apply(&self, options: Options) -> Options {
        let options = options.with_format(self.format);

        match (self.width, self.height) {
            (Some(width), Some(height)) => options.with_chart_size((width, height)),
            _ => options,
        }
    }
}

impl SweepArgs {
    /// Builds options from environment defaults overridden by flags.
    ///
    /// Chart paths are checked here so a bad extension fails before any report
    /// is written.
    pub(crate) fn options(&self) -> Result<Options> {
        self.common.check_charts(&[self.chart.as_path()])?;
        let mut options = self.common.apply(Options::from_env());

        if let Some(threshold) = self.threshold {
            options = options.with_threshold(Threshold::new(threshold)?);
        }
        if let Some(page_size) = self.page_size {
            options = options.with_page_size(page_size);
        }

        Ok(options)
    }
}

impl CompareArgs {
    pub(crate) fn options(&self) -> Result<Options> {
        self.common
            .check_charts(&[self.all_chart.as_path(), self.optimized_chart.as_path()])?;

        Ok(self.common.apply(Options::from_env()))
    }
}
