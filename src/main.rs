//! `iobench-plot` analyzes and charts file I/O benchmark results.

pub(crate) mod args;
pub(crate) mod verbose;

use std::process;

use anyhow::{Context, Result};
use args::{Args, Command, CompareArgs, SweepArgs};
use clap::Parser;
use iobench_plot::{
    Analysis, BarChart, Comparison, ExitCode, Input, MeasurementTable, Output, SweepChart, chart,
};
use verbose::{Verbose, VerboseData};

fn main() -> process::ExitCode {
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            let code = ExitCode::from(&err);
            if code == ExitCode::Success {
                // `--help` and `--version` arrive as clap errors.
                print!("{err}");
            } else if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                eprint!("{clap_err}");
            } else {
                eprintln!("Error: {err:#}");
            }
            code.into()
        }
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;

    match args.command {
        Command::Sweep(sweep) => run_sweep(&sweep),
        Command::Compare(compare) => run_compare(&compare),
    }
}

fn run_sweep(args: &SweepArgs) -> Result<()> {
    let options = args.options()?;
    let input = Input::new(&args.input);
    let source = input.source();

    let table = MeasurementTable::from_reader(input.reader()?)
        .with_context(|| format!("failed to load results table: {source}"))?;

    if args.common.verbose {
        let data = VerboseData::sweep(&source, table.len(), &options);
        Verbose::default().write_verbose_info(&data, options.format())?;
    }

    let analysis = Analysis::new(&table, options.threshold())?;

    let mut output = Output::new(args.common.output.as_deref())?;
    output.write_analysis(&analysis, &options)?;

    if !args.common.no_chart {
        let sweep = SweepChart::new(&table, analysis.recommendation());
        chart::render(&sweep, &args.chart, options.chart_size())
            .with_context(|| format!("failed to write chart: {}", args.chart.display()))?;
        output.write_chart_saved(&args.chart, options.format())?;
    }

    output.flush()
}

fn run_compare(args: &CompareArgs) -> Result<()> {
    let options = args.options()?;

    let (comparison, source) = match &args.input {
        Some(path) => {
            let input = Input::new(path);
            let source = input.source();
            let comparison = Comparison::from_reader(input.reader()?)
                .with_context(|| format!("failed to load timings: {source}"))?;
            (comparison, source)
        }
        None => (Comparison::sample(), "<sample>".to_string()),
    };

    if args.common.verbose {
        let data = VerboseData::compare(&source, comparison.len(), &args.exclude, &options);
        Verbose::default().write_verbose_info(&data, options.format())?;
    }

    let mut output = Output::new(args.common.output.as_deref())?;
    output.write_comparison(&comparison, &options)?;

    if !args.common.no_chart {
        let optimized = comparison.without(&args.exclude);
        let charts = [
            (BarChart::all(&comparison), &args.all_chart),
            (
                BarChart::optimized(&optimized).with_colors_of(&comparison),
                &args.optimized_chart,
            ),
        ];

        for (bars, path) in &charts {
            chart::render(bars, path, options.chart_size())
                .with_context(|| format!("failed to write chart: {}", path.display()))?;
            output.write_chart_saved(path, options.format())?;
        }
    }

    output.flush()
}
