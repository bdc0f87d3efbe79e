//! Verbose diagnostics written to stderr.

use anyhow::{Context, Result};
use iobench_plot::{Format, IobenchError, Options, Output};
use serde::Serialize;

/// Handles verbose output formatting of run details.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
}

impl Default for Verbose {
    /// Default verbose logger writes to stderr.
    fn default() -> Self {
        Self {
            output: Output::stderr(),
        }
    }
}

/// Verbose data that can be serialized to JSON, CSV, or text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerboseData<'a> {
    source: &'a str,
    rows: usize,
    format: String,
    threshold: Option<f64>,
    page_size: Option<u64>,
    excluded: Option<&'a [String]>,
    chart_size: Option<String>,
}

impl<'a> VerboseData<'a> {
    /// Details of a sweep run.
    pub(crate) fn sweep(source: &'a str, rows: usize, options: &Options) -> Self {
        Self {
            source,
            rows,
            format: options.format().to_string(),
            threshold: Some(options.threshold().value()),
            page_size: Some(options.page_size()),
            excluded: None,
            chart_size: chart_size(options),
        }
    }

    /// Details of a comparison run.
    pub(crate) fn compare(
        source: &'a str,
        rows: usize,
        excluded: &'a [String],
        options: &Options,
    ) -> Self {
        Self {
            source,
            rows,
            format: options.format().to_string(),
            threshold: None,
            page_size: None,
            excluded: Some(excluded),
            chart_size: chart_size(options),
        }
    }

    /// Get all fields as name-value pairs.
    fn field_pairs(&self) -> Vec<(&str, String)> {
        let none = || "none".to_string();
        let mut pairs = Vec::with_capacity(7);
        pairs.extend_from_slice(&[
            ("source", self.source.to_string()),
            ("rows", self.rows.to_string()),
            ("format", self.format.clone()),
        ]);
        if let Some(threshold) = self.threshold {
            pairs.push(("threshold", threshold.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page-size", page_size.to_string()));
        }
        if let Some(excluded) = self.excluded {
            pairs.push((
                "excluded",
                if excluded.is_empty() {
                    none()
                } else {
                    excluded.join(",")
                },
            ));
        }
        pairs.push(("chart-size", self.chart_size.clone().unwrap_or_else(none)));
        pairs
    }
}

fn chart_size(options: &Options) -> Option<String> {
    options
        .chart_size()
        .map(|(width, height)| format!("{width}x{height}"))
}

impl Verbose {
    /// Writes verbose details in the report format.
    pub(crate) fn write_verbose_info(&mut self, data: &VerboseData<'_>, format: Format) -> Result<()> {
        match format {
            Format::Json => self.write_json(data),
            Format::Csv => self.write_csv(data),
            Format::Text => self.write_text(data),
        }
    }

    /// Write verbose info in JSON format.
    fn write_json(&mut self, data: &VerboseData<'_>) -> Result<()> {
        let json = serde_json::to_string(data).map_err(IobenchError::Json)?;

        self.output
            .write_line(&format!("{json}\n"))
            .context("failed to write JSON output")
    }

    /// Write verbose info in CSV format.
    fn write_csv(&mut self, data: &VerboseData<'_>) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let field_pairs = data.field_pairs();

        writer.write_record(field_pairs.iter().map(|(name, _)| *name))?;
        writer.write_record(field_pairs.iter().map(|(_, value)| value))?;

        let output = String::from_utf8(writer.into_inner()?)
            .context("failed to convert output to UTF-8")?;

        self.output
            .write_line(&output)
            .context("failed to write output")
    }

    /// Write verbose info in text format.
    fn write_text(&mut self, data: &VerboseData<'_>) -> Result<()> {
        data.field_pairs()
            .into_iter()
            .try_for_each(|(field_name, value)| {
                self.output.write_line(&format!("{field_name} {value}\n"))
            })
    }
}
