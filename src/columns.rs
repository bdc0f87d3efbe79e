//! Header resolution and numeric cell parsing shared by the CSV loaders.

use csv::StringRecord;

use crate::error::Error;

/// A required column and the header names it may appear under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColumnSpec {
    name: &'static str,
    aliases: &'static [&'static str],
}

impl ColumnSpec {
    pub(crate) const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    fn matches(&self, header: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase() == header)
    }

    /// Parses the cell at `index` as a number.
    pub(crate) fn parse(&self, record: &StringRecord, index: usize, row: usize) -> Result<f64, Error> {
        let raw = record.get(index).unwrap_or_default();

        raw.parse().map_err(|_| Error::InvalidValue {
            row,
            column: self.name.to_string(),
            value: raw.to_string(),
        })
    }

    /// Reads a text cell, empty when the record is short.
    pub(crate) fn text<'r>(&self, record: &'r StringRecord, index: usize) -> &'r str {
        record.get(index).unwrap_or_default()
    }
}

/// Normalized header names of a CSV table.
#[derive(Clone, Debug)]
pub(crate) struct Header {
    original: Vec<String>,
    normalized: Vec<String>,
}

impl Header {
    pub(crate) fn new(record: &StringRecord) -> Self {
        let original: Vec<String> = record.iter().map(str::to_string).collect();
        let normalized = original
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        Self {
            original,
            normalized,
        }
    }

    /// Finds the index of the first header matching `spec`.
    pub(crate) fn position(&self, spec: &ColumnSpec) -> Result<usize, Error> {
        self.normalized
            .iter()
            .position(|name| spec.matches(name))
            .ok_or_else(|| Error::MissingColumn {
                column: spec.name.to_string(),
                available: self.original.clone(),
            })
    }
}
