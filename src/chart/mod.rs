//! Chart rendering to image files.
//!
//! Each chart implements [`Chart`] by drawing onto a `plotters` drawing area of
//! any backend. [`render`] picks the backend from the output path's extension:
//!
//! - `.svg`: always available
//! - `.png`: requires the `png` cargo feature, which pulls in a TTF renderer
//!
//! # Examples
//!
//! ```no_run
//! use iobench_plot::chart::{self, SweepChart};
//! use iobench_plot::{Analysis, MeasurementRow, MeasurementTable, Threshold};
//!
//! # fn example() -> anyhow::Result<()> {
//! let table = MeasurementTable::from(vec![
//!     MeasurementRow::new(1.0, 900.0, 700.0),
//!     MeasurementRow::new(2.0, 1400.0, 1100.0),
//! ]);
//! let analysis = Analysis::new(&table, Threshold::default())?;
//! let sweep = SweepChart::new(&table, analysis.recommendation());
//! chart::render(&sweep, "buffer_performance.svg", None)?;
//! # Ok(())
//! # }
//! ```

pub mod bars;
pub mod sweep;

use core::fmt::{self, Display, Formatter};
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::Error;

pub use bars::BarChart;
pub use sweep::SweepChart;

/// Caption font size.
pub(crate) const CAPTION_SIZE: u32 = 24;
/// Axis label font size.
pub(crate) const LABEL_SIZE: u32 = 14;
pub(crate) const FONT: &str = "sans-serif";

/// Something that can be drawn onto a drawing area of any backend.
pub trait Chart {
    /// Pixel size used when the caller doesn't choose one.
    fn default_size(&self) -> (u32, u32);

    /// Draws the chart, filling `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Chart`] if the backend fails, or
    /// [`Error::InvalidInput`] if there is nothing to draw.
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), Error>;
}

/// Image formats charts can be written as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    /// Picks the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChartFormat`] for any other extension.
    ///
    /// ```
    /// use iobench_plot::chart::ChartFormat;
    ///
    /// assert_eq!(ChartFormat::from_path("plot.SVG").unwrap(), ChartFormat::Svg);
    /// assert_eq!(ChartFormat::from_path("plot.png").unwrap(), ChartFormat::Png);
    /// assert!(ChartFormat::from_path("plot.pdf").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => Err(Error::UnsupportedChartFormat(path.display().to_string())),
        }
    }
}

impl Display for ChartFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Png => write!(f, "png"),
        }
    }
}

/// Converts a backend error into [`Error::Chart`].
pub(crate) fn chart_error(err: impl Display) -> Error {
    Error::Chart(err.to_string())
}

/// Renders `chart` to `path` at `size`, or the chart's default size.
///
/// # Errors
///
/// - [`Error::UnsupportedChartFormat`] if the extension isn't `svg` or `png`
/// - [`Error::Chart`] if drawing or writing the file fails, or if PNG output was
///   requested without the `png` feature
/// - [`Error::InvalidInput`] if the chart has no data
pub fn render<C, P>(chart: &C, path: P, size: Option<(u32, u32)>) -> Result<(), Error>
where
    C: Chart,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let size = size.unwrap_or_else(|| chart.default_size());

    match ChartFormat::from_path(path)? {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            chart.draw(&root)?;
            root.present().map_err(chart_error)
        }
        ChartFormat::Png => render_png(chart, path, size),
    }
}

#[cfg(feature = "png")]
fn render_png<C: Chart>(chart: &C, path: &Path, size: (u32, u32)) -> Result<(), Error> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    chart.draw(&root)?;
    root.present().map_err(chart_error)
}

#[cfg(not(feature = "png"))]
fn render_png<C: Chart>(_chart: &C, path: &Path, _size: (u32, u32)) -> Result<(), Error> {
    Err(Error::Chart(format!(
        "PNG output requires the `png` feature: {}",
        path.display()
    )))
}
