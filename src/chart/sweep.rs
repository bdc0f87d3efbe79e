//! Side-by-side read and write throughput against buffer multiplier.

use core::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{CAPTION_SIZE, Chart, FONT, LABEL_SIZE, chart_error};
use crate::error::Error;
use crate::measurement::{MeasurementTable, Metric};
use crate::recommendation::Recommendation;
use crate::threshold::SeriesPoint;

const X_DESC: &str = "Buffer size multiplier (relative to page size)";

/// A dual-panel sweep chart, read on the left and write on the right.
#[derive(Clone, Copy, Debug)]
pub struct SweepChart<'a> {
    table: &'a MeasurementTable,
    recommendation: Option<&'a Recommendation>,
}

impl<'a> SweepChart<'a> {
    /// Charts `table`, marking each panel's recommended multiplier.
    pub const fn new(table: &'a MeasurementTable, recommendation: &'a Recommendation) -> Self {
        Self {
            table,
            recommendation: Some(recommendation),
        }
    }

    /// Charts `table` without recommendation markers.
    pub const fn unmarked(table: &'a MeasurementTable) -> Self {
        Self {
            table,
            recommendation: None,
        }
    }

    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        metric: Metric,
        color: RGBColor,
    ) -> Result<(), Error> {
        let points = self.table.series(metric);
        let y_desc = format!("{} throughput (MB/s)", capitalized(metric));
        let y_axis = y_range(&points);
        let y_top = y_axis.end;

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("{y_desc} vs buffer size"),
                (FONT, CAPTION_SIZE).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range(&points), y_axis)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(y_desc.as_str())
            .label_style((FONT, LABEL_SIZE))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|point| (point.multiplier, point.value)),
                color.stroke_width(2),
            ))
            .map_err(chart_error)?
            .label(format!("{metric} throughput"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(
                points
                    .iter()
                    .map(|point| Circle::new((point.multiplier, point.value), 4, color.filled())),
            )
            .map_err(chart_error)?;

        if let Some(recommendation) = self.recommendation {
            let multiplier = recommendation.for_metric(metric);

            chart
                .draw_series(LineSeries::new(
                    [(multiplier, 0.0), (multiplier, y_top)],
                    BLACK.mix(0.6).stroke_width(1),
                ))
                .map_err(chart_error)?
                .label(format!("recommended {multiplier}x"))
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.6).stroke_width(1))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, LABEL_SIZE))
            .draw()
            .map_err(chart_error)
    }
}

impl Chart for SweepChart<'_> {
    fn default_size(&self) -> (u32, u32) {
        (1200, 500)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), Error> {
        if self.table.is_empty() {
            return Err(Error::InvalidInput(
                "cannot chart an empty measurement table".to_string(),
            ));
        }

        root.fill(&WHITE).map_err(chart_error)?;

        let panels = root.split_evenly((1, 2));
        self.draw_panel(&panels[0], Metric::Read, BLUE)?;
        self.draw_panel(&panels[1], Metric::Write, RED)
    }
}

fn capitalized(metric: Metric) -> &'static str {
    match metric {
        Metric::Read => "Read",
        Metric::Write => "Write",
    }
}

/// Multiplier axis with a little room on either side.
fn x_range(points: &[SeriesPoint]) -> Range<f64> {
    let (min, max) = points
        .iter()
        .map(|point| point.multiplier)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), x| {
            (min.min(x), max.max(x))
        });
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };

    (min - pad).max(0.0)..max + pad
}

/// Throughput axis from zero with headroom above the peak.
fn y_range(points: &[SeriesPoint]) -> Range<f64> {
    let peak = points
        .iter()
        .map(|point| point.value)
        .fold(0.0, f64::max);

    0.0..if peak > 0.0 { peak * 1.1 } else { 1.0 }
}
