//! Annotated bar chart of program execution times.

use core::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{CAPTION_SIZE, Chart, FONT, LABEL_SIZE, chart_error};
use crate::comparison::Comparison;
use crate::error::Error;

/// Bar colors, cycled in program order.
pub const PALETTE: [RGBColor; 7] = [
    RGBColor(135, 206, 235), // skyblue
    RGBColor(250, 128, 114), // salmon
    RGBColor(144, 238, 144), // lightgreen
    RGBColor(255, 215, 0),   // gold
    RGBColor(240, 128, 128), // lightcoral
    RGBColor(147, 112, 219), // mediumpurple
    RGBColor(32, 178, 170),  // lightseagreen
];

/// One bar per program, each labeled with its rounded time.
#[derive(Clone, Debug)]
pub struct BarChart<'a> {
    comparison: &'a Comparison,
    title: String,
    palette: Vec<RGBColor>,
    /// Label offset above each bar as a fraction of the tallest bar.
    label_offset: f64,
    size: (u32, u32),
}

impl<'a> BarChart<'a> {
    pub fn new(comparison: &'a Comparison, title: impl Into<String>) -> Self {
        Self {
            comparison,
            title: title.into(),
            palette: PALETTE.to_vec(),
            label_offset: 0.05,
            size: (1200, 700),
        }
    }

    /// Chart of every program.
    pub fn all(comparison: &'a Comparison) -> Self {
        Self::new(
            comparison,
            "Performance Comparison of cat Implementations (All)",
        )
    }

    /// Chart of the optimized subset, with tighter labels and a smaller canvas.
    pub fn optimized(comparison: &'a Comparison) -> Self {
        Self::new(
            comparison,
            "Performance Comparison of cat Implementations (Optimized Versions)",
        )
        .with_label_offset(0.02)
        .with_size((1000, 600))
    }

    pub fn with_palette(mut self, palette: Vec<RGBColor>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Colors each bar the way its program is colored in `full`, so a subset
    /// keeps the colors of the chart it was taken from.
    pub fn with_colors_of(mut self, full: &Comparison) -> Self {
        let palette = self
            .comparison
            .timings()
            .iter()
            .enumerate()
            .map(|(index, timing)| {
                let slot = full
                    .timings()
                    .iter()
                    .position(|other| other.program == timing.program)
                    .unwrap_or(index);
                self.bar_color(slot)
            })
            .collect();

        self.palette = palette;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Segment keys of the x axis, one per bar.
    pub fn segments(&self) -> Range<usize> {
        0..self.comparison.len().saturating_sub(1)
    }

    /// Fill color of the bar at `index`.
    pub fn bar_color(&self, index: usize) -> RGBColor {
        if self.palette.is_empty() {
            PALETTE[index % PALETTE.len()]
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}

impl Chart for BarChart<'_> {
    fn default_size(&self) -> (u32, u32) {
        self.size
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), Error> {
        let timings = self.comparison.timings();
        let max = self
            .comparison
            .max_ms()
            .ok_or_else(|| Error::InvalidInput("no program timings to chart".to_string()))?;
        let offset = self.label_offset * max;
        // Room for the value labels above the tallest bar.
        let top = if max > 0.0 { max + offset * 3.0 } else { 1.0 };

        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(self.title.as_str(), (FONT, CAPTION_SIZE).into_font())
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(self.segments().into_segmented(), 0.0..top)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(BLACK.mix(0.1))
            .y_desc("Mean Execution Time (ms)")
            .x_labels(timings.len())
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => timings
                    .get(*index)
                    .map(|timing| timing.program.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .label_style((FONT, LABEL_SIZE))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(timings.iter().enumerate().map(|(index, timing)| {
                let right = if index + 1 < timings.len() {
                    SegmentValue::Exact(index + 1)
                } else {
                    SegmentValue::Last
                };
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(index), 0.0), (right, timing.mean_ms)],
                    self.bar_color(index).filled(),
                );
                bar.set_margin(0, 0, 8, 8);
                bar
            }))
            .map_err(chart_error)?;

        let label_style = TextStyle::from((FONT, LABEL_SIZE).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart
            .draw_series(timings.iter().enumerate().map(|(index, timing)| {
                Text::new(
                    format!("{:.0}", timing.mean_ms),
                    (SegmentValue::CenterOf(index), timing.mean_ms + offset),
                    label_style.clone(),
                )
            }))
            .map_err(chart_error)?;

        Ok(())
    }
}
