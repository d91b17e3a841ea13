//! Line chart rendering with the [`plotters`] bitmap backend.
//!
//! Charts are saved in the format implied by the output file extension (PNG recommended).

use super::chart_spec::ChartSpec;
use super::presenter::{validate_chart, PlotError, Presenter};
use crate::api::settings::PresenterSettings;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

type Result<T> = core::result::Result<T, PlotError>;

/// Draws charts as bitmap images.
///
/// # Headless Compatibility
/// Uses plotters' bitmap backend, so no windowing system is needed.
/// Text rendering still requires a `sans-serif` font to be available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapPresenter {
    settings: PresenterSettings,
}

impl BitmapPresenter {
    /// Creates a presenter; the settings are sanitized first.
    pub fn new(mut settings: PresenterSettings) -> Self {
        settings.sanitize();
        Self { settings }
    }

    /// Image size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.settings.width, self.settings.height)
    }
}

impl Presenter for BitmapPresenter {
    fn present(&self, chart: &ChartSpec, output_path: &Path) -> Result<()> {
        validate_chart(chart)?;
        debug!(
            path = %output_path.display(),
            points = chart.series.len(),
            viewport = %chart.viewport,
            "rendering chart"
        );

        let root = BitMapBackend::new(output_path, self.dimensions());
        let drawing_area = root.into_drawing_area();

        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let viewport = chart.viewport;
        let mut chart_context = ChartBuilder::on(&drawing_area)
            .caption(&chart.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(
                viewport.left..viewport.right,
                viewport.bottom..viewport.top,
            )
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart_context
            .configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", 25))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart_context
            .draw_series(LineSeries::new(chart.series.iter().copied(), &BLUE))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }
}
