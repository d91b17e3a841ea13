use super::chart_spec::ChartSpec;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Renders a [ChartSpec] to an image file.
pub trait Presenter {
    /// Draws `chart` and saves it at `output_path`.
    fn present(&self, chart: &ChartSpec, output_path: &Path) -> Result<(), PlotError>;
}

/// Rejects charts that no backend can draw meaningfully.
pub fn validate_chart(chart: &ChartSpec) -> Result<(), PlotError> {
    if chart.series.is_empty() {
        return Err(PlotError::InvalidData("Series cannot be empty".to_string()));
    }

    if !chart.viewport.is_drawable() {
        return Err(PlotError::InvalidData(format!(
            "Viewport {} must be finite with positive width and height",
            chart.viewport
        )));
    }

    if let Some((x, y)) = chart
        .series
        .iter()
        .find(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(PlotError::InvalidData(format!(
            "Series contains a non-finite value ({x}, {y})"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementation::aggregate::Viewport;

    fn chart(series: Vec<(f64, f64)>, viewport: Viewport) -> ChartSpec {
        ChartSpec {
            series,
            viewport,
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        }
    }

    #[test]
    fn validation() {
        let good = Viewport::new(-1.0, 3.0, 0.0, 1.0);
        assert!(validate_chart(&chart(vec![(0.0, 0.5)], good)).is_ok());

        // Empty series
        let result = validate_chart(&chart(vec![], good));
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Zero height viewport
        let flat = Viewport::new(-1.0, 3.0, 0.0, 0.0);
        let result = validate_chart(&chart(vec![(0.0, 0.0)], flat));
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // NaN in series
        let result = validate_chart(&chart(vec![(0.0, f64::NAN)], good));
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn error_messages_name_the_failing_step() {
        let cases = [
            (PlotError::DrawingArea("a".into()), "Failed to create drawing area: a"),
            (PlotError::ChartConfig("b".into()), "Failed to configure chart: b"),
            (PlotError::Drawing("c".into()), "Failed to draw chart elements: c"),
            (PlotError::InvalidData("d".into()), "Invalid data: d"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }
}
