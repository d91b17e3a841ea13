use crate::api::settings::HistogramSettings;
use crate::implementation::aggregate::{HistogramResult, PointSeriesResult, Viewport};

/// Everything a [Presenter](super::Presenter) needs to draw a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Points connected by the line, in drawing order.
    pub series: Vec<(f64, f64)>,
    /// Axis bounds.
    pub viewport: Viewport,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartSpec {
    /// Chart of relative frequency against bin index.
    pub fn for_histogram(result: &HistogramResult, settings: &HistogramSettings) -> Self {
        let title = settings
            .title
            .clone()
            .unwrap_or_else(|| format!("frequency bins, {} samples", result.total_samples));

        Self {
            series: result.series(),
            viewport: result.viewport(settings),
            title,
            x_label: settings.x_label.clone(),
            y_label: settings.y_label.clone(),
        }
    }

    /// Chart of the points in file order.
    pub fn for_points(result: &PointSeriesResult) -> Self {
        Self {
            series: result.series(),
            viewport: result.viewport,
            title: format!(
                "graph, {} bins, min: {}, max: {}",
                result.points.len(),
                result.bounds.x_min,
                result.bounds.x_max
            ),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::enums::HistogramLayout;
    use crate::api::settings::PointSettings;
    use crate::headers::point::Point;
    use crate::implementation::decode::PointSeries;

    #[test]
    fn histogram_chart_uses_default_labels() {
        let result = HistogramResult::from_counts(vec![1, 2, 1]).unwrap();
        let chart =
            ChartSpec::for_histogram(&result, &HistogramSettings::new(HistogramLayout::BinCount));

        assert_eq!(chart.title, "frequency bins, 4 samples");
        assert_eq!(chart.x_label, "difference");
        assert_eq!(chart.y_label, "relative freq");
        assert_eq!(chart.series, vec![(0.0, 0.25), (1.0, 0.5), (2.0, 0.25)]);
    }

    #[test]
    fn histogram_title_can_be_overridden() {
        let result = HistogramResult::from_counts(vec![1]).unwrap();
        let mut settings = HistogramSettings::default();
        settings.title = Some("jitter".to_string());
        assert_eq!(ChartSpec::for_histogram(&result, &settings).title, "jitter");
    }

    #[test]
    fn point_chart_title_names_x_bounds() {
        let series = PointSeries(vec![Point::new(-1.0, 0.0), Point::new(3.5, 2.0)]);
        let result = PointSeriesResult::from_series(series, &PointSettings::default()).unwrap();
        let chart = ChartSpec::for_points(&result);

        assert_eq!(chart.title, "graph, 2 bins, min: -1, max: 3.5");
        assert_eq!(chart.series, vec![(-1.0, 0.0), (3.5, 2.0)]);
        assert_eq!(chart.viewport, result.viewport);
    }
}
