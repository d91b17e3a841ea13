//! Bounding boxes and padded viewports for point series.

use super::viewport::Viewport;
use crate::api::enums::PaddingMode;
use crate::api::errors::DegenerateInputError;
use crate::api::settings::PointSettings;
use crate::headers::point::Point;
use crate::implementation::decode::PointSeries;
use core::fmt;
use serde::Serialize;

type Result<T> = core::result::Result<T, DegenerateInputError>;

/// Smallest box containing every point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Computes the bounding box in a single pass, seeded by the first point.
    ///
    /// # Errors
    ///
    /// [DegenerateInputError::EmptyPointSeries] if `points` is empty.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or(DegenerateInputError::EmptyPointSeries)?;

        let mut bounds = BoundingBox {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };

        for point in rest {
            if point.x < bounds.x_min {
                bounds.x_min = point.x;
            }
            if point.x > bounds.x_max {
                bounds.x_max = point.x;
            }
            if point.y < bounds.y_min {
                bounds.y_min = point.y;
            }
            if point.y > bounds.y_max {
                bounds.y_max = point.y;
            }
        }

        Ok(bounds)
    }

    /// True if `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: &Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }

    /// Derives the presentation viewport.
    ///
    /// In [PaddingMode::Padded] each side is pushed out by `padding_fraction` of
    /// the axis range. An axis with zero range is widened to `min_span`,
    /// centered on its single value, in either mode.
    pub fn viewport(&self, settings: &PointSettings) -> Viewport {
        let (left, right) = resolve_axis(self.x_min, self.x_max, settings);
        let (bottom, top) = resolve_axis(self.y_min, self.y_max, settings);
        Viewport::new(left, right, bottom, top)
    }
}

fn resolve_axis(min: f64, max: f64, settings: &PointSettings) -> (f64, f64) {
    if min == max {
        let half = settings.min_span / 2.0;
        return (min - half, max + half);
    }

    match settings.padding {
        PaddingMode::Exact => (min, max),
        PaddingMode::Padded => pad_axis(min, max, settings.padding_fraction),
    }
}

/// Widens `[min, max]` by `fraction` of its range on both sides.
///
/// Falls back to the exact bounds when the padded bounds are not representable.
fn pad_axis(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    // `max - min` overflows for ranges wider than f64::MAX
    let padding = fraction * max - fraction * min;
    let (low, high) = (min - padding, max + padding);
    if low.is_finite() && high.is_finite() {
        (low, high)
    } else {
        (min, max)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

/// A point series together with its bounds and presentation viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSeriesResult {
    pub points: Vec<Point>,
    pub bounds: BoundingBox,
    pub viewport: Viewport,
}

impl PointSeriesResult {
    /// Aggregates a decoded point series.
    ///
    /// # Errors
    ///
    /// [DegenerateInputError::EmptyPointSeries] if the series is empty.
    pub fn from_series(series: PointSeries, settings: &PointSettings) -> Result<Self> {
        let bounds = BoundingBox::from_points(series.points())?;
        let viewport = bounds.viewport(settings);
        Ok(Self {
            points: series.0,
            bounds,
            viewport,
        })
    }

    /// `(x, y)` pairs, in file order.
    pub fn series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Diagnostic summary: count and bounds, then one line per point.
    pub fn summary(&self) -> String {
        let mut summary = format!("Number of points: {} {}", self.points.len(), self.bounds);
        for point in &self.points {
            summary.push_str("\n  ");
            summary.push_str(&point.to_string());
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use rstest::rstest;

    const EPSILON: f64 = 1e-12;

    fn assert_viewport_eq(actual: Viewport, expected: Viewport) {
        assert!((actual.left - expected.left).abs() < EPSILON, "{actual:?}");
        assert!((actual.right - expected.right).abs() < EPSILON, "{actual:?}");
        assert!((actual.bottom - expected.bottom).abs() < EPSILON, "{actual:?}");
        assert!((actual.top - expected.top).abs() < EPSILON, "{actual:?}");
    }

    #[test]
    fn padded_viewport_adds_five_percent() {
        let points = [Point::new(0.0, 0.0), Point::new(2.0, 4.0)];
        let bounds = BoundingBox::from_points(&points).unwrap();
        let viewport = bounds.viewport(&PointSettings::new(PaddingMode::Padded));
        assert_viewport_eq(viewport, Viewport::new(-0.1, 2.1, -0.2, 4.2));
    }

    #[test]
    fn exact_viewport_matches_bounds() {
        let points = [Point::new(-1.0, 3.0), Point::new(5.0, -2.0), Point::new(0.5, 0.5)];
        let bounds = BoundingBox::from_points(&points).unwrap();
        let viewport = bounds.viewport(&PointSettings::new(PaddingMode::Exact));
        assert_eq!(viewport, Viewport::new(-1.0, 5.0, -2.0, 3.0));
    }

    #[rstest]
    #[case::exact(PaddingMode::Exact)]
    #[case::padded(PaddingMode::Padded)]
    fn zero_range_axis_uses_min_span(#[case] padding: PaddingMode) {
        let points = [Point::new(3.0, 1.0), Point::new(3.0, 2.0)];
        let bounds = BoundingBox::from_points(&points).unwrap();
        let mut settings = PointSettings::new(padding);
        settings.min_span = 2.0;

        let viewport = bounds.viewport(&settings);
        assert_eq!((viewport.left, viewport.right), (2.0, 4.0));
        assert!(viewport.is_drawable());
    }

    #[test]
    fn exact_viewport_survives_range_overflow() {
        let points = [Point::new(-1e308, 0.0), Point::new(1e308, 1.0)];
        let bounds = BoundingBox::from_points(&points).unwrap();

        let exact = bounds.viewport(&PointSettings::new(PaddingMode::Exact));
        assert_eq!(exact, Viewport::new(-1e308, 1e308, 0.0, 1.0));

        let padded = bounds.viewport(&PointSettings::new(PaddingMode::Padded));
        assert!(padded.left.is_finite() && padded.right.is_finite());
        assert!(padded.left < -1e308 && padded.right > 1e308);
        assert!((padded.bottom + 0.05).abs() < EPSILON);
        assert!((padded.top - 1.05).abs() < EPSILON);
    }

    #[test]
    fn unrepresentable_padding_falls_back_to_bounds() {
        let points = [Point::new(-f64::MAX, 0.0), Point::new(f64::MAX, 2.0)];
        let bounds = BoundingBox::from_points(&points).unwrap();
        let viewport = bounds.viewport(&PointSettings::new(PaddingMode::Padded));

        assert_eq!((viewport.left, viewport.right), (-f64::MAX, f64::MAX));
        assert_viewport_eq(
            Viewport::new(0.0, 1.0, viewport.bottom, viewport.top),
            Viewport::new(0.0, 1.0, -0.1, 2.1),
        );
    }

    #[test]
    fn single_point_is_a_degenerate_box() {
        let bounds = BoundingBox::from_points(&[Point::new(7.0, -7.0)]).unwrap();
        assert_eq!(bounds.x_min, bounds.x_max);
        assert_eq!(bounds.y_min, bounds.y_max);
        assert!(bounds.viewport(&PointSettings::default()).is_drawable());
    }

    #[test]
    fn empty_series_is_degenerate() {
        assert_eq!(
            BoundingBox::from_points(&[]),
            Err(DegenerateInputError::EmptyPointSeries)
        );
        assert_eq!(
            PointSeriesResult::from_series(PointSeries::default(), &PointSettings::default()),
            Err(DegenerateInputError::EmptyPointSeries)
        );
    }

    #[test]
    fn random_points_are_bounded_and_touch_every_edge() {
        for _ in 0..32 {
            let count: usize = (1..200).fake();
            let points: Vec<Point> = (0..count)
                .map(|_| Point::new((-1e6..1e6).fake(), (-1e6..1e6).fake()))
                .collect();

            let bounds = BoundingBox::from_points(&points).unwrap();
            assert!(points.iter().all(|p| bounds.contains(p)));
            assert!(points.iter().any(|p| p.x == bounds.x_min));
            assert!(points.iter().any(|p| p.x == bounds.x_max));
            assert!(points.iter().any(|p| p.y == bounds.y_min));
            assert!(points.iter().any(|p| p.y == bounds.y_max));
        }
    }

    #[test]
    fn summary_lists_every_point() {
        let series = PointSeries(vec![Point::new(0.0, 0.0), Point::new(2.0, 4.5)]);
        let result = PointSeriesResult::from_series(series, &PointSettings::default()).unwrap();
        assert_eq!(
            result.summary(),
            "Number of points: 2 [0, 2, 0, 4.5]\n  (0, 0)\n  (2, 4.5)"
        );
    }
}
