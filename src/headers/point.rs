use core::fmt;
use derive_new::new;
use serde::Serialize;
use static_assertions::const_assert_eq;

/// A single `(x, y)` record from a point-pair file.
///
/// Stored on disk as two consecutive little-endian `f64` values.
#[derive(new, Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Size of a point record in bytes.
    pub const SIZE_BYTES: usize = 16;

    /// True if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

const_assert_eq!(Point::SIZE_BYTES, core::mem::size_of::<Point>());

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
