use crate::api::enums::*;

/// The minimum padding fraction that the user is allowed to specify
pub const MIN_PADDING_FRACTION: f64 = 0.0;

/// The maximum padding fraction that the user is allowed to specify
pub const MAX_PADDING_FRACTION: f64 = 1.0;

/// Controls how the viewport of a point series is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSettings {
    /// Exact bounds or padded bounds.
    pub padding: PaddingMode,

    /// Fraction of the axis range added on each side in [PaddingMode::Padded].
    ///
    /// Range is 0.0 to 1.0.
    pub padding_fraction: f64,

    /// Width given to an axis whose points all share one value.
    ///
    /// The viewport is centered on that value. Must be positive.
    pub min_span: f64,
}

impl PointSettings {
    /// Creates a new `PointSettings` with default values.
    pub fn new(padding: PaddingMode) -> Self {
        PointSettings {
            padding,
            padding_fraction: 0.05,
            min_span: 1.0,
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range or undefined.
    pub fn sanitize(&mut self) {
        if self.padding_fraction.is_nan() {
            self.padding_fraction = 0.05;
        }
        self.padding_fraction = self
            .padding_fraction
            .clamp(MIN_PADDING_FRACTION, MAX_PADDING_FRACTION);

        if !self.min_span.is_finite() || self.min_span <= 0.0 {
            self.min_span = 1.0;
        }
    }
}

impl Default for PointSettings {
    fn default() -> Self {
        Self::new(PaddingMode::default())
    }
}
