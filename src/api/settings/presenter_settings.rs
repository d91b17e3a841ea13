/// The minimum image dimension (in pixels) that the user is allowed to specify
pub const MIN_DIMENSION: u32 = 200;

/// The maximum image dimension (in pixels) that the user is allowed to specify
pub const MAX_DIMENSION: u32 = 8192;

/// Controls the image produced by the bitmap presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterSettings {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,
}

impl PresenterSettings {
    /// Creates a new `PresenterSettings` with the default 1200x800 resolution.
    pub fn new() -> Self {
        PresenterSettings {
            width: 1200,
            height: 800,
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range.
    pub fn sanitize(&mut self) {
        self.width = self.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        self.height = self.height.clamp(MIN_DIMENSION, MAX_DIMENSION);
    }
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(value, expected,
        case(1200, 1200),              // Valid, unchanged
        case(0, MIN_DIMENSION),        // Zero, adjusted to min
        case(u32::MAX, MAX_DIMENSION)  // Max u32 value, clamped to max
    )]
    fn dimensions_are_clamped(value: u32, expected: u32) {
        let mut settings = PresenterSettings::new();
        settings.width = value;
        settings.height = value;
        settings.sanitize();
        assert_eq!(settings.width, expected);
        assert_eq!(settings.height, expected);
    }
}
