use crate::api::enums::*;

/// Controls how a histogram is decoded and framed for presentation.
///
/// # Remarks
///
/// The y ceiling and right x bound used to be dataset specific literals.
/// Both are plain settings here; `None` for [`Self::x_right`] means "use `nbins`".
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSettings {
    /// Which histogram layout the input file uses.
    pub layout: HistogramLayout,

    /// Upper bound of the y axis.
    pub y_ceiling: YCeiling,

    /// Left bound of the x axis.
    pub x_left: f64,

    /// Right bound of the x axis. Defaults to the number of bins.
    pub x_right: Option<f64>,

    /// Chart title. `None` uses `"frequency bins, {samples} samples"`.
    pub title: Option<String>,

    /// Label for the x axis.
    pub x_label: String,

    /// Label for the y axis.
    pub y_label: String,
}

impl HistogramSettings {
    /// Creates a new `HistogramSettings` with default values for the given layout.
    pub fn new(layout: HistogramLayout) -> Self {
        let y_ceiling = match layout {
            HistogramLayout::SampleIndex => YCeiling::SAMPLE_INDEX_DEFAULT,
            HistogramLayout::BinCount => YCeiling::BIN_COUNT_DEFAULT,
        };

        HistogramSettings {
            layout,
            y_ceiling,
            x_left: -1.0,
            x_right: None,
            title: None,
            x_label: "difference".to_string(),
            y_label: "relative freq".to_string(),
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range or undefined.
    pub fn sanitize(&mut self) {
        if let YCeiling::Fixed(value) = self.y_ceiling {
            if !value.is_finite() || value <= 0.0 {
                self.y_ceiling = YCeiling::MaxObserved;
            } else {
                self.y_ceiling = YCeiling::Fixed(value.min(1.0));
            }
        }

        if !self.x_left.is_finite() {
            self.x_left = -1.0;
        }

        if let Some(right) = self.x_right {
            if !right.is_finite() || right <= self.x_left {
                self.x_right = None;
            }
        }
    }
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self::new(HistogramLayout::default())
    }
}
