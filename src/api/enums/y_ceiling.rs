use serde::Serialize;

/// Upper bound of the histogram's y axis.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum YCeiling {
    /// A fixed relative frequency, e.g. `0.25` or `1.0`.
    Fixed(f64),

    /// The largest relative frequency observed in the histogram.
    MaxObserved,
}

impl YCeiling {
    /// Ceiling used for pre-aggregated bin counts.
    pub const BIN_COUNT_DEFAULT: YCeiling = YCeiling::Fixed(0.25);

    /// Ceiling used for per-sample bin indices.
    pub const SAMPLE_INDEX_DEFAULT: YCeiling = YCeiling::Fixed(1.0);

    /// Resolves the ceiling against the largest observed relative frequency.
    pub fn resolve(self, max_observed: f64) -> f64 {
        match self {
            YCeiling::Fixed(value) => value,
            YCeiling::MaxObserved => max_observed,
        }
    }
}
