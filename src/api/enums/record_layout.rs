use core::fmt;
use core::str::FromStr;
use serde::Serialize;

/// Record layout of a sample file body.
///
/// The header is identical for every layout, so the bytes alone cannot tell
/// `SampleIndex` and `BinCount` apart. The caller always selects the layout.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordLayout {
    /// One `i32` bin index per observed sample. Header is the number of bins.
    SampleIndex,

    /// One `i32` count per bin. Header is the number of bins.
    BinCount,

    /// One `(f64, f64)` coordinate per record. Header is the number of points.
    PointPair,
}

impl RecordLayout {
    /// Size of a single body record in bytes.
    pub const fn record_size(self) -> usize {
        match self {
            RecordLayout::SampleIndex | RecordLayout::BinCount => 4,
            RecordLayout::PointPair => 16,
        }
    }

    /// The name used on the command line and in reports.
    pub const fn name(self) -> &'static str {
        match self {
            RecordLayout::SampleIndex => "sample-index",
            RecordLayout::BinCount => "bin-count",
            RecordLayout::PointPair => "point-pair",
        }
    }
}

/// The subset of [RecordLayout] that produces a histogram.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistogramLayout {
    /// Per-sample bin indices.
    #[default]
    SampleIndex,

    /// Pre-aggregated per-bin counts.
    BinCount,
}

impl From<HistogramLayout> for RecordLayout {
    fn from(value: HistogramLayout) -> Self {
        match value {
            HistogramLayout::SampleIndex => RecordLayout::SampleIndex,
            HistogramLayout::BinCount => RecordLayout::BinCount,
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HistogramLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordLayout::from(*self).fmt(f)
    }
}

/// Returned when a layout name is not recognised.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Unknown layout '{0}', expected one of: sample-index, bin-count, point-pair")]
pub struct UnknownLayoutError(pub String);

impl FromStr for RecordLayout {
    type Err = UnknownLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sample-index" => Ok(RecordLayout::SampleIndex),
            "bin-count" => Ok(RecordLayout::BinCount),
            "point-pair" => Ok(RecordLayout::PointPair),
            other => Err(UnknownLayoutError(other.to_string())),
        }
    }
}

impl FromStr for HistogramLayout {
    type Err = UnknownLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<RecordLayout>()? {
            RecordLayout::SampleIndex => Ok(HistogramLayout::SampleIndex),
            RecordLayout::BinCount => Ok(HistogramLayout::BinCount),
            RecordLayout::PointPair => Err(UnknownLayoutError(s.to_string())),
        }
    }
}
