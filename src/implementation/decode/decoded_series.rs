use crate::api::enums::RecordLayout;
use crate::headers::point::Point;

/// Records decoded from a histogram file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistogramSeries {
    /// One bin index per sample; every index is in `[0, nbins)`.
    SampleIndices { nbins: u32, indices: Vec<u32> },

    /// One count per bin; the number of bins is `counts.len()`.
    BinCounts(Vec<u32>),
}

impl HistogramSeries {
    /// Number of bins in the histogram.
    pub fn nbins(&self) -> u32 {
        match self {
            HistogramSeries::SampleIndices { nbins, .. } => *nbins,
            HistogramSeries::BinCounts(counts) => counts.len() as u32,
        }
    }

    /// Number of decoded records.
    pub fn len(&self) -> usize {
        match self {
            HistogramSeries::SampleIndices { indices, .. } => indices.len(),
            HistogramSeries::BinCounts(counts) => counts.len(),
        }
    }

    /// True if no records were decoded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered `(x, y)` records decoded from a point-pair file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSeries(pub Vec<Point>);

impl PointSeries {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The in-memory result of decoding a sample file with a caller-selected layout.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSeries {
    Histogram(HistogramSeries),
    Points(PointSeries),
}

impl DecodedSeries {
    /// The layout these records were decoded with.
    pub fn layout(&self) -> RecordLayout {
        match self {
            DecodedSeries::Histogram(HistogramSeries::SampleIndices { .. }) => {
                RecordLayout::SampleIndex
            }
            DecodedSeries::Histogram(HistogramSeries::BinCounts(_)) => RecordLayout::BinCount,
            DecodedSeries::Points(_) => RecordLayout::PointPair,
        }
    }

    /// Number of decoded records.
    pub fn len(&self) -> usize {
        match self {
            DecodedSeries::Histogram(series) => series.len(),
            DecodedSeries::Points(series) => series.len(),
        }
    }

    /// True if no records were decoded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
