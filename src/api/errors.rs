use crate::implementation::present::PlotError;
use core::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Input bytes do not match the expected record layout.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum FormatError {
    #[error("Input is {0} bytes, too short for the 4-byte count header")]
    MissingHeader(usize),

    #[error("Header declares a negative record count ({0})")]
    NegativeCount(i32),

    #[error("Body of {body_len} bytes is not a whole number of {record_size}-byte records")]
    PartialRecord { body_len: usize, record_size: usize },

    #[error("Header declares {declared} records ({expected_bytes} bytes) but only {actual_bytes} bytes follow")]
    Truncated {
        declared: usize,
        expected_bytes: usize,
        actual_bytes: usize,
    },

    #[error("Header declares {declared} records ({expected_bytes} bytes) but {actual_bytes} bytes follow")]
    TrailingBytes {
        declared: usize,
        expected_bytes: usize,
        actual_bytes: usize,
    },

    #[error("Sample {position} names bin {index}, outside [0, {nbins})")]
    IndexOutOfRange {
        position: usize,
        index: i32,
        nbins: u32,
    },

    #[error("Bin {bin} has a negative count ({count})")]
    NegativeBinCount { bin: usize, count: i32 },

    #[error("Point {position} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { position: usize, x: f64, y: f64 },
}

/// Input is well formed but the requested aggregation is undefined for it.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DegenerateInputError {
    #[error("Histogram with {nbins} bins holds zero samples; relative frequencies are undefined")]
    ZeroSamples { nbins: u32 },

    #[error("Point series is empty; bounding box is undefined")]
    EmptyPointSeries,

    #[error("Histogram declares {nbins} bins, more than the supported maximum of {max}")]
    TooManyBins { nbins: u32, max: u32 },
}

/// The pipeline stage in which a [GraphError] occurred.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stage {
    Decode,
    Aggregate,
    Present,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Decode => "decode",
            Stage::Aggregate => "aggregate",
            Stage::Present => "present",
        })
    }
}

/// Errors that abort a single decode → aggregate → present run.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read input file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input: {0}")]
    Format(#[from] FormatError),

    #[error("Degenerate input: {0}")]
    DegenerateInput(#[from] DegenerateInputError),

    #[error("Failed to render chart: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl GraphError {
    /// Returns the stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            GraphError::Io { .. } | GraphError::Format(_) => Stage::Decode,
            GraphError::DegenerateInput(_) => Stage::Aggregate,
            GraphError::Plot(_) | GraphError::Write { .. } | GraphError::Report(_) => {
                Stage::Present
            }
        }
    }
}
