//! Relative frequency histograms.
//!
//! Converts either per-sample bin indices or pre-aggregated per-bin counts
//! into per-bin relative frequencies.

use super::entropy::EntropyEstimate;
use super::viewport::Viewport;
use crate::api::errors::DegenerateInputError;
use crate::api::settings::HistogramSettings;
use crate::implementation::decode::HistogramSeries;
use serde::Serialize;

type Result<T> = core::result::Result<T, DegenerateInputError>;

/// Per-bin counts and relative frequencies of a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramResult {
    /// Number of bins.
    pub nbins: u32,

    /// Number of samples across all bins. Always positive.
    pub total_samples: u64,

    /// Raw count per bin.
    pub counts: Vec<u64>,

    /// `counts[i] / total_samples` per bin; each in `[0, 1]`, summing to 1.
    pub relative_frequencies: Vec<f64>,
}

impl HistogramResult {
    /// Largest number of bins a histogram may have.
    ///
    /// The sample-index header declares `nbins` independently of the file size,
    /// so an 8-byte file could otherwise request billions of bins.
    pub const MAX_BINS: u32 = 1 << 24;

    /// Builds a histogram from decoded records.
    ///
    /// # Errors
    ///
    /// * [DegenerateInputError::TooManyBins] if the series has more than [Self::MAX_BINS] bins.
    /// * [DegenerateInputError::ZeroSamples] if there are no samples to divide by.
    pub fn from_series(series: &HistogramSeries) -> Result<Self> {
        check_bin_count(series.nbins() as usize)?;
        let counts = match series {
            HistogramSeries::SampleIndices { nbins, indices } => {
                let mut counts = vec![0u64; *nbins as usize];
                for &index in indices {
                    counts[index as usize] += 1;
                }
                counts
            }
            HistogramSeries::BinCounts(counts) => counts.iter().map(|&c| c as u64).collect(),
        };

        Self::from_counts(counts)
    }

    /// Builds a histogram from raw per-bin counts.
    pub fn from_counts(counts: Vec<u64>) -> Result<Self> {
        check_bin_count(counts.len())?;
        let nbins = counts.len() as u32;
        let total_samples: u64 = counts.iter().sum();
        if total_samples == 0 {
            return Err(DegenerateInputError::ZeroSamples { nbins });
        }

        let total = total_samples as f64;
        let relative_frequencies = counts.iter().map(|&c| c as f64 / total).collect();

        Ok(Self {
            nbins,
            total_samples,
            counts,
            relative_frequencies,
        })
    }

    /// Largest relative frequency of any bin.
    pub fn max_relative_frequency(&self) -> f64 {
        self.relative_frequencies
            .iter()
            .copied()
            .fold(0.0, f64::max)
    }

    /// `(bin index, relative frequency)` pairs, in bin order.
    pub fn series(&self) -> Vec<(f64, f64)> {
        self.relative_frequencies
            .iter()
            .enumerate()
            .map(|(bin, &freq)| (bin as f64, freq))
            .collect()
    }

    /// Axis bounds for presenting this histogram.
    ///
    /// x spans `[x_left, x_right or nbins]` and y spans `[0, ceiling]`.
    /// Without an explicit `x_right`, the right edge is at least one unit past `x_left`.
    pub fn viewport(&self, settings: &HistogramSettings) -> Viewport {
        let right = settings
            .x_right
            .unwrap_or_else(|| (self.nbins as f64).max(settings.x_left + 1.0));
        let top = settings.y_ceiling.resolve(self.max_relative_frequency());
        Viewport::new(settings.x_left, right, 0.0, top)
    }

    /// Mean bin index, weighted by count.
    pub fn mean(&self) -> f64 {
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| bin as f64 * count as f64)
            .sum();
        weighted / self.total_samples as f64
    }

    /// Unbiased sample variance of the bin index, or [None] for a single sample.
    pub fn variance(&self) -> Option<f64> {
        if self.total_samples < 2 {
            return None;
        }

        let mean = self.mean();
        let sum_of_squares: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| {
                let delta = mean - bin as f64;
                delta * delta * count as f64
            })
            .sum();
        Some(sum_of_squares / (self.total_samples - 1) as f64)
    }

    /// Shannon, collision and min-entropy of the bin distribution.
    pub fn entropy(&self) -> EntropyEstimate {
        EntropyEstimate::from_probabilities(&self.relative_frequencies)
    }

    /// One-line diagnostic summary.
    pub fn summary(&self) -> String {
        format!(
            "Number of bins: {}, number of samples: {}",
            self.nbins, self.total_samples
        )
    }
}

fn check_bin_count(nbins: usize) -> Result<()> {
    if nbins > HistogramResult::MAX_BINS as usize {
        return Err(DegenerateInputError::TooManyBins {
            nbins: u32::try_from(nbins).unwrap_or(u32::MAX),
            max: HistogramResult::MAX_BINS,
        });
    }
    Ok(())
}
