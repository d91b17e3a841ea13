//! ASCII tables of histogram bins using the [`tabled`] crate.

use crate::implementation::aggregate::HistogramResult;
use tabled::{Table, Tabled};

/// Represents a single histogram bin with its count and relative frequency
#[derive(Debug, Clone, Tabled)]
pub struct BinEntry {
    /// Bin index
    #[tabled(rename = "Bin")]
    pub bin: u32,
    /// Number of samples in this bin
    #[tabled(rename = "Count")]
    pub count: u64,
    /// Relative frequency of this bin, formatted as a percentage
    #[tabled(rename = "Relative Frequency")]
    pub percentage: String,
}

impl BinEntry {
    /// Creates a new bin entry with formatted percentage
    pub fn new(bin: u32, count: u64, relative_frequency: f64) -> Self {
        Self {
            bin,
            count,
            percentage: format!("{:.2}%", relative_frequency * 100.0),
        }
    }
}

/// Lists every bin of the histogram; empty bins are skipped when `skip_empty` is set.
pub fn bin_entries(result: &HistogramResult, skip_empty: bool) -> Vec<BinEntry> {
    result
        .counts
        .iter()
        .zip(&result.relative_frequencies)
        .enumerate()
        .filter(|(_, (count, _))| !skip_empty || **count > 0)
        .map(|(bin, (&count, &freq))| BinEntry::new(bin as u32, count, freq))
        .collect()
}

/// Formats the histogram as an ASCII table followed by entropy and moment statistics.
///
/// # Arguments
/// * `result` - The histogram to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_bin_table(result: &HistogramResult, title: Option<&str>) -> String {
    let entries = bin_entries(result, true);
    let table = Table::new(&entries).to_string();
    let entropy = result.entropy();
    let variance = result
        .variance()
        .map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"));

    let statistics = format!(
        "Shannon entropy: {:.4} bits\nCollision entropy: {:.4} bits\nMin-entropy: {:.4} bits\n\
         Mean bin: {:.4}, variance: {}",
        entropy.shannon,
        entropy.collision,
        entropy.min_entropy,
        result.mean(),
        variance
    );

    match title {
        Some(title) => format!(
            "{}\n{}\n{}\n\n{}",
            title,
            "=".repeat(title.len()),
            table,
            statistics
        ),
        None => format!("{}\n\n{}", table, statistics),
    }
}
