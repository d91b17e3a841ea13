//! Entry points running a full read → decode → aggregate → present pass.
//!
//! Every stage runs to completion before the next starts. The input file is
//! closed before aggregation begins. There is no shared or global state; each
//! call is independent.

use crate::api::enums::HistogramLayout;
use crate::api::errors::GraphError;
use crate::api::settings::{HistogramSettings, PointSettings};
use crate::implementation::aggregate::{EntropyEstimate, HistogramResult, PointSeriesResult};
use crate::implementation::decode::{decode_bin_counts, decode_point_pairs, decode_sample_indices};
use crate::implementation::present::{ChartSpec, Presenter};
use crate::utilities::io::read_file::read_sample_file;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type Result<T> = core::result::Result<T, GraphError>;

/// Which chart to produce, with its settings.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphKind {
    Histogram(HistogramSettings),
    Points(PointSettings),
}

/// A single invocation: read `input`, render to `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: GraphKind,
}

/// The aggregate produced by a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GraphReport {
    Histogram {
        layout: HistogramLayout,
        histogram: HistogramResult,
        entropy: EntropyEstimate,
    },
    Points(PointSeriesResult),
}

impl GraphReport {
    /// Diagnostic summary, as printed to stdout by the command line tool.
    pub fn summary(&self) -> String {
        match self {
            GraphReport::Histogram { histogram, .. } => histogram.summary(),
            GraphReport::Points(points) => points.summary(),
        }
    }
}

/// Runs the pipeline described by `request`.
pub fn run(request: &GraphRequest, presenter: &dyn Presenter) -> Result<GraphReport> {
    match &request.kind {
        GraphKind::Histogram(settings) => {
            let histogram = run_histogram(&request.input, &request.output, settings, presenter)?;
            let entropy = histogram.entropy();
            Ok(GraphReport::Histogram {
                layout: settings.layout,
                histogram,
                entropy,
            })
        }
        GraphKind::Points(settings) => {
            run_points(&request.input, &request.output, settings, presenter).map(GraphReport::Points)
        }
    }
}

/// Reads a histogram file, computes relative frequencies and renders them.
///
/// # Arguments
/// * `input` - Sample file in the layout named by `settings.layout`
/// * `output` - Where the chart image is written
/// * `settings` - Layout and axis configuration; sanitized before use
/// * `presenter` - Renders the chart
pub fn run_histogram(
    input: &Path,
    output: &Path,
    settings: &HistogramSettings,
    presenter: &dyn Presenter,
) -> Result<HistogramResult> {
    let mut settings = settings.clone();
    settings.sanitize();

    let bytes = read_sample_file(input)?;
    let series = match settings.layout {
        HistogramLayout::SampleIndex => decode_sample_indices(&bytes)?,
        HistogramLayout::BinCount => decode_bin_counts(&bytes)?,
    };
    drop(bytes);
    debug!(layout = %settings.layout, records = series.len(), "decoded histogram");

    let histogram = HistogramResult::from_series(&series)?;
    info!(
        nbins = histogram.nbins,
        total_samples = histogram.total_samples,
        "aggregated histogram"
    );

    presenter.present(&ChartSpec::for_histogram(&histogram, &settings), output)?;
    info!(path = %output.display(), "chart written");
    Ok(histogram)
}

/// Reads a point-pair file, computes its bounds and viewport and renders it.
pub fn run_points(
    input: &Path,
    output: &Path,
    settings: &PointSettings,
    presenter: &dyn Presenter,
) -> Result<PointSeriesResult> {
    let mut settings = settings.clone();
    settings.sanitize();

    let series = decode_point_pairs(&read_sample_file(input)?)?;
    debug!(records = series.len(), "decoded point series");

    let result = PointSeriesResult::from_series(series, &settings)?;
    info!(
        points = result.points.len(),
        bounds = %result.bounds,
        viewport = %result.viewport,
        "aggregated point series"
    );

    presenter.present(&ChartSpec::for_points(&result), output)?;
    info!(path = %output.display(), "chart written");
    Ok(result)
}

/// Writes `report` to `path` as pretty-printed JSON.
pub fn write_report(report: &GraphReport, path: &Path) -> Result<()> {
    let write_error = |source| GraphError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
