use argh::FromArgs;
use sample_graphs::api::enums::{HistogramLayout, PaddingMode};
use std::path::PathBuf;

/// Draws histograms and point series from binary sample files
#[derive(FromArgs, Debug)]
pub struct Args {
    /// log verbosity level: trace, debug, info, warn, error (default: warn)
    #[argh(option, default = "tracing::Level::WARN")]
    pub log_level: tracing::Level,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Histogram(HistogramArgs),
    Points(PointsArgs),
}

/// Plot the relative frequencies of a sample-index or bin-count file
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "histogram")]
pub struct HistogramArgs {
    /// input sample file
    #[argh(positional)]
    pub input: PathBuf,

    /// output image (PNG recommended)
    #[argh(positional)]
    pub output: PathBuf,

    /// record layout: sample-index or bin-count (default: sample-index)
    #[argh(option, short = 'l', default = "HistogramLayout::SampleIndex")]
    pub layout: HistogramLayout,

    /// fixed top of the y axis, in (0, 1]
    #[argh(option, short = 'y')]
    pub y_ceiling: Option<f64>,

    /// use the highest relative frequency as the top of the y axis
    #[argh(switch, short = 'a')]
    pub auto_ceiling: bool,

    /// right bound of the x axis (default: number of bins)
    #[argh(option, short = 'x')]
    pub x_max: Option<f64>,

    /// print a table of non-empty bins with entropy statistics
    #[argh(switch, short = 't')]
    pub table: bool,

    /// image width in pixels (default: 1200)
    #[argh(option, default = "1200")]
    pub width: u32,

    /// image height in pixels (default: 800)
    #[argh(option, default = "800")]
    pub height: u32,

    /// write a JSON summary to this path
    #[argh(option, short = 'r')]
    pub report: Option<PathBuf>,
}

/// Plot a point-pair file as a line inside its bounding box
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "points")]
pub struct PointsArgs {
    /// input sample file
    #[argh(positional)]
    pub input: PathBuf,

    /// output image (PNG recommended)
    #[argh(positional)]
    pub output: PathBuf,

    /// viewport mode: exact or padded (default: padded)
    #[argh(option, short = 'p', default = "PaddingMode::Padded")]
    pub padding: PaddingMode,

    /// fraction of each axis range added on both sides (default: 0.05)
    #[argh(option, short = 'f')]
    pub padding_fraction: Option<f64>,

    /// span used for an axis whose values are all equal (default: 1.0)
    #[argh(option, short = 's')]
    pub min_span: Option<f64>,

    /// image width in pixels (default: 1200)
    #[argh(option, default = "1200")]
    pub width: u32,

    /// image height in pixels (default: 800)
    #[argh(option, default = "800")]
    pub height: u32,

    /// write a JSON summary to this path
    #[argh(option, short = 'r')]
    pub report: Option<PathBuf>,
}
