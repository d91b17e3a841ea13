//! # Sample Graphs
//!
//! Decodes binary sample files and turns them into charts.
//!
//! Three record layouts are understood, all behind a little-endian `i32` count header:
//!
//! - `sample-index`: one `i32` bin index per sample, counted into a histogram.
//! - `bin-count`: one `i32` occurrence count per bin.
//! - `point-pair`: one `(f64, f64)` point per record, plotted as a line.
//!
//! Histograms are reduced to relative frequencies; point series to a bounding box
//! and a (optionally padded) viewport. A [Presenter](implementation::present::Presenter)
//! then draws the result.
//!
//! ```no_run
//! use sample_graphs::prelude::*;
//! use std::path::Path;
//!
//! let settings = HistogramSettings::new(HistogramLayout::BinCount);
//! let presenter = BitmapPresenter::new(PresenterSettings::new());
//! let result = run_histogram(Path::new("bins.bin"), Path::new("bins.png"), &settings, &presenter)?;
//! println!("{}", result.summary());
//! # Ok::<(), GraphError>(())
//! ```

/// Public High Level API
pub mod api {
    pub mod enums;
    pub mod errors;

    /// Read, decode, aggregate and present in a single call.
    pub mod pipeline;
    pub mod settings;
}

/// Fixed-size records found in sample files.
pub mod headers;

pub mod implementation {
    /// Histogram frequencies, bounding boxes and derived statistics.
    pub mod aggregate;

    /// Turns raw file bytes into typed series.
    pub mod decode;

    /// Produces sample files; the inverse of [decode].
    pub mod encode;

    /// Chart descriptions and the backends that draw them.
    pub mod present;
}

pub mod utilities {
    pub mod io {
        pub mod read_file;
    }

    pub mod serialize {
        /// This module contains utilities for reading unaligned data in little-endian format.
        pub mod little_endian_reader;

        /// This module contains utilities for writing data in little-endian format.
        pub mod little_endian_writer;
    }
}

pub mod prelude;
