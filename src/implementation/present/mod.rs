pub mod bin_table;
pub mod bitmap_presenter;
pub mod chart_spec;
pub mod presenter;

pub use bitmap_presenter::*;
pub use chart_spec::*;
pub use presenter::*;
