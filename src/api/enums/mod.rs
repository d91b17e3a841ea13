pub mod padding_mode;
pub mod record_layout;
pub mod y_ceiling;

pub use padding_mode::*;
pub use record_layout::*;
pub use y_ceiling::*;
