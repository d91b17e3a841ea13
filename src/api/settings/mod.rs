pub mod histogram_settings;
pub mod point_settings;
pub mod presenter_settings;

pub use histogram_settings::*;
pub use point_settings::*;
pub use presenter_settings::*;
