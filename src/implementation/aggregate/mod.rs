pub mod bounding_box;
pub mod entropy;
pub mod histogram;
pub mod viewport;

pub use bounding_box::*;
pub use entropy::*;
pub use histogram::*;
pub use viewport::*;
