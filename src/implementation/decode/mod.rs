pub mod decoded_series;
pub mod decoder;

pub use decoded_series::*;
pub use decoder::*;
