//! Commonly used types, for glob import.

pub use crate::api::enums::*;
pub use crate::api::errors::*;
pub use crate::api::pipeline::*;
pub use crate::api::settings::*;
pub use crate::headers::point::Point;
pub use crate::implementation::aggregate::*;
pub use crate::implementation::decode::*;
pub use crate::implementation::encode::*;
pub use crate::implementation::present::*;
