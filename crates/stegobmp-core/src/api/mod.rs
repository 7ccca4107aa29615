//! Builder style entry points, one per operation.

pub mod embed;
pub mod extract;
pub mod extract_raw;
mod shared;

pub use shared::*;
