//! Game and application benchmark projections

mod projection;
mod projector;

pub use projection::*;
pub use projector::*;
