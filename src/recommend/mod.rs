//! Corrective part recommendations
//!
//! Each error-level compatibility issue is mapped to catalog alternatives
//! that would resolve it, then deduplicated and ranked.

mod engine;
mod recommendation;

pub use engine::*;
pub use recommendation::*;
