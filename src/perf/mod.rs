//! Performance estimation
//!
//! Weighted 0-100 scores for gaming and productivity, per-part
//! contributions, and score-based frame rate estimates.

mod estimator;
mod frames;
mod metrics;

pub use estimator::*;
pub use frames::*;
pub use metrics::*;
