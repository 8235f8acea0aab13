//! Compatibility checking
//!
//! Detects conflicts between selected parts and summarizes them.

mod checker;
mod issue;

pub use checker::*;
pub use issue::*;
