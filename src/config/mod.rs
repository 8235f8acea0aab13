//! Configuration module for RigCheck
//!
//! Provides CLI arguments, catalog selection and the resolved
//! runtime configuration.

mod settings;

pub use settings::*;
