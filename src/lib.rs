//! # RigCheck - PC Build Compatibility and Performance
//!
//! RigCheck takes a set of selected PC parts and a component catalog and
//! answers four questions about the build: does it fit together, what should
//! be swapped when it doesn't, how fast is it, and how will it run real games
//! and applications.
//!
//! ## Features
//!
//! - **Compatibility Checking**: Socket, memory, power, clearance, cooler and form factor rules
//! - **Recommendations**: Ranked catalog alternatives for every critical issue
//! - **Performance Estimation**: Weighted gaming and productivity scores with bottlenecks
//! - **Benchmark Projection**: Per-game FPS and per-application results from canned tables
//! - **Catalog Injection**: Built-in reference data or any catalog loaded from JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use rigcheck::catalog::{Catalog, Selection};
//! use rigcheck::compat::{CompatibilityChecker, CompatibilityStatus};
//!
//! let catalog = Catalog::reference();
//! let selection: Selection = ["cpu-1", "mb-2"]
//!     .iter()
//!     .filter_map(|id| catalog.find(id).cloned())
//!     .collect();
//!
//! let issues = CompatibilityChecker::new(&catalog).check(&selection);
//! println!("{}", CompatibilityStatus::from_issues(&issues).message);
//! ```
//!
//! ## Full Report
//!
//! ```no_run
//! use rigcheck::catalog::{BuildFile, Catalog};
//! use rigcheck::report::BuildReport;
//! use std::path::Path;
//!
//! let catalog = Catalog::reference();
//! let selection = BuildFile::load(Path::new("build.json"))
//!     .and_then(|build| build.resolve(&catalog))
//!     .unwrap();
//!
//! let report = BuildReport::analyze(&catalog, &selection);
//! report.print_summary();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bench;
pub mod catalog;
pub mod compat;
pub mod config;
pub mod error;
pub mod perf;
pub mod rating;
pub mod recommend;
pub mod report;
pub mod specs;

// Re-export commonly used types
pub use catalog::{Catalog, Category, Component, Selection};
pub use error::{Result, RigCheckError};
pub use report::BuildReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use rigcheck::prelude::*;
    //! ```

    pub use crate::bench::{ApplicationPerformance, BenchmarkProjector, GamePerformance};
    pub use crate::catalog::{BuildFile, Catalog, Category, Component, Selection};
    pub use crate::compat::{
        check_compatibility, CompatibilityChecker, CompatibilityIssue, CompatibilityStatus,
    };
    pub use crate::error::{Result, RigCheckError};
    pub use crate::perf::{PerformanceEstimator, PerformanceMetrics};
    pub use crate::rating::{performance_rating, Rating};
    pub use crate::recommend::{
        generate_recommendations, ComponentRecommendation, RecommendationEngine,
    };
    pub use crate::report::BuildReport;
}
