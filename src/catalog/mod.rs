//! Component catalog
//!
//! The catalog is the read-only reference data every analysis consumes:
//! purchasable parts, id-keyed rating tables, and canned benchmark tables.
//! It is always passed explicitly, so tests can inject synthetic catalogs.

mod benchmarks;
mod build;
mod component;
mod ratings;
mod reference;
mod reference_benchmarks;

pub use benchmarks::*;
pub use build::BuildFile;
pub use component::{Category, Component, Selection};
pub use ratings::*;

use crate::error::{IoResultExt, Result, RigCheckError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

/// Baseline used for CPUs missing from the baseline table
pub const DEFAULT_CPU_BASELINE: f64 = 0.8;

/// Complete reference data set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All parts, in listing order
    #[serde(default)]
    pub components: Vec<Component>,
    /// Per-component sub-score ratings
    #[serde(default)]
    pub ratings: RatingTables,
    /// Game FPS tables keyed by GPU id
    #[serde(default)]
    pub games: Vec<GameBenchmark>,
    /// Application tables keyed by GPU id
    #[serde(default)]
    pub gpu_applications: Vec<ApplicationBenchmark>,
    /// Application tables keyed by CPU id
    #[serde(default)]
    pub cpu_applications: Vec<ApplicationBenchmark>,
    /// Relative CPU strength (1.0 = fastest) for frame-rate scaling
    #[serde(default)]
    pub cpu_baselines: BTreeMap<String, f64>,
    /// CPU ids known to support DDR5 memory
    #[serde(default)]
    pub ddr5_processors: BTreeSet<String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in reference catalog
    pub fn reference() -> Self {
        Self {
            components: reference::components(),
            ratings: reference::ratings(),
            games: reference_benchmarks::games(),
            gpu_applications: reference_benchmarks::gpu_applications(),
            cpu_applications: reference_benchmarks::cpu_applications(),
            cpu_baselines: reference::cpu_baselines(),
            ddr5_processors: reference::ddr5_processors(),
        }
    }

    /// Add a part (builder style, for fixtures)
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Parts of one category in listing order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.category == category)
    }

    /// Find a part by id
    pub fn find(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Find a part by id, requiring a category
    pub fn find_in(&self, category: Category, id: &str) -> Result<&Component> {
        let component = self
            .find(id)
            .ok_or_else(|| RigCheckError::unknown_component(id))?;
        if component.category != category {
            return Err(RigCheckError::CategoryMismatch {
                id: id.to_string(),
                expected: category,
                actual: component.category,
            });
        }
        Ok(component)
    }

    /// Baseline strength for a CPU id
    pub fn cpu_baseline(&self, cpu_id: &str) -> f64 {
        self.cpu_baselines
            .get(cpu_id)
            .copied()
            .unwrap_or(DEFAULT_CPU_BASELINE)
    }

    /// Whether a CPU id is on the DDR5 allow-list
    pub fn supports_ddr5(&self, cpu_id: &str) -> bool {
        self.ddr5_processors.contains(cpu_id)
    }

    /// Number of parts per category
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for component in &self.components {
            *counts.entry(component.category).or_insert(0) += 1;
        }
        counts
    }

    /// Reject catalogs with duplicate component ids
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                return Err(RigCheckError::DuplicateComponent(component.id.clone()));
            }
        }
        Ok(())
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| RigCheckError::catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        let catalog = Self::from_json(&content)
            .map_err(|e| e.with_context(format!("loading catalog {}", path.display())))?;
        tracing::info!(
            "Loaded catalog from {:?}: {} components, {} games",
            path,
            catalog.components.len(),
            catalog.games.len()
        );
        Ok(catalog)
    }

    /// Save the catalog as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_path(path)?;
        Ok(())
    }
}
