//! Saved builds
//!
//! A build file stores a selection as `category -> component id` pairs so it
//! survives catalog revisions. Ids are resolved against a catalog on load.

use super::{Catalog, Category, Selection};
use crate::error::{collect_errors, IoResultExt, Result, RigCheckError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk build description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildFile {
    /// Optional build name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Component id per category key
    #[serde(default)]
    pub parts: BTreeMap<String, String>,
}

impl BuildFile {
    /// Capture a selection
    pub fn from_selection(name: Option<String>, selection: &Selection) -> Self {
        let parts = selection
            .iter()
            .map(|(category, component)| (category.key().to_string(), component.id.clone()))
            .collect();
        Self { name, parts }
    }

    /// Load a build from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        serde_json::from_str(&content).map_err(|e| RigCheckError::BuildFileError(e.to_string()))
    }

    /// Save the build as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_path(path)?;
        Ok(())
    }

    /// Resolve every entry against the catalog
    ///
    /// All bad entries are reported together rather than stopping at the first.
    pub fn resolve(&self, catalog: &Catalog) -> Result<Selection> {
        let results = self
            .parts
            .iter()
            .map(|(key, id)| {
                let category: Category = key.parse()?;
                catalog.find_in(category, id).cloned().map_err(|e| {
                    tracing::warn!("Cannot resolve {}={}: {}", key, id, e);
                    e
                })
            })
            .collect();

        let components = collect_errors(results)?;
        Ok(components.into_iter().collect())
    }
}
