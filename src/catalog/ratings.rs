//! Per-component performance ratings
//!
//! Ratings are normalized sub-scores on a 0-100 scale, keyed by component id.
//! A component without an entry simply has no rating.

use super::Resolution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CPU sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuRating {
    /// Single-threaded performance
    pub single_core: f64,
    /// Multi-threaded performance
    pub multi_core: f64,
    /// Gaming suitability
    pub gaming: f64,
    /// Productivity suitability
    pub productivity: f64,
}

/// GPU sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpuRating {
    /// 1080p raster performance
    pub performance_1080p: f64,
    /// 1440p raster performance
    pub performance_1440p: f64,
    /// 4K raster performance
    pub performance_4k: f64,
    /// Ray tracing performance
    pub ray_tracing: f64,
    /// Compute/productivity performance
    pub productivity: f64,
}

impl GpuRating {
    /// Sub-score for a resolution
    pub fn at(&self, resolution: Resolution) -> f64 {
        match resolution {
            Resolution::P1080 => self.performance_1080p,
            Resolution::P1440 => self.performance_1440p,
            Resolution::K4 => self.performance_4k,
        }
    }

    /// Mean of the three resolution sub-scores
    pub fn average_gaming(&self) -> f64 {
        (self.performance_1080p + self.performance_1440p + self.performance_4k) / 3.0
    }
}

/// Memory kit sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryRating {
    /// Capacity headroom
    pub capacity: f64,
    /// Transfer speed
    pub speed: f64,
    /// Gaming suitability
    pub gaming: f64,
    /// Productivity suitability
    pub productivity: f64,
}

/// Storage drive sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageRating {
    /// Sequential/random speed
    pub speed: f64,
    /// Capacity headroom
    pub capacity: f64,
    /// Gaming suitability (load times)
    pub gaming: f64,
    /// Productivity suitability
    pub productivity: f64,
}

/// Id-keyed rating tables for the four rated categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingTables {
    /// CPU ratings
    #[serde(default)]
    pub processor: BTreeMap<String, CpuRating>,
    /// GPU ratings
    #[serde(default)]
    pub gpu: BTreeMap<String, GpuRating>,
    /// Memory ratings
    #[serde(default)]
    pub memory: BTreeMap<String, MemoryRating>,
    /// Storage ratings
    #[serde(default)]
    pub storage: BTreeMap<String, StorageRating>,
}

impl RatingTables {
    /// CPU rating by id
    pub fn cpu(&self, id: &str) -> Option<&CpuRating> {
        self.processor.get(id)
    }

    /// GPU rating by id
    pub fn gpu(&self, id: &str) -> Option<&GpuRating> {
        self.gpu.get(id)
    }

    /// Memory rating by id
    pub fn memory(&self, id: &str) -> Option<&MemoryRating> {
        self.memory.get(id)
    }

    /// Storage rating by id
    pub fn storage(&self, id: &str) -> Option<&StorageRating> {
        self.storage.get(id)
    }
}
