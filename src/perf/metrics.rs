//! Performance score types

use crate::catalog::Category;
use serde::{Deserialize, Serialize};

/// Gaming scores per resolution, 0-100
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamingScores {
    /// 1080p score
    pub resolution_1080p: f64,
    /// 1440p score
    pub resolution_1440p: f64,
    /// 4K score
    pub resolution_4k: f64,
    /// Mean of the three resolutions; a unitless index, not frames
    pub average_fps: f64,
}

/// Productivity scores per workload, 0-100
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityScores {
    /// Video editing
    pub video_editing: f64,
    /// 3D rendering
    pub rendering_3d: f64,
    /// Software development
    pub programming: f64,
    /// Live streaming
    pub streaming: f64,
    /// Mean of the four workloads
    pub overall: f64,
}

/// Full score set for a selection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Gaming scores
    pub gaming: GamingScores,
    /// Productivity scores
    pub productivity: ProductivityScores,
    /// Even blend of gaming average and productivity overall
    pub overall: f64,
}

/// One rated part's weighted share of the scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentContribution {
    /// Category of the part
    pub component: Category,
    /// Weighted gaming share
    pub gaming_contribution: f64,
    /// Weighted productivity share
    pub productivity_contribution: f64,
    /// Why this part holds the build back, if it does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottleneck: Option<String>,
}

/// Score deltas from swapping one part
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Improvement {
    /// Change in gaming average
    pub gaming: f64,
    /// Change in productivity overall
    pub productivity: f64,
    /// Change in overall score
    pub overall: f64,
}

/// Before/after scores for a single-part swap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceComparison {
    /// Scores of the current selection
    pub current_performance: PerformanceMetrics,
    /// Scores after the swap
    pub new_performance: PerformanceMetrics,
    /// `new - current`
    pub improvement: Improvement,
}

impl PerformanceComparison {
    /// Compare two score sets
    pub fn between(current: PerformanceMetrics, new: PerformanceMetrics) -> Self {
        Self {
            current_performance: current,
            new_performance: new,
            improvement: Improvement {
                gaming: new.gaming.average_fps - current.gaming.average_fps,
                productivity: new.productivity.overall - current.productivity.overall,
                overall: new.overall - current.overall,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(PerformanceMetrics::default()).unwrap();
        assert!(json["gaming"].get("resolution1080p").is_some());
        assert!(json["gaming"].get("averageFps").is_some());
        assert!(json["productivity"].get("rendering3d").is_some());
        assert!(json["productivity"].get("videoEditing").is_some());
    }

    #[test]
    fn test_comparison_deltas() {
        let mut better = PerformanceMetrics::default();
        better.gaming.average_fps = 12.5;
        better.productivity.overall = 4.0;
        better.overall = 8.25;

        let cmp = PerformanceComparison::between(PerformanceMetrics::default(), better);
        assert_eq!(cmp.improvement.gaming, 12.5);
        assert_eq!(cmp.improvement.productivity, 4.0);
        assert_eq!(cmp.improvement.overall, 8.25);
    }
}
