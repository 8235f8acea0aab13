//! Projected benchmark results

use crate::catalog::{AppCategory, BenchmarkMetric, FpsGrid, GameCategory, Resolution};
use crate::rating::Rating;
use serde::Serialize;

/// Expected frame rates for one game on the selected hardware
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePerformance {
    /// Game id
    pub game_id: String,
    /// Title
    pub name: String,
    /// Genre
    pub category: GameCategory,
    /// Display glyph
    pub icon: String,
    /// FPS grid after CPU scaling
    pub fps: FpsGrid,
    /// Mean of the "high" preset across the three resolutions
    pub average_fps: f64,
    /// Genre-specific playability label
    pub playability_rating: Rating,
}

impl GamePerformance {
    /// FPS at the "high" preset for a resolution
    pub fn high_at(&self, resolution: Resolution) -> u32 {
        self.fps.at(resolution).high
    }
}

/// One task of an application projection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Task name
    pub task_name: String,
    /// Measured value in the application's unit
    pub value: f64,
    /// What was measured
    pub description: String,
    /// Qualitative label
    pub rating: Rating,
}

/// Expected results for one application on the selected hardware
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPerformance {
    /// Application id
    pub app_id: String,
    /// Application name
    pub name: String,
    /// Domain
    pub category: AppCategory,
    /// Display glyph
    pub icon: String,
    /// Metric kind
    pub metric: BenchmarkMetric,
    /// Unit label
    pub unit: String,
    /// Per-task results
    pub tasks: Vec<TaskResult>,
    /// 0-100 summary score
    pub overall_score: f64,
}

/// FPS deltas for one game
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FpsImprovement {
    /// Change in average FPS
    pub average_fps: f64,
    /// Change at 1080p high
    pub resolution_1080p_high: i64,
    /// Change at 1440p high
    pub resolution_1440p_high: i64,
    /// Change at 4K high
    pub resolution_4k_high: i64,
}

/// Before/after projection of one game for a single-part swap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameComparison {
    /// Projection with the current parts, if the game has data
    pub current: Option<GamePerformance>,
    /// Projection after the swap, if the game has data
    pub new: Option<GamePerformance>,
    /// `new - current`, missing projections count as zero
    pub improvement: FpsImprovement,
}

impl GameComparison {
    /// Compare two optional projections
    pub fn between(current: Option<GamePerformance>, new: Option<GamePerformance>) -> Self {
        let average = |g: &Option<GamePerformance>| g.as_ref().map_or(0.0, |g| g.average_fps);
        let high = |g: &Option<GamePerformance>, r: Resolution| {
            g.as_ref().map_or(0, |g| g.high_at(r) as i64)
        };

        let delta = |r: Resolution| high(&new, r) - high(&current, r);

        let improvement = FpsImprovement {
            average_fps: average(&new) - average(&current),
            resolution_1080p_high: delta(Resolution::P1080),
            resolution_1440p_high: delta(Resolution::P1440),
            resolution_4k_high: delta(Resolution::K4),
        };
        Self { current, new, improvement }
    }
}
