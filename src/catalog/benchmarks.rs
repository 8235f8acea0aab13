//! Canned benchmark tables
//!
//! Game tables hold literal FPS per resolution and quality preset, keyed by
//! GPU id. Application tables hold per-task measurements keyed by GPU or CPU id.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Resolution {
    /// 1920x1080
    #[serde(rename = "1080p")]
    #[value(name = "1080p")]
    P1080,
    /// 2560x1440
    #[serde(rename = "1440p")]
    #[value(name = "1440p")]
    P1440,
    /// 3840x2160
    #[serde(rename = "4k")]
    #[value(name = "4k")]
    K4,
}

impl Resolution {
    /// All resolutions, lowest first
    pub const ALL: [Resolution; 3] = [Resolution::P1080, Resolution::P1440, Resolution::K4];

    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            Self::P1080 => "1080p",
            Self::P1440 => "1440p",
            Self::K4 => "4k",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Graphics quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Low preset
    Low,
    /// Medium preset
    Medium,
    /// High preset
    High,
    /// Ultra preset
    Ultra,
}

/// FPS for each quality preset at one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityFps {
    /// Low preset FPS
    pub low: u32,
    /// Medium preset FPS
    pub medium: u32,
    /// High preset FPS
    pub high: u32,
    /// Ultra preset FPS
    pub ultra: u32,
}

impl QualityFps {
    /// Create from `[low, medium, high, ultra]`
    pub const fn new(values: [u32; 4]) -> Self {
        Self {
            low: values[0],
            medium: values[1],
            high: values[2],
            ultra: values[3],
        }
    }

    /// FPS for a preset
    pub fn at(&self, quality: Quality) -> u32 {
        match quality {
            Quality::Low => self.low,
            Quality::Medium => self.medium,
            Quality::High => self.high,
            Quality::Ultra => self.ultra,
        }
    }

    /// Multiply every preset by `factor`, rounding to whole frames
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |v: u32| (v as f64 * factor).round().max(0.0) as u32;
        Self {
            low: scale(self.low),
            medium: scale(self.medium),
            high: scale(self.high),
            ultra: scale(self.ultra),
        }
    }
}

/// FPS grid: three resolutions by four presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FpsGrid {
    /// 1080p row
    pub resolution_1080p: QualityFps,
    /// 1440p row
    pub resolution_1440p: QualityFps,
    /// 4K row
    pub resolution_4k: QualityFps,
}

impl FpsGrid {
    /// Row for a resolution
    pub fn at(&self, resolution: Resolution) -> &QualityFps {
        match resolution {
            Resolution::P1080 => &self.resolution_1080p,
            Resolution::P1440 => &self.resolution_1440p,
            Resolution::K4 => &self.resolution_4k,
        }
    }

    /// Multiply every cell by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            resolution_1080p: self.resolution_1080p.scaled(factor),
            resolution_1440p: self.resolution_1440p.scaled(factor),
            resolution_4k: self.resolution_4k.scaled(factor),
        }
    }
}

/// Game genre, which drives CPU sensitivity and playability thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    /// Competitive titles at very high frame rates
    Esports,
    /// Shooters
    Fps,
    /// Big-budget single player
    Aaa,
    /// Independent titles
    Indie,
    /// Virtual reality
    Vr,
}

impl GameCategory {
    /// Listing order: esports first, VR last
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Esports => 0,
            Self::Fps => 1,
            Self::Aaa => 2,
            Self::Indie => 3,
            Self::Vr => 4,
        }
    }

    /// How strongly CPU strength shifts frame rates in this genre
    pub fn cpu_impact(&self) -> f64 {
        match self {
            Self::Esports => 0.15,
            Self::Fps => 0.12,
            Self::Aaa => 0.08,
            Self::Indie | Self::Vr => 0.05,
        }
    }
}

/// Benchmark table for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameBenchmark {
    /// Game id
    pub id: String,
    /// Title
    pub name: String,
    /// Genre
    pub category: GameCategory,
    /// Display glyph
    #[serde(default)]
    pub icon: String,
    /// FPS grids keyed by GPU id
    pub benchmarks: BTreeMap<String, FpsGrid>,
}

/// Application domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    /// Video editing/transcoding
    Video,
    /// 3D rendering
    Rendering,
    /// Software development
    Development,
    /// Live streaming
    Streaming,
    /// Image editing/design
    Design,
}

/// What a task value measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkMetric {
    /// Duration, lower is better
    Time,
    /// Score, higher is better
    Score,
    /// Frame rate
    Fps,
}

/// One measured task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBenchmark {
    /// Task name
    pub task_name: String,
    /// Measured value in the application's unit
    pub value: f64,
    /// What was measured
    pub description: String,
}

impl TaskBenchmark {
    /// Create a task entry
    pub fn new(task_name: impl Into<String>, value: f64, description: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            value,
            description: description.into(),
        }
    }
}

/// Benchmark table for one application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationBenchmark {
    /// Application id
    pub id: String,
    /// Application name
    pub name: String,
    /// Domain
    pub category: AppCategory,
    /// Display glyph
    #[serde(default)]
    pub icon: String,
    /// Metric kind of every task value
    pub metric: BenchmarkMetric,
    /// Unit label
    pub unit: String,
    /// Task lists keyed by hardware id
    pub benchmarks: BTreeMap<String, Vec<TaskBenchmark>>,
}
