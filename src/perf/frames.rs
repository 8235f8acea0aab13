//! Frame rate estimates from a performance score
//!
//! Used when no benchmark table exists for the selected GPU: the score picks
//! a 1080p bucket, then a resolution multiplier scales it down.

use crate::catalog::{QualityFps, Resolution};

/// 1080p frame rates by minimum score, highest bucket first
const FRAME_RATE_BUCKETS: [(f64, [u32; 4]); 8] = [
    (100.0, [200, 180, 160, 140]),
    (90.0, [180, 160, 140, 120]),
    (80.0, [160, 140, 120, 100]),
    (70.0, [140, 120, 100, 80]),
    (60.0, [120, 100, 80, 60]),
    (50.0, [100, 80, 60, 45]),
    (40.0, [80, 60, 45, 30]),
    (30.0, [60, 45, 30, 20]),
];

/// Scale relative to 1080p
pub fn resolution_multiplier(resolution: Resolution) -> f64 {
    match resolution {
        Resolution::P1080 => 1.0,
        Resolution::P1440 => 0.65,
        Resolution::K4 => 0.35,
    }
}

/// Estimated low/medium/high/ultra frame rates for a 0-100 score
///
/// Scores under 30 share the lowest bucket.
pub fn estimate_frame_rates(score: f64, resolution: Resolution) -> QualityFps {
    let lowest = FRAME_RATE_BUCKETS[FRAME_RATE_BUCKETS.len() - 1].1;
    let base = FRAME_RATE_BUCKETS
        .iter()
        .find(|(min, _)| score >= *min)
        .map_or(lowest, |(_, fps)| *fps);

    QualityFps::new(base).scaled(resolution_multiplier(resolution))
}
