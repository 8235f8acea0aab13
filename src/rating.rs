//! Qualitative rating labels
//!
//! Scores and frame rates are bucketed into labels for display. Each scale
//! uses its own subset of [`Rating`].

use crate::catalog::{Quality, Resolution};
use serde::Serialize;
use std::fmt;

/// A qualitative label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    /// Esports: 240+ FPS
    #[serde(rename = "Competitive Pro")]
    CompetitivePro,
    /// Esports: 144+ FPS
    Competitive,
    /// Esports: 60+ FPS
    Casual,
    /// Esports: below 60 FPS
    Playable,
    /// Top bucket
    Excellent,
    /// Second bucket of the overall score scale
    #[serde(rename = "Very Good")]
    VeryGood,
    /// Second bucket of the frame rate and task scales
    Great,
    /// Middle bucket
    Good,
    /// Low but usable
    Fair,
    /// Bottom bucket
    Poor,
}

impl Rating {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::CompetitivePro => "Competitive Pro",
            Self::Competitive => "Competitive",
            Self::Casual => "Casual",
            Self::Playable => "Playable",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rating with a one-line explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatedScore {
    /// Bucket
    pub rating: Rating,
    /// What the bucket means
    pub description: &'static str,
}

/// Rate an overall 0-100 performance score
pub fn performance_rating(score: f64) -> RatedScore {
    let (rating, description) = if score >= 90.0 {
        (Rating::Excellent, "Top-tier performance for all tasks")
    } else if score >= 80.0 {
        (Rating::VeryGood, "Great performance for most tasks")
    } else if score >= 70.0 {
        (Rating::Good, "Solid performance for typical use")
    } else if score >= 60.0 {
        (Rating::Fair, "Adequate for basic tasks")
    } else {
        (Rating::Poor, "May struggle with demanding tasks")
    };
    RatedScore { rating, description }
}

/// Rate a frame rate at a given resolution and preset
///
/// 4K or ultra is judged leniently, 1440p or high moderately, everything
/// else strictly.
pub fn frame_rate_rating(fps: f64, resolution: Resolution, quality: Quality) -> RatedScore {
    let (excellent, good, fair) = if resolution == Resolution::K4 || quality == Quality::Ultra {
        (45.0, 30.0, 20.0)
    } else if resolution == Resolution::P1440 || quality == Quality::High {
        (75.0, 60.0, 45.0)
    } else {
        (100.0, 75.0, 60.0)
    };

    let (rating, description) = if fps >= excellent {
        (Rating::Excellent, "Smooth gameplay with excellent visual quality")
    } else if fps >= good {
        (Rating::Good, "Good performance with smooth gameplay")
    } else if fps >= fair {
        (Rating::Fair, "Acceptable performance for casual gaming")
    } else {
        (Rating::Poor, "Performance may not provide smooth gameplay")
    };
    RatedScore { rating, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_rating_buckets() {
        assert_eq!(performance_rating(95.0).rating, Rating::Excellent);
        assert_eq!(performance_rating(90.0).rating, Rating::Excellent);
        assert_eq!(performance_rating(89.9).rating, Rating::VeryGood);
        assert_eq!(performance_rating(70.0).rating, Rating::Good);
        assert_eq!(performance_rating(60.0).rating, Rating::Fair);
        assert_eq!(performance_rating(0.0).rating, Rating::Poor);
        assert_eq!(performance_rating(0.0).description, "May struggle with demanding tasks");
    }

    #[test]
    fn test_frame_rate_rating_thresholds() {
        use Quality::*;
        use Resolution::*;

        assert_eq!(frame_rate_rating(45.0, K4, Low).rating, Rating::Excellent);
        assert_eq!(frame_rate_rating(45.0, P1080, Ultra).rating, Rating::Excellent);
        assert_eq!(frame_rate_rating(45.0, P1440, Medium).rating, Rating::Fair);
        assert_eq!(frame_rate_rating(60.0, P1080, High).rating, Rating::Good);
        assert_eq!(frame_rate_rating(99.0, P1080, Medium).rating, Rating::Good);
        assert_eq!(frame_rate_rating(59.0, P1080, Low).rating, Rating::Poor);
    }

    #[test]
    fn test_labels_serialize_with_spaces() {
        assert_eq!(serde_json::to_string(&Rating::CompetitivePro).unwrap(), "\"Competitive Pro\"");
        assert_eq!(serde_json::to_string(&Rating::VeryGood).unwrap(), "\"Very Good\"");
        assert_eq!(Rating::Great.to_string(), "Great");
    }
}
