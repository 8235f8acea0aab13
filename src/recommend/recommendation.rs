//! Recommendation types

use crate::catalog::{Category, Component};
use crate::compat::RuleTag;
use serde::{Deserialize, Serialize};

/// Price of an alternative relative to the current part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceImpact {
    /// Under 90% of the current price
    Lower,
    /// Within 10% of the current price
    Similar,
    /// Over 110% of the current price
    Higher,
}

impl PriceImpact {
    /// Classify `new` against `current`
    pub fn from_prices(new: f64, current: f64) -> Self {
        let ratio = new / current;
        if ratio < 0.9 {
            Self::Lower
        } else if ratio > 1.1 {
            Self::Higher
        } else {
            Self::Similar
        }
    }

    /// Sort rank, cheaper first
    pub fn rank(&self) -> u8 {
        match self {
            Self::Lower => 0,
            Self::Similar => 1,
            Self::Higher => 2,
        }
    }
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Directly fixes a blocking issue
    High,
    /// One of several ways to fix an issue
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Sort rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// A catalog alternative that resolves one or more issues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecommendation {
    /// Category the alternative replaces
    pub component_type: Category,
    /// The alternative part
    pub component: Component,
    /// Why it helps
    pub reason: String,
    /// Rule families it resolves
    pub resolves_issues: Vec<RuleTag>,
    /// Price relative to the current part
    pub price_impact: PriceImpact,
    /// Urgency
    pub priority: Priority,
}
