//! Compatibility issue types

use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The build will not work as selected
    Error,
    /// The build works but with caveats
    Warning,
    /// Informational only
    Info,
}

impl Severity {
    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule family produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleTag {
    /// CPU and motherboard sockets
    Socket,
    /// Memory generation and speed
    Memory,
    /// PSU headroom
    Power,
    /// Physical fit inside the case
    Clearance,
    /// Cooler socket support
    Cooler,
    /// Motherboard and case form factors
    FormFactor,
}

impl RuleTag {
    /// Tag as used in issue output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Socket => "socket",
            Self::Memory => "memory",
            Self::Power => "power",
            Self::Clearance => "clearance",
            Self::Cooler => "cooler",
            Self::FormFactor => "formfactor",
        }
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected compatibility problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityIssue {
    /// Severity
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Rule family
    #[serde(rename = "component")]
    pub rule: RuleTag,
    /// Human-readable description
    pub message: String,
    /// Categories involved
    pub affected_components: Vec<Category>,
}

impl CompatibilityIssue {
    /// Create an error-level issue
    pub fn error(rule: RuleTag, message: impl Into<String>, affected: &[Category]) -> Self {
        Self::new(Severity::Error, rule, message, affected)
    }

    /// Create a warning-level issue
    pub fn warning(rule: RuleTag, message: impl Into<String>, affected: &[Category]) -> Self {
        Self::new(Severity::Warning, rule, message, affected)
    }

    fn new(
        severity: Severity,
        rule: RuleTag,
        message: impl Into<String>,
        affected: &[Category],
    ) -> Self {
        Self {
            severity,
            rule,
            message: message.into(),
            affected_components: affected.to_vec(),
        }
    }

    /// True for error-level issues
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Overall verdict for a set of issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// At least one error
    Error,
    /// Warnings but no errors
    Warning,
    /// Nothing to report
    Compatible,
}

/// Summary of a compatibility check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityStatus {
    /// Verdict
    pub status: StatusLevel,
    /// One-line summary
    pub message: String,
}

impl CompatibilityStatus {
    /// Summarize issues; errors outrank warnings, info issues are ignored
    pub fn from_issues(issues: &[CompatibilityIssue]) -> Self {
        let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
        let warnings = issues.iter().filter(|i| i.severity == Severity::Warning).count();
        let plural = |n: usize| if n > 1 { "s" } else { "" };

        if errors > 0 {
            Self {
                status: StatusLevel::Error,
                message: format!("{} critical compatibility issue{} found", errors, plural(errors)),
            }
        } else if warnings > 0 {
            Self {
                status: StatusLevel::Warning,
                message: format!("{} compatibility warning{} found", warnings, plural(warnings)),
            }
        } else {
            Self {
                status: StatusLevel::Compatible,
                message: "All components are compatible".to_string(),
            }
        }
    }

    /// True when nothing blocks the build
    pub fn is_compatible(&self) -> bool {
        self.status != StatusLevel::Error
    }
}
