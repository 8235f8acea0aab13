//! Error types for RigCheck
//!
//! The analysis core (checker, recommender, estimator, projector) is total and
//! never fails. Errors only arise at the edges: loading catalogs and build
//! files, and resolving user supplied part ids against a catalog.

use crate::catalog::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for RigCheck operations
#[derive(Error, Debug)]
pub enum RigCheckError {
    /// I/O error while reading or writing a catalog or build file
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Catalog could not be parsed or failed validation
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Two catalog entries share the same id
    #[error("Duplicate component id in catalog: {0}")]
    DuplicateComponent(String),

    /// Category key is not one of the eight known categories
    #[error("Unknown component category: {0}")]
    UnknownCategory(String),

    /// Component id is not present in the catalog
    #[error("Unknown component '{id}' in catalog")]
    UnknownComponent { id: String },

    /// Component id exists but belongs to another category
    #[error("Component '{id}' is a {actual}, not a {expected}")]
    CategoryMismatch {
        id: String,
        expected: Category,
        actual: Category,
    },

    /// Malformed `category=id` argument
    #[error("Invalid part argument '{0}': expected CATEGORY=ID")]
    InvalidPart(String),

    /// Build file could not be parsed
    #[error("Build file error: {0}")]
    BuildFileError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Multiple errors occurred
    #[error("Multiple errors occurred ({count} errors)")]
    MultipleErrors {
        count: usize,
        errors: Vec<RigCheckError>,
    },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RigCheckError>,
    },
}

impl RigCheckError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.into());
        }
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown component error
    pub fn unknown_component(id: impl Into<String>) -> Self {
        Self::UnknownComponent { id: id.into() }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::CatalogError(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this error was caused by user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::UnknownCategory(_)
            | Self::UnknownComponent { .. }
            | Self::CategoryMismatch { .. }
            | Self::InvalidPart(_)
            | Self::BuildFileError(_)
            | Self::ConfigError(_) => true,
            Self::MultipleErrors { errors, .. } => errors.iter().all(|e| e.is_user_error()),
            Self::WithContext { source, .. } => source.is_user_error(),
            _ => false,
        }
    }

    /// Get the component id associated with this error, if any
    pub fn component_id(&self) -> Option<&str> {
        match self {
            Self::UnknownComponent { id }
            | Self::CategoryMismatch { id, .. }
            | Self::DuplicateComponent(id) => Some(id),
            Self::WithContext { source, .. } => source.component_id(),
            _ => None,
        }
    }
}

/// Result type alias for RigCheck operations
pub type Result<T> = std::result::Result<T, RigCheckError>;

impl From<std::io::Error> for RigCheckError {
    fn from(err: std::io::Error) -> Self {
        RigCheckError::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for RigCheckError {
    fn from(err: serde_json::Error) -> Self {
        RigCheckError::JsonError(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| RigCheckError::io(path, e))
    }
}

/// Collects multiple results into a single result
pub fn collect_errors<T>(results: Vec<Result<T>>) -> Result<Vec<T>> {
    let mut successes = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) => successes.push(value),
            Err(e) => errors.push(e),
        }
    }

    match errors.len() {
        0 => Ok(successes),
        1 => Err(errors.remove(0)),
        count => Err(RigCheckError::MultipleErrors { count, errors }),
    }
}
