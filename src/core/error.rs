//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`DataError`] - Loading and validating the bundled dashboard data
//! - [`StorageError`] - localStorage operations for user preferences
//! - [`FullscreenError`] - Browser fullscreen requests

use thiserror::Error;

/// Dashboard data could not be loaded or failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// TOML syntax or schema error
    #[error("malformed dashboard data: {0}")]
    Parse(String),
    /// Two records of the same kind share an id
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
    /// Two navigation entries share a route, so both would render as active
    #[error("route `{0}` is used by more than one navigation entry")]
    DuplicateRoute(String),
    /// Collapsible group with nothing to expand
    #[error("collapsible entry `{0}` has no children")]
    EmptyGroup(String),
    /// Children attached to a link or toggle entry
    #[error("entry `{0}` has children but is not collapsible")]
    UnexpectedChildren(String),
}

impl From<toml::de::Error> for DataError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}

/// localStorage errors for persisted preferences.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
}

/// Fullscreen request or exit rejected by the browser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FullscreenError {
    /// Browser document not available
    #[error("Browser document not available")]
    NoDocument,
    /// Request rejected (no user gesture, embedded frame, permissions)
    #[error("Error attempting to toggle full-screen mode: {0}")]
    Rejected(String),
}
