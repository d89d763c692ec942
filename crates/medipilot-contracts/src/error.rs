//! Error types for the MediPilot portal core.
//!
//! All fallible operations return `PortalResult<T>`. Variants carry enough
//! context for the UI layer to render a terminal status message.

use thiserror::Error;

/// The unified error type for the portal core.
#[derive(Debug, Error)]
pub enum PortalError {
    /// A submission was malformed (missing or unknown required field).
    /// Nothing was written to the store.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// No seeded hospital offers the requested specialty.
    #[error("no hospital available for required specialty '{specialty}'")]
    NoMatchingHospital { specialty: String },

    /// A lookup by id found no record in the named collection.
    #[error("{collection} '{id}' not found")]
    NotFound { collection: String, id: String },

    /// A status change is not permitted from the record's current state.
    #[error("invalid transition: {reason}")]
    InvalidTransition { reason: String },

    /// An analysis provider returned a result that breaks the analysis contract.
    #[error("analysis contract violated: {reason}")]
    AnalysisContractViolated { reason: String },

    /// A configuration document is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The record store could not be accessed.
    #[error("record store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl PortalError {
    /// Shorthand for `InvalidInput`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    /// Shorthand for `NotFound`.
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

/// Convenience alias used throughout the MediPilot crates.
pub type PortalResult<T> = Result<T, PortalError>;
