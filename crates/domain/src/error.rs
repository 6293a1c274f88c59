//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FormationError`] at the port boundary.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum FormationError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a domain object can be rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not provided to a builder.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
