//! Storage-specific error type wrapping sqlx errors.

use formation_domain::error::FormationError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A stored timestamp could not be parsed.
    #[error("invalid stored timestamp")]
    Timestamp(#[from] chrono::ParseError),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for FormationError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
