use thiserror::Error;

/// Errors that can occur when interacting with an order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email already belongs to a persisted order. Detected from the
    /// storage layer's uniqueness constraint after the insert attempt,
    /// not validated beforehand.
    #[error("an order with email {0} has already been submitted")]
    DuplicateEmail(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored column held a value that no longer parses into its
    /// domain type.
    #[error("invalid stored order field: {0}")]
    InvalidField(String),
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
