//! Domain error types.

use order_store::StoreError;
use thiserror::Error;

use crate::form::ValidationErrors;

/// Errors that can occur while handling an order submission.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more submitted fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The order store rejected or failed the operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
