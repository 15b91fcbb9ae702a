//! Sync error types.

use catalog_store::StoreError;
use common::ProductId;
use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request body is incomplete or malformed.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Product not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The catalog store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The external item could not be created; the provisional product
    /// was removed.
    #[error("Product creation failed: {reason}")]
    CreationFailed { reason: String },

    /// The external item could not be created and removing the
    /// provisional product failed too. The product is left in the store
    /// without an external counterpart.
    #[error(
        "Product {product_id} orphaned: creation failed ({reason}) and rollback failed ({rollback_error})"
    )]
    OrphanedRecord {
        product_id: ProductId,
        reason: String,
        rollback_error: String,
    },
}

/// Convenience type alias for sync results.
pub type Result<T> = std::result::Result<T, SyncError>;
