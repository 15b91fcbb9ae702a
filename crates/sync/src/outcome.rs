//! Typed outcomes of coordinator operations.

use common::{ExternalItemId, ProductId};
use domain::ProductRecord;

use crate::error::SyncError;

/// How a product creation ended.
///
/// ```text
/// insert ──► external create ──┬──► link ──────────────► Created
///                              └──► delete ──┬──────────► RolledBack
///                                            └──────────► RollbackFailed
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum CreationOutcome {
    /// The product exists in the store and is linked to its external item.
    Created(ProductRecord),

    /// The external step failed and the provisional product was deleted.
    RolledBack { reason: String },

    /// The external step failed and deleting the provisional product
    /// failed as well; the product is orphaned in the store.
    RollbackFailed {
        product_id: ProductId,
        reason: String,
        rollback_error: String,
    },
}

impl CreationOutcome {
    /// Converts the outcome into the caller-facing result.
    pub fn into_result(self) -> Result<ProductRecord, SyncError> {
        match self {
            CreationOutcome::Created(record) => Ok(record),
            CreationOutcome::RolledBack { reason } => Err(SyncError::CreationFailed { reason }),
            CreationOutcome::RollbackFailed {
                product_id,
                reason,
                rollback_error,
            } => Err(SyncError::OrphanedRecord {
                product_id,
                reason,
                rollback_error,
            }),
        }
    }
}

/// Result of mirroring an update to the external catalog.
///
/// Mirroring is best-effort: a `Failed` outcome is logged by the
/// coordinator and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum MirrorOutcome {
    /// The external item now carries the updated fields.
    Synced(ExternalItemId),

    /// The product has no external item, so nothing was sent.
    Skipped,

    /// The external update failed. The store update still stands.
    Failed {
        external_id: ExternalItemId,
        reason: String,
    },
}

impl MirrorOutcome {
    /// Returns true if the external catalog may now lag the store.
    pub fn is_failed(&self) -> bool {
        matches!(self, MirrorOutcome::Failed { .. })
    }
}

/// Result of a successful product update.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct UpdateOutcome {
    /// The product as stored after the update.
    pub record: ProductRecord,

    /// What happened to the external mirror.
    pub mirror: MirrorOutcome,
}
