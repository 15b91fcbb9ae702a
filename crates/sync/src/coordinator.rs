//! Sync coordinator for product create and update flows.

use catalog_store::{CatalogStore, ProductUpdate};
use common::{ExternalItemId, ProductId};
use domain::{ProductFields, ProductInput, ProductRecord};
use webflow::ExternalCatalog;

use crate::error::SyncError;
use crate::outcome::{CreationOutcome, MirrorOutcome, UpdateOutcome};

/// Result of the external step of a creation.
enum ExternalCreation {
    Linked(ExternalItemId),
    RollbackNeeded(String),
}

/// Orchestrates product writes across the catalog store and the external
/// catalog.
///
/// Holds no mutable state of its own: each call runs its steps
/// sequentially and shares nothing with concurrent calls beyond the two
/// clients.
pub struct SyncCoordinator<S, E>
where
    S: CatalogStore,
    E: ExternalCatalog,
{
    store: S,
    external: E,
}

impl<S, E> SyncCoordinator<S, E>
where
    S: CatalogStore,
    E: ExternalCatalog,
{
    /// Creates a new sync coordinator.
    pub fn new(store: S, external: E) -> Self {
        Self { store, external }
    }

    /// Returns the catalog store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a product in the store and its mirror in the external catalog.
    ///
    /// Either both exist afterwards and the product carries the external
    /// item ID, or an error is returned. See [`Self::create_product`] for
    /// the individual outcomes.
    pub async fn create(&self, input: ProductInput) -> Result<ProductRecord, SyncError> {
        self.create_product(input).await?.into_result()
    }

    /// Runs the creation saga and reports how it ended.
    ///
    /// Validation and store failures before the external step are
    /// returned as errors with nothing written. Once the provisional
    /// product exists, the external step's result is reported as a
    /// [`CreationOutcome`].
    #[tracing::instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> Result<CreationOutcome, SyncError> {
        let fields = input.validate()?;

        // 1. Provisional store write
        let provisional = self.store.insert(fields.clone()).await?;
        let product_id = provisional.id;
        tracing::debug!(%product_id, "provisional product stored");

        // 2. External create
        let reason = match self.publish(&fields).await {
            ExternalCreation::Linked(external_id) => {
                // 3. Link the product to its external item
                let record = self
                    .store
                    .find_and_update(product_id, ProductUpdate::link(external_id.clone()))
                    .await
                    .inspect_err(|e| {
                        tracing::error!(
                            %product_id,
                            %external_id,
                            error = %e,
                            "failed to record external item id"
                        );
                    })?
                    .ok_or_else(|| {
                        tracing::error!(
                            %product_id,
                            %external_id,
                            "product vanished before its external item id was recorded"
                        );
                        SyncError::CreationFailed {
                            reason: format!(
                                "product {product_id} was removed before external item {external_id} could be linked"
                            ),
                        }
                    })?;

                metrics::counter!("catalog_products_created_total").increment(1);
                tracing::info!(%product_id, %external_id, "product created");
                return Ok(CreationOutcome::Created(record));
            }
            ExternalCreation::RollbackNeeded(reason) => reason,
        };

        // 4. Compensate
        Ok(self.compensate(product_id, reason).await)
    }

    /// Creates the external item and extracts its identity.
    async fn publish(&self, fields: &ProductFields) -> ExternalCreation {
        match self.external.create_item(fields).await {
            Ok(item) => match item.item_id() {
                Some(external_id) => ExternalCreation::Linked(external_id),
                None => ExternalCreation::RollbackNeeded(format!(
                    "external catalog response carried no item id: {}",
                    item.raw()
                )),
            },
            Err(e) => ExternalCreation::RollbackNeeded(e.to_string()),
        }
    }

    /// Deletes the provisional product after a failed external step.
    #[tracing::instrument(skip(self))]
    async fn compensate(&self, product_id: ProductId, reason: String) -> CreationOutcome {
        match self.store.delete(product_id).await {
            Ok(_) => {
                metrics::counter!("catalog_creation_rollbacks_total").increment(1);
                tracing::warn!(%product_id, %reason, "product creation rolled back");
                CreationOutcome::RolledBack { reason }
            }
            Err(e) => {
                metrics::counter!("catalog_orphaned_records_total").increment(1);
                tracing::error!(
                    %product_id,
                    %reason,
                    rollback_error = %e,
                    "rollback failed, product has no external counterpart"
                );
                CreationOutcome::RollbackFailed {
                    product_id,
                    reason,
                    rollback_error: e.to_string(),
                }
            }
        }
    }

    /// Updates a product and mirrors the change to the external catalog.
    ///
    /// The store write is authoritative. The mirror is attempted once if
    /// the product is linked; its failure is logged and reported in
    /// [`UpdateOutcome::mirror`] but never returned as an error.
    #[tracing::instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<UpdateOutcome, SyncError> {
        let fields = input.validate()?;

        if self.store.find_by_id(id).await?.is_none() {
            return Err(SyncError::NotFound(id));
        }

        let record = self
            .store
            .find_and_update(id, ProductUpdate::fields(fields))
            .await?
            .ok_or(SyncError::NotFound(id))?;
        metrics::counter!("catalog_products_updated_total").increment(1);

        let mirror = self.mirror(&record).await;
        match &mirror {
            MirrorOutcome::Synced(external_id) => {
                tracing::debug!(product_id = %id, %external_id, "external item updated");
            }
            MirrorOutcome::Skipped => {
                tracing::debug!(product_id = %id, "product not linked, mirror skipped");
            }
            MirrorOutcome::Failed {
                external_id,
                reason,
            } => {
                metrics::counter!("catalog_mirror_failures_total").increment(1);
                tracing::warn!(
                    product_id = %id,
                    %external_id,
                    %reason,
                    "external item update failed, continuing with store update"
                );
            }
        }

        Ok(UpdateOutcome { record, mirror })
    }

    /// Pushes the record's fields to its external item, if any.
    async fn mirror(&self, record: &ProductRecord) -> MirrorOutcome {
        let Some(external_id) = record.external_id.clone() else {
            return MirrorOutcome::Skipped;
        };

        match self
            .external
            .update_item(&external_id, &record.fields())
            .await
        {
            Ok(_) => MirrorOutcome::Synced(external_id),
            Err(e) => MirrorOutcome::Failed {
                external_id,
                reason: e.to_string(),
            },
        }
    }
}
