use async_trait::async_trait;
use domain::{ProductFields, ProductRecord};

use crate::{ExternalItemId, Page, PageRequest, ProductId, Result};

/// Changes applied to an existing product by [`CatalogStore::find_and_update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// New values for the synchronized fields.
    pub fields: Option<ProductFields>,

    /// External item to link the product to.
    pub external_id: Option<ExternalItemId>,
}

impl ProductUpdate {
    /// Replaces the synchronized fields.
    pub fn fields(fields: ProductFields) -> Self {
        Self {
            fields: Some(fields),
            external_id: None,
        }
    }

    /// Links the product to an external item.
    pub fn link(external_id: ExternalItemId) -> Self {
        Self {
            fields: None,
            external_id: Some(external_id),
        }
    }
}

/// Core trait for catalog store implementations.
///
/// All implementations must be thread-safe (Send + Sync). Every method is
/// a single independently atomic operation; there are no transactions
/// spanning calls.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persists a new product and returns it with its store-assigned ID.
    async fn insert(&self, fields: ProductFields) -> Result<ProductRecord>;

    /// Retrieves a product by ID.
    ///
    /// Returns None if the product doesn't exist.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<ProductRecord>>;

    /// Applies `update` to a product and returns the updated record.
    ///
    /// Returns None if the product doesn't exist.
    async fn find_and_update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>>;

    /// Deletes a product.
    ///
    /// Returns true if a record was removed.
    async fn delete(&self, id: ProductId) -> Result<bool>;

    /// Lists products newest first, together with the total product count.
    async fn list(&self, request: PageRequest) -> Result<Page<ProductRecord>>;
}
