use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use domain::{ProductFields, ProductRecord};
use tokio::sync::RwLock;

use crate::{
    Page, PageRequest, ProductId, Result, StoreError,
    store::{CatalogStore, ProductUpdate},
};

/// In-memory catalog store implementation for testing.
///
/// Records are kept in insertion order and the store provides the same
/// interface as the PostgreSQL implementation. Failures can be injected to
/// exercise callers' error handling.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    products: Arc<RwLock<Vec<ProductRecord>>>,
    unavailable: Arc<AtomicBool>,
    fail_on_delete: Arc<AtomicBool>,
}

impl InMemoryCatalogStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Makes subsequent deletes fail while other calls keep working.
    pub fn set_fail_on_delete(&self, fail: bool) {
        self.fail_on_delete.store(fail, Ordering::SeqCst);
    }

    /// Returns the total number of products stored.
    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns the number of products whose fields equal `fields`.
    pub async fn count_matching(&self, fields: &ProductFields) -> usize {
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.matches(fields))
            .count()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn insert(&self, fields: ProductFields) -> Result<ProductRecord> {
        self.check_available()?;

        let now = Utc::now();
        let record = ProductRecord {
            id: ProductId::new(),
            name: fields.name,
            price: fields.price,
            description: fields.description,
            stock: fields.stock,
            external_id: None,
            created_at: now,
            updated_at: now,
        };

        self.products.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<ProductRecord>> {
        self.check_available()?;

        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_and_update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>> {
        self.check_available()?;

        let mut products = self.products.write().await;
        let Some(record) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(fields) = update.fields {
            record.name = fields.name;
            record.price = fields.price;
            record.description = fields.description;
            record.stock = fields.stock;
        }
        if let Some(external_id) = update.external_id {
            record.external_id = Some(external_id);
        }
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        self.check_available()?;
        if self.fail_on_delete.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "delete of product {id} rejected"
            )));
        }

        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn list(&self, request: PageRequest) -> Result<Page<ProductRecord>> {
        self.check_available()?;

        let products = self.products.read().await;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items: Vec<_> = products
            .iter()
            .rev()
            .skip(offset)
            .take(request.limit() as usize)
            .cloned()
            .collect();

        Ok(Page {
            items,
            total: products.len() as u64,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExternalItemId;

    fn widget() -> ProductFields {
        ProductFields::new("Widget", 9.99, "A widget", 5)
    }

    #[tokio::test]
    async fn insert_assigns_id_and_leaves_unlinked() {
        let store = InMemoryCatalogStore::new();
        let record = store.insert(widget()).await.unwrap();

        assert!(record.matches(&widget()));
        assert!(record.external_id.is_none());
        assert_eq!(store.product_count().await, 1);

        let found = store.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = InMemoryCatalogStore::new();
        assert!(store.find_by_id(ProductId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_fields_keeps_external_id() {
        let store = InMemoryCatalogStore::new();
        let record = store.insert(widget()).await.unwrap();
        store
            .find_and_update(record.id, ProductUpdate::link(ExternalItemId::new("ext-1")))
            .await
            .unwrap();

        let changed = ProductFields::new("Widget v2", 12.5, "A better widget", 3);
        let updated = store
            .find_and_update(record.id, ProductUpdate::fields(changed.clone()))
            .await
            .unwrap()
            .unwrap();

        assert!(updated.matches(&changed));
        assert_eq!(updated.external_id, Some(ExternalItemId::new("ext-1")));
        assert!(updated.updated_at >= record.updated_at);
        assert_eq!(updated.created_at, record.created_at);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = InMemoryCatalogStore::new();
        let result = store
            .find_and_update(ProductId::new(), ProductUpdate::fields(widget()))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.product_count().await, 0);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryCatalogStore::new();
        let record = store.insert(widget()).await.unwrap();

        assert!(store.delete(record.id).await.unwrap());
        assert!(!store.delete(record.id).await.unwrap());
        assert_eq!(store.product_count().await, 0);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = InMemoryCatalogStore::new();
        for i in 0..3 {
            store
                .insert(ProductFields::new(format!("P{i}"), 1.0, "d", i))
                .await
                .unwrap();
        }

        let page = store.list(PageRequest::default()).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P2", "P1", "P0"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn list_second_page() {
        let store = InMemoryCatalogStore::new();
        for i in 0..12 {
            store
                .insert(ProductFields::new(format!("P{i}"), 1.0, "d", i))
                .await
                .unwrap();
        }

        let page = store.list(PageRequest::new(2, 5)).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P6", "P5", "P4", "P3", "P2"]);
        assert_eq!(page.total, 12);
        assert_eq!(page.pages(), 3);
    }

    #[tokio::test]
    async fn list_past_the_end_is_empty() {
        let store = InMemoryCatalogStore::new();
        store.insert(widget()).await.unwrap();

        let page = store.list(PageRequest::new(5, 10)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = InMemoryCatalogStore::new();
        store.set_unavailable(true);

        assert!(matches!(
            store.insert(widget()).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.list(PageRequest::default()).await.is_err());
        assert!(store.find_by_id(ProductId::new()).await.is_err());
    }

    #[tokio::test]
    async fn fail_on_delete_keeps_record() {
        let store = InMemoryCatalogStore::new();
        let record = store.insert(widget()).await.unwrap();
        store.set_fail_on_delete(true);

        assert!(store.delete(record.id).await.is_err());
        assert_eq!(store.count_matching(&widget()).await, 1);
    }
}
