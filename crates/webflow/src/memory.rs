//! In-memory external catalog for tests and local runs.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use common::ExternalItemId;
use domain::ProductFields;
use serde_json::{Value, json};
use tokio::sync::RwLock;

use crate::catalog::{ExternalCatalog, ItemList, ItemResponse};
use crate::error::WebflowError;

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    items: BTreeMap<String, ProductFields>,
    next_id: u32,
}

/// In-memory external catalog with failure injection.
///
/// Item IDs are handed out sequentially as `ext-1`, `ext-2`, ...
#[derive(Debug, Clone, Default)]
pub struct InMemoryExternalCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
    fail_on_create: Arc<AtomicBool>,
    omit_id_on_create: Arc<AtomicBool>,
    fail_on_update: Arc<AtomicBool>,
    create_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
}

impl InMemoryExternalCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes create calls fail with a 400 validation error.
    pub fn set_fail_on_create(&self, fail: bool) {
        self.fail_on_create.store(fail, Ordering::SeqCst);
    }

    /// Makes create calls succeed with a response that carries no item ID.
    pub fn set_omit_id_on_create(&self, omit: bool) {
        self.omit_id_on_create.store(omit, Ordering::SeqCst);
    }

    /// Makes update calls fail with a 500 error.
    pub fn set_fail_on_update(&self, fail: bool) {
        self.fail_on_update.store(fail, Ordering::SeqCst);
    }

    /// Number of items currently stored.
    pub async fn item_count(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Fields of a stored item.
    pub async fn item(&self, item_id: &ExternalItemId) -> Option<ProductFields> {
        self.state.read().await.items.get(item_id.as_str()).cloned()
    }

    /// Number of create calls received, including failed ones.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of update calls received, including failed ones.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn item_json(id: &str, fields: &ProductFields) -> Value {
        json!({
            "id": id,
            "isArchived": false,
            "isDraft": false,
            "fieldData": {
                "name": fields.name,
                "price": fields.price,
                "description": fields.description,
                "stock": fields.stock,
            }
        })
    }
}

#[async_trait]
impl ExternalCatalog for InMemoryExternalCatalog {
    async fn create_item(&self, fields: &ProductFields) -> Result<ItemResponse, WebflowError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_create.load(Ordering::SeqCst) {
            return Err(WebflowError::Api {
                status: 400,
                body: json!({ "code": "validation_error", "message": "Validation Failure" }),
            });
        }

        let mut state = self.state.write().await;
        if self.omit_id_on_create.load(Ordering::SeqCst) {
            return Ok(ItemResponse::new(json!({ "fieldData": {} })));
        }

        state.next_id += 1;
        let id = format!("ext-{}", state.next_id);
        state.items.insert(id.clone(), fields.clone());

        Ok(ItemResponse::new(Self::item_json(&id, fields)))
    }

    async fn update_item(
        &self,
        item_id: &ExternalItemId,
        fields: &ProductFields,
    ) -> Result<ItemResponse, WebflowError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_update.load(Ordering::SeqCst) {
            return Err(WebflowError::Api {
                status: 500,
                body: json!({ "message": "Internal Server Error" }),
            });
        }

        let mut state = self.state.write().await;
        let Some(item) = state.items.get_mut(item_id.as_str()) else {
            return Err(not_found(item_id));
        };
        *item = fields.clone();

        Ok(ItemResponse::new(Self::item_json(item_id.as_str(), fields)))
    }

    async fn get_item(&self, item_id: &ExternalItemId) -> Result<ItemResponse, WebflowError> {
        let state = self.state.read().await;
        state
            .items
            .get(item_id.as_str())
            .map(|fields| ItemResponse::new(Self::item_json(item_id.as_str(), fields)))
            .ok_or_else(|| not_found(item_id))
    }

    async fn list_items(&self) -> Result<ItemList, WebflowError> {
        let state = self.state.read().await;
        let items: Vec<_> = state
            .items
            .iter()
            .map(|(id, fields)| ItemResponse::new(Self::item_json(id, fields)))
            .collect();

        Ok(ItemList {
            total: Some(items.len() as u64),
            items,
        })
    }
}

fn not_found(item_id: &ExternalItemId) -> WebflowError {
    WebflowError::Api {
        status: 404,
        body: json!({ "code": "resource_not_found", "message": format!("Item {item_id} not found") }),
    }
}
