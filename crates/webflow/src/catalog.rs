//! External catalog trait and response types.

use async_trait::async_trait;
use common::ExternalItemId;
use domain::ProductFields;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WebflowError;

/// A single item as returned by the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemResponse(Value);

impl ItemResponse {
    /// Wraps a raw response body.
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// The item's identity, if the response carries a recognizable one.
    ///
    /// Reads `id`, falling back to the legacy `_id`. Blank strings do not
    /// count as an identity.
    pub fn item_id(&self) -> Option<ExternalItemId> {
        ["id", "_id"]
            .iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|id| !id.is_empty())
            .map(ExternalItemId::new)
    }

    /// The raw response body.
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// A collection listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<ItemResponse>,

    /// Collection size when the API reports one.
    #[serde(default)]
    pub total: Option<u64>,
}

impl ItemList {
    /// IDs of every listed item that has one.
    pub fn item_ids(&self) -> Vec<ExternalItemId> {
        self.items.iter().filter_map(ItemResponse::item_id).collect()
    }
}

/// Operations on the external catalog used by the sync coordinator.
///
/// Every call is attempted exactly once. Callers decide whether an error
/// is fatal.
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    /// Creates a published item carrying `fields`.
    async fn create_item(&self, fields: &ProductFields) -> Result<ItemResponse, WebflowError>;

    /// Replaces the fields of an existing item.
    async fn update_item(
        &self,
        item_id: &ExternalItemId,
        fields: &ProductFields,
    ) -> Result<ItemResponse, WebflowError>;

    /// Fetches a single item.
    async fn get_item(&self, item_id: &ExternalItemId) -> Result<ItemResponse, WebflowError>;

    /// Lists the items in the collection.
    async fn list_items(&self) -> Result<ItemList, WebflowError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_item_id_from_id() {
        let item = ItemResponse::new(json!({ "id": "ext-1", "fieldData": {} }));
        assert_eq!(item.item_id(), Some(ExternalItemId::new("ext-1")));
    }

    #[test]
    fn test_item_id_from_legacy_id() {
        let item = ItemResponse::new(json!({ "_id": "580e64008c9a982ac9b8b754" }));
        assert_eq!(
            item.item_id(),
            Some(ExternalItemId::new("580e64008c9a982ac9b8b754"))
        );
    }

    #[test]
    fn test_missing_or_blank_id_is_unrecognized() {
        assert!(ItemResponse::new(json!({})).item_id().is_none());
        assert!(ItemResponse::new(json!({ "id": "  " })).item_id().is_none());
        assert!(ItemResponse::new(json!({ "id": 42 })).item_id().is_none());
        assert!(ItemResponse::new(Value::Null).item_id().is_none());
    }

    #[test]
    fn test_item_list_deserializes_with_defaults() {
        let list: ItemList = serde_json::from_value(json!({
            "items": [{ "id": "a" }, { "_id": "b" }, { "name": "no id" }],
            "count": 3
        }))
        .unwrap();
        assert_eq!(list.items.len(), 3);
        assert_eq!(
            list.item_ids(),
            vec![ExternalItemId::new("a"), ExternalItemId::new("b")]
        );
        assert_eq!(list.total, None);

        let empty: ItemList = serde_json::from_value(json!({})).unwrap();
        assert!(empty.items.is_empty());
    }
}
