//! Product model.

mod input;

pub use input::ProductInput;

use chrono::{DateTime, Utc};
use common::{ExternalItemId, ProductId};
use serde::{Deserialize, Serialize};

/// The four fields kept in sync between the store and the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
}

impl ProductFields {
    /// Creates a field set without validation.
    ///
    /// Request data should go through [`ProductInput::validate`] instead.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            stock,
        }
    }
}

/// A product as persisted in the catalog store.
///
/// `external_id` stays unset until the external catalog has confirmed
/// creation of the mirrored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    pub external_id: Option<ExternalItemId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Returns a copy of the synchronized fields.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            stock: self.stock,
        }
    }

    /// Returns true if the record has been linked to an external item.
    pub fn is_linked(&self) -> bool {
        self.external_id.is_some()
    }

    /// Returns true if the synchronized fields equal `fields`.
    pub fn matches(&self, fields: &ProductFields) -> bool {
        self.name == fields.name
            && self.price == fields.price
            && self.description == fields.description
            && self.stock == fields.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        let now = Utc::now();
        ProductRecord {
            id: ProductId::new(),
            name: "Widget".to_string(),
            price: 9.99,
            description: "A widget".to_string(),
            stock: 5,
            external_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_fields_roundtrip_through_record() {
        let r = record();
        assert!(r.matches(&r.fields()));
        assert!(!r.matches(&ProductFields::new("Widget", 9.99, "A widget", 6)));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let mut r = record();
        r.external_id = Some(ExternalItemId::new("ext-1"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["externalId"], "ext-1");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("external_id").is_none());
        assert!(r.is_linked());
    }

    #[test]
    fn test_unlinked_record_serializes_null_external_id() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json["externalId"].is_null());
    }
}
