//! Request bodies sent to the Webflow items endpoints.

use domain::ProductFields;
use serde_json::{Map, Value};

/// Names of the publication flags, which differ between API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagNames {
    pub archived: &'static str,
    pub draft: &'static str,
}

impl FlagNames {
    /// Picks the flag names for an `accept-version` value.
    ///
    /// Major version 1 uses the underscore-prefixed system fields; later
    /// versions use the `is*` spelling.
    pub fn for_api_version(api_version: &str) -> Self {
        let major = api_version.split('.').next().unwrap_or_default().trim();
        if major == "1" {
            Self {
                archived: "_archived",
                draft: "_draft",
            }
        } else {
            Self {
                archived: "isArchived",
                draft: "isDraft",
            }
        }
    }
}

/// Builds `{"fields": {...}}` for a create or update call.
///
/// Items are always published: both flags are sent as `false`.
pub fn item_payload(fields: &ProductFields, api_version: &str) -> Value {
    let flags = FlagNames::for_api_version(api_version);

    let mut item = Map::new();
    item.insert("name".to_string(), Value::from(fields.name.clone()));
    item.insert("price".to_string(), Value::from(fields.price));
    item.insert(
        "description".to_string(),
        Value::from(fields.description.clone()),
    );
    item.insert("stock".to_string(), Value::from(fields.stock));
    item.insert(flags.archived.to_string(), Value::Bool(false));
    item.insert(flags.draft.to_string(), Value::Bool(false));

    let mut body = Map::new();
    body.insert("fields".to_string(), Value::Object(item));
    Value::Object(body)
}
