use serde::Deserialize;
use serde_json::Value;

use super::ProductFields;
use crate::error::ValidationError;

/// Unvalidated product data as received from a client.
///
/// Every field is optional and loosely typed so that a missing field or a
/// wrong JSON type surfaces as a [`ValidationError`] rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub stock: Option<Value>,
}

impl ProductInput {
    /// Builds an input carrying all four fields.
    pub fn from_fields(fields: &ProductFields) -> Self {
        Self {
            name: Some(Value::from(fields.name.clone())),
            price: Some(Value::from(fields.price)),
            description: Some(Value::from(fields.description.clone())),
            stock: Some(Value::from(fields.stock)),
        }
    }

    /// Checks that all four fields are present and well-typed.
    ///
    /// Missing (or `null`) fields are all reported together.
    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("price", &self.price),
            ("description", &self.description),
            ("stock", &self.stock),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(ProductFields {
            name: text_field("name", self.name.as_ref())?,
            price: price_field(self.price.as_ref())?,
            description: text_field("description", self.description.as_ref())?,
            stock: stock_field(self.stock.as_ref())?,
        })
    }
}

fn text_field(field: &'static str, value: Option<&Value>) -> Result<String, ValidationError> {
    let text = value
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidType {
            field,
            expected: "a string",
        })?;

    if text.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(text.to_string())
}

fn price_field(value: Option<&Value>) -> Result<f64, ValidationError> {
    value
        .and_then(Value::as_f64)
        .filter(|price| price.is_finite())
        .ok_or(ValidationError::InvalidType {
            field: "price",
            expected: "a number",
        })
}

fn stock_field(value: Option<&Value>) -> Result<i64, ValidationError> {
    let invalid = ValidationError::InvalidType {
        field: "stock",
        expected: "a whole number",
    };
    let Some(value) = value else {
        return Err(invalid);
    };
    if let Some(stock) = value.as_i64() {
        return Ok(stock);
    }

    // Clients may encode counts as floats, e.g. `5.0`
    value
        .as_f64()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64)
        .map(|v| v as i64)
        .ok_or(invalid)
}
