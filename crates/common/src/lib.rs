//! Identifier types shared across the catalog sync workspace.

pub mod types;

pub use types::{ExternalItemId, InvalidProductId, ProductId};
