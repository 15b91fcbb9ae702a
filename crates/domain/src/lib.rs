//! Domain layer for the catalog sync service.
//!
//! This crate provides the product model shared by the store, the external
//! catalog client and the sync coordinator:
//! - `ProductFields`: the four synchronized fields
//! - `ProductRecord`: a persisted product, optionally linked to an external item
//! - `ProductInput`: an unvalidated create/update request body

pub mod error;
pub mod product;

pub use common::{ExternalItemId, ProductId};
pub use error::ValidationError;
pub use product::{ProductFields, ProductInput, ProductRecord};
