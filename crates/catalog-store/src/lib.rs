//! Catalog store client.
//!
//! The store is the source of truth for product identity. Each call is
//! independently atomic; nothing here spans multiple calls.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod store;

pub use common::{ExternalItemId, ProductId};
pub use error::{Result, StoreError};
pub use memory::InMemoryCatalogStore;
pub use postgres::PostgresCatalogStore;
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, Page, PageRequest};
pub use store::{CatalogStore, ProductUpdate};
