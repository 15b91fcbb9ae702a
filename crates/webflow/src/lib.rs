//! External catalog synchronization client.
//!
//! The Webflow CMS keeps a mirror of the product catalog for presentation.
//! This crate provides:
//! - `ExternalCatalog`: the operations the sync coordinator relies on
//! - `WebflowClient`: an HTTPS+JSON implementation against the Webflow API
//! - `InMemoryExternalCatalog`: a test double with failure injection
//!
//! Every call is a single request with no retry and no backoff.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod payload;
pub mod probe;

pub use catalog::{ExternalCatalog, ItemList, ItemResponse};
pub use client::WebflowClient;
pub use config::WebflowConfig;
pub use error::WebflowError;
pub use memory::InMemoryExternalCatalog;
pub use probe::check_connection;
