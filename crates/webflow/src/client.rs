//! HTTPS client for the Webflow collection items API.

use async_trait::async_trait;
use common::ExternalItemId;
use domain::ProductFields;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::catalog::{ExternalCatalog, ItemList, ItemResponse};
use crate::config::WebflowConfig;
use crate::error::WebflowError;
use crate::payload::item_payload;

/// Webflow API client bound to a single collection.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WebflowClient {
    http: Client,
    config: WebflowConfig,
}

impl WebflowClient {
    /// Creates a client that authenticates every request with the
    /// configured bearer token and pins the configured API version.
    pub fn new(config: WebflowConfig) -> Result<Self, WebflowError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert("accept-version", HeaderValue::from_str(&config.api_version)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self { http, config })
    }

    /// Sends a request and decodes the JSON body.
    ///
    /// Non-success statuses become [`WebflowError::Api`] carrying the
    /// upstream body. An empty success body decodes as `null`.
    async fn send(&self, request: RequestBuilder) -> Result<Value, WebflowError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(WebflowError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ExternalCatalog for WebflowClient {
    #[tracing::instrument(skip(self, fields), fields(collection = %self.config.collection_id))]
    async fn create_item(&self, fields: &ProductFields) -> Result<ItemResponse, WebflowError> {
        let payload = item_payload(fields, &self.config.api_version);
        tracing::debug!(%payload, "sending item payload to Webflow");

        let body = self
            .send(self.http.post(self.config.items_url()).json(&payload))
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Webflow item creation failed"))?;

        let item = ItemResponse::new(body);
        tracing::info!(item_id = ?item.item_id(), "Webflow item created");
        Ok(item)
    }

    #[tracing::instrument(skip(self, fields), fields(collection = %self.config.collection_id))]
    async fn update_item(
        &self,
        item_id: &ExternalItemId,
        fields: &ProductFields,
    ) -> Result<ItemResponse, WebflowError> {
        let payload = item_payload(fields, &self.config.api_version);

        let body = self
            .send(
                self.http
                    .put(self.config.item_url(item_id.as_str()))
                    .json(&payload),
            )
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Webflow item update failed"))?;

        Ok(ItemResponse::new(body))
    }

    #[tracing::instrument(skip(self), fields(collection = %self.config.collection_id))]
    async fn get_item(&self, item_id: &ExternalItemId) -> Result<ItemResponse, WebflowError> {
        let body = self
            .send(self.http.get(self.config.item_url(item_id.as_str())))
            .await?;
        Ok(ItemResponse::new(body))
    }

    #[tracing::instrument(skip(self), fields(collection = %self.config.collection_id))]
    async fn list_items(&self) -> Result<ItemList, WebflowError> {
        let body = self.send(self.http.get(self.config.items_url())).await?;
        if body.is_null() {
            return Ok(ItemList::default());
        }
        Ok(serde_json::from_value(body)?)
    }
}
