//! Connection settings for the Webflow API.

/// Default Webflow API root.
pub const DEFAULT_BASE_URL: &str = "https://api.webflow.com";

/// Default value of the `accept-version` header.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Credentials and addressing for one Webflow collection.
///
/// Passed explicitly into [`crate::WebflowClient::new`]; nothing is read
/// from the environment here.
#[derive(Clone, PartialEq, Eq)]
pub struct WebflowConfig {
    pub api_key: String,
    pub collection_id: String,
    pub base_url: String,
    pub api_version: String,
}

impl WebflowConfig {
    /// Creates a config for the given collection with default URL and version.
    pub fn new(api_key: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            collection_id: collection_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Overrides the API root (used to point at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the `accept-version` header value.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// URL of the collection's item list.
    pub fn items_url(&self) -> String {
        format!(
            "{}/collections/{}/items",
            self.base_url.trim_end_matches('/'),
            self.collection_id
        )
    }

    /// URL of a single item in the collection.
    pub fn item_url(&self, item_id: &str) -> String {
        format!("{}/{}", self.items_url(), item_id)
    }
}

// The API key never appears in logs.
impl std::fmt::Debug for WebflowConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebflowConfig")
            .field("api_key", &"<redacted>")
            .field("collection_id", &self.collection_id)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}
