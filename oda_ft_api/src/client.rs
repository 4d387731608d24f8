//! HTTP client for the ODA FT API.

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{Error, Filter};

/// Host of the public ODA FT API.
pub const DEFAULT_BASE_URL: &str = "https://oda.ft.dk";

const USER_AGENT: &str = concat!("odaft/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the ODA FT API.
///
/// Each call to [`Client::fetch`] performs exactly one GET. There is no
/// paging, retry or caching, and no timeout beyond the reqwest default.
pub struct Client {
    /// Base URL for the API. Defaults to `https://oda.ft.dk`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production ODA FT API.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Builds `<base>/api/<resource>?$inlinecount=allpages`, adding
    /// `&$filter=<filter>` when a non-empty filter is given.
    ///
    /// Neither `resource` nor `filter` is escaped; the filter is expected to
    /// be URL-encoded already, as [`Filter`] produces it.
    pub fn build_url(&self, resource: &str, filter: Option<&str>) -> String {
        let mut url = format!(
            "{}/api/{}?$inlinecount=allpages",
            self.base_api_url, resource
        );
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            url.push_str("&$filter=");
            url.push_str(filter);
        }
        url
    }

    /// Fetches `url` and returns the records under the `value` key.
    pub async fn fetch(&self, url: &str) -> Result<Vec<Value>, Error> {
        let body = self.get_json(url).await?;
        extract_value(body)
    }

    /// Like [`Client::fetch`], deserializing each record into `T`.
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, Error> {
        self.fetch(url)
            .await?
            .into_iter()
            .map(|record| {
                serde_json::from_value(record).map_err(|e| {
                    tracing::error!("Failed to deserialize record: {}", e);
                    Error::MalformedResponse(e.to_string())
                })
            })
            .collect()
    }

    /// Fetches every record of `resource` matching `filter`.
    pub async fn get(&self, resource: &str, filter: Option<&Filter>) -> Result<Vec<Value>, Error> {
        let url = self.build_url(resource, filter.map(Filter::as_str));
        self.fetch(&url).await
    }

    /// Like [`Client::get`], deserializing each record into `T`.
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        resource: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<T>, Error> {
        let url = self.build_url(resource, filter.map(Filter::as_str));
        self.fetch_as(&url).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, Error> {
        let url = Url::parse(url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        tracing::debug!(%url, "GET");

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedResponse(e.to_string())
        })
    }
}

/// Takes the `value` array out of a decoded response body.
pub fn extract_value(body: Value) -> Result<Vec<Value>, Error> {
    match body {
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::Array(records)) => Ok(records),
            Some(other) => {
                tracing::error!("'value' is not an array: {}", other);
                Err(Error::MalformedResponse(
                    "'value' is not an array".to_string(),
                ))
            }
            None => {
                tracing::error!("Response has no 'value' key");
                Err(Error::MissingValue)
            }
        },
        other => {
            tracing::error!("Response is not a JSON object: {}", truncate_body(&other.to_string()));
            Err(Error::MissingValue)
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((end, _)) => format!("{}...[truncated]", &body[..end]),
    }
}
