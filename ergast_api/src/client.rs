//! HTTP client for the Ergast API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    format::{format_records, FormatOptions, Record},
    query::{QuerySpec, BASE_URL},
    Error,
};

const USER_AGENT: &str = concat!("ergast_api/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Ergast API.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout
/// and asks for the `.json` rendering of the query's resource.
pub struct Client {
    /// Base URL for the API. Defaults to `https://ergast.com/api/f1`.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Ergast API.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for mirrors and for
    /// testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &QuerySpec) -> Result<Url, Error> {
        Url::parse(format!("{}{}.json", &self.base_api_url, query.path()).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::transport(None, format!("invalid URL: {}", e))
        })
    }

    async fn get(&self, url: Url) -> Result<Value, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::transport(None, e.to_string())
            })?;
        tracing::debug!("GET {}", url);
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::transport(None, e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::transport(Some(status.as_u16()), e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::transport(Some(status.as_u16()), snippet));
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::malformed_response(format!("invalid JSON: {}", e))
        })
    }

    /// Fetches the raw response document for a query.
    pub async fn fetch(&self, query: &QuerySpec) -> Result<Value, Error> {
        let url = self.get_url(query)?;
        self.get(url).await
    }

    /// Fetches a query and flattens the response, dropping `url` fields.
    pub async fn execute(&self, query: &QuerySpec) -> Result<Vec<Record>, Error> {
        self.execute_with(query, FormatOptions::default()).await
    }

    /// Fetches a query and flattens the response with the given options.
    pub async fn execute_with(
        &self,
        query: &QuerySpec,
        options: FormatOptions,
    ) -> Result<Vec<Record>, Error> {
        let document = self.fetch(query).await?;
        format_records(query.kind(), &document, options)
    }
}

/// Runs a query against the production API with default options.
pub async fn execute(query: &QuerySpec) -> Result<Vec<Record>, Error> {
    Client::new().execute(query).await
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
