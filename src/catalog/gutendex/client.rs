//! Gutendex HTTP client
//!
//! Handles communication with the Gutendex web service (a JSON front end
//! for the Project Gutenberg catalog).
//! See: https://gutendex.com/

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, SearchPayload};
use crate::config::CatalogConfig;

/// Gutendex API client
pub struct GutendexClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string sent with every request
const USER_AGENT: &str = concat!("BookMinder/", env!("CARGO_PKG_VERSION"));

impl GutendexClient {
    /// Create a client from the catalog section of the config
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog and return the first page of results
    pub async fn search(&self, query: &str) -> Result<SearchPayload, CatalogError> {
        let response = self.send_search_request(query).await?;
        tracing::debug!(
            query,
            total = response.count,
            page = response.results.len(),
            "Search completed"
        );
        Ok(adapter::to_payload(response))
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/books/?search={}",
            self.base_url,
            urlencoding::encode(query.trim())
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(&self, query: &str) -> Result<dto::SearchResponse, CatalogError> {
        let url = self.search_url(query);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(CatalogError::ApiError(error.detail));
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> GutendexClient {
        let config = CatalogConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        GutendexClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = GutendexClient::new(&CatalogConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://gutendex.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = client_for("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = client_for("http://localhost:8080");
        assert_eq!(
            client.search_url("  pride & prejudice "),
            "http://localhost:8080/books/?search=pride%20%26%20prejudice"
        );
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("BookMinder/"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine
        let client = client_for("http://127.0.0.1:9");
        let result = client.search("dune").await;
        assert!(matches!(result, Err(CatalogError::Network(_))));
    }
}
