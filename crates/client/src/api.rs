//! Catalog backend API
//!
//! Two read-only operations:
//!
//! - `GET /api/entities/search?q=&method=&page=&limit=`: paginated entity
//!   search scoped to one HTTP method
//! - `GET /api/entity/{id}`: full detail record for one entity
//!
//! Both return JSON and carry no authentication. Responses are decoded into
//! the `atlas_catalog` wire types.

use serde::de::DeserializeOwned;

use atlas_catalog::{EntityDetails, EntityId, HttpMethod, SearchResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// ============================================================================
// SearchRequest
// ============================================================================

/// Parameters of one entity search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    /// Free-text query; empty returns the unfiltered first page
    pub query: &'a str,

    /// Method scope; search is always scoped to exactly one method
    pub method: HttpMethod,

    /// Page to fetch, starting at 1
    pub page: u32,

    /// Results per page
    pub limit: u32,
}

impl SearchRequest<'_> {
    /// Build the query string pairs for this request
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("q", self.query.to_string()),
            ("method", self.method.as_str().to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

// ============================================================================
// CatalogClient
// ============================================================================

/// HTTP client for the catalog backend
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    /// Create a client for the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search catalog entities, one page at a time
    pub async fn search_entities(&self, request: &SearchRequest<'_>) -> ClientResult<SearchResponse> {
        let url = self.endpoint_url("/api/entities/search");
        tracing::debug!(
            query = request.query,
            method = %request.method,
            page = request.page,
            "searching catalog entities"
        );

        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .timeout(self.config.timeout)
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch the full detail record for an entity
    pub async fn entity_details(&self, id: EntityId) -> ClientResult<EntityDetails> {
        let url = self.endpoint_url(&format!("/api/entity/{id}"));
        tracing::debug!(entity_id = id, "fetching entity details");

        let response = self
            .http
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await?;

        decode(response).await
    }

    /// Join an endpoint path onto the configured base URL
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// Check the status and decode the JSON body
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            url,
        });
    }

    response.json::<T>().await.map_err(|e| ClientError::Decode {
        url,
        message: e.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_pairs() {
        let request = SearchRequest {
            query: "cust",
            method: HttpMethod::Get,
            page: 2,
            limit: 20,
        };
        let pairs = request.query_pairs();
        assert_eq!(
            pairs,
            [
                ("q", "cust".to_string()),
                ("method", "GET".to_string()),
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_is_preserved() {
        // An empty query still goes on the wire; the backend treats it as
        // "unfiltered first page"
        let request = SearchRequest {
            query: "",
            method: HttpMethod::Delete,
            page: 1,
            limit: 20,
        };
        assert_eq!(request.query_pairs()[0], ("q", String::new()));
    }

    #[test]
    fn test_endpoint_url_joining() {
        let client = CatalogClient::new(ClientConfig::new("http://localhost:8080"));
        assert_eq!(
            client.endpoint_url("/api/entity/42"),
            "http://localhost:8080/api/entity/42"
        );

        // Trailing slash on the base URL does not double up
        let client = CatalogClient::new(ClientConfig::new("http://localhost:8080/"));
        assert_eq!(
            client.endpoint_url("/api/entities/search"),
            "http://localhost:8080/api/entities/search"
        );
    }
}
