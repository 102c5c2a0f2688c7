//! Client configuration
//!
//! The explorer talks to a single fixed backend; the defaults here cover the
//! common local deployment and can be overridden in code before launch.

use std::time::Duration;

use atlas_catalog::PAGE_SIZE;

// ============================================================================
// Defaults
// ============================================================================

/// Default catalog backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// ClientConfig
// ============================================================================

/// Configuration for [`crate::CatalogClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Results requested per search page
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the search page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
