//! Search responses and pagination
//!
//! The backend pages search results; the UI keeps a [`Cursor`] tracking the
//! scroll position within the result stream for the current method + query
//! combination.

use serde::{Deserialize, Serialize};

use crate::entity::EntityOption;

// ============================================================================
// Constants
// ============================================================================

/// Fixed number of results per search page
pub const PAGE_SIZE: u32 = 20;

// ============================================================================
// Wire Types
// ============================================================================

/// Pagination envelope on a search response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Whether more pages exist beyond the one returned
    #[serde(default)]
    pub has_more: bool,
}

/// Response body of the entity search endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// One page of matching entities, in backend order
    #[serde(default)]
    pub results: Vec<EntityOption>,

    /// Paging state for the stream
    #[serde(default)]
    pub pagination: Pagination,
}

// ============================================================================
// Cursor
// ============================================================================

/// Scroll position within a search result stream
///
/// Valid pages start at 1. The cursor belongs to a single method + query
/// combination; changing either resets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Most recently loaded page
    pub page: u32,

    /// Whether the backend reported more pages after `page`
    pub has_more: bool,

    /// Query text the stream was searched with
    pub query: String,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: false,
            query: String::new(),
        }
    }
}

impl Cursor {
    /// Create a cursor at the start of an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to page 1 of a stream for the given query
    pub fn reset(&mut self, query: impl Into<String>) {
        self.page = 1;
        self.has_more = false;
        self.query = query.into();
    }

    /// The page number a follow-up request should ask for
    pub fn next_page(&self) -> u32 {
        self.page + 1
    }

    /// Record a loaded page and the backend's has-more flag
    pub fn advance_to(&mut self, page: u32, has_more: bool) {
        self.page = page.max(1);
        self.has_more = has_more;
    }
}

// ============================================================================
// Tests
// ============================================================================
