//! HTTP methods for catalog entities
//!
//! Every entity in the catalog is exposed under exactly one HTTP method, and
//! nested entities are grouped per method. The set is fixed; the backend
//! serializes methods as their uppercase names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// HttpMethod
// ============================================================================

/// The HTTP methods the catalog exposes entities under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read a resource
    Get,
    /// Replace a resource
    Put,
    /// Partially update a resource
    Patch,
    /// Create a resource
    Post,
    /// Remove a resource
    Delete,
}

impl HttpMethod {
    /// Get the uppercase wire name of this method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Get all methods in display order
    pub fn all() -> [HttpMethod; 5] {
        [
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Post,
            HttpMethod::Delete,
        ]
    }

    /// Whether this method carries a request payload
    pub fn has_payload(&self) -> bool {
        matches!(self, HttpMethod::Put | HttpMethod::Patch | HttpMethod::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown method name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "POST" => Ok(HttpMethod::Post),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
