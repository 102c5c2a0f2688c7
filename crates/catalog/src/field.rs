//! Field definitions for entity filters and payload/response attributes
//!
//! The backend returns fields in two shapes: a bare name string, or a
//! structured object carrying the name under `key` plus an optional
//! `required` marker. Both shapes render identically except for the marker,
//! so they are one sum type resolved through two pure accessors.

use serde::{Deserialize, Serialize};

// ============================================================================
// Field
// ============================================================================

/// A named attribute of an entity's filters, payload, or response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// Bare field name, e.g. `"customer_id"`
    Name(String),

    /// Structured form with a required marker
    Keyed {
        /// Field name
        key: String,
        /// Whether the field must be supplied; absent means optional
        #[serde(default)]
        required: bool,
    },
}

impl Field {
    /// Create a bare field
    pub fn bare(name: impl Into<String>) -> Self {
        Field::Name(name.into())
    }

    /// Create a structured field
    pub fn keyed(key: impl Into<String>, required: bool) -> Self {
        Field::Keyed {
            key: key.into(),
            required,
        }
    }

    /// Get the display label for this field
    pub fn label(&self) -> &str {
        match self {
            Field::Name(name) => name,
            Field::Keyed { key, .. } => key,
        }
    }

    /// Whether this field is marked required
    ///
    /// Only the structured form with `required = true` qualifies; bare names
    /// and structured forms without the marker are optional.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Keyed { required: true, .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
