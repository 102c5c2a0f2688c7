//! Entity records returned by the catalog backend
//!
//! Three shapes share this module: the search-result summary
//! (`EntityOption`), the full detail record for a selected entity
//! (`EntityDetails`), and the leaf sub-resources reachable from a parent
//! entity under a specific method (`NestedEntity`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::Field;
use crate::method::HttpMethod;

// ============================================================================
// Identifiers
// ============================================================================

/// Backend-assigned entity identifier
pub type EntityId = u64;

// ============================================================================
// EntityOption
// ============================================================================

/// Search-result summary for a catalog entity
///
/// Ephemeral: the result set is replaced wholesale on a fresh search and
/// appended to when paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityOption {
    /// HTTP method the entity is exposed under
    pub method: HttpMethod,

    /// Entity display name
    pub name: String,

    /// Backend identifier, used for the detail fetch
    pub id: EntityId,

    /// Whether the entity has nested sub-resources
    #[serde(default)]
    pub has_nested: bool,
}

// ============================================================================
// NestedEntity
// ============================================================================

/// A sub-resource reachable from a parent entity under a specific method
///
/// Same shape as [`EntityDetails`] minus the nested map; nested entities are
/// leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedEntity {
    /// Entity display name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Request URL template
    #[serde(default)]
    pub url: String,

    /// Query filters accepted by the entity
    #[serde(default)]
    pub filters: Vec<Field>,

    /// Request payload fields
    #[serde(default)]
    pub payload_fields: Vec<Field>,

    /// Response body fields
    #[serde(default)]
    pub response_fields: Vec<Field>,

    /// Backend identifier
    pub id: EntityId,

    /// HTTP method the entity is exposed under
    pub method: HttpMethod,
}

// ============================================================================
// EntityDetails
// ============================================================================

/// Full record for a selected top-level entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetails {
    /// Entity display name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Request URL template
    #[serde(default)]
    pub url: String,

    /// Query filters accepted by the entity
    #[serde(default)]
    pub filters: Vec<Field>,

    /// Request payload fields
    #[serde(default)]
    pub payload_fields: Vec<Field>,

    /// Response body fields
    #[serde(default)]
    pub response_fields: Vec<Field>,

    /// Backend identifier
    pub id: EntityId,

    /// HTTP method the entity is exposed under
    pub method: HttpMethod,

    /// Nested sub-resources, grouped by the method they are reachable under
    #[serde(default)]
    pub nested_entities: HashMap<HttpMethod, Vec<NestedEntity>>,
}

impl EntityDetails {
    /// Get the nested entities reachable under the given method
    ///
    /// Exact-key lookup: there is no fallback to other methods. The grouping
    /// key is what matters here, not each nested entity's own declared
    /// method.
    pub fn nested_for(&self, method: HttpMethod) -> &[NestedEntity] {
        self.nested_entities
            .get(&method)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any nested entities exist under the given method
    pub fn has_nested_for(&self, method: HttpMethod) -> bool {
        !self.nested_for(method).is_empty()
    }

    /// Find a nested entity under the given method by id
    pub fn find_nested(&self, method: HttpMethod, id: EntityId) -> Option<&NestedEntity> {
        self.nested_for(method).iter().find(|n| n.id == id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nested(name: &str, id: EntityId, method: HttpMethod) -> NestedEntity {
        NestedEntity {
            name: name.to_string(),
            description: None,
            url: format!("/api/{name}"),
            filters: Vec::new(),
            payload_fields: Vec::new(),
            response_fields: Vec::new(),
            id,
            method,
        }
    }

    fn details_with_nested() -> EntityDetails {
        let mut nested_entities = HashMap::new();
        nested_entities.insert(
            HttpMethod::Get,
            vec![
                nested("orders", 10, HttpMethod::Get),
                nested("invoices", 11, HttpMethod::Get),
            ],
        );
        EntityDetails {
            name: "customers".to_string(),
            description: Some("Customer registry".to_string()),
            url: "/api/customers".to_string(),
            filters: vec![Field::bare("status")],
            payload_fields: Vec::new(),
            response_fields: vec![Field::keyed("id", true)],
            id: 42,
            method: HttpMethod::Get,
            nested_entities,
        }
    }

    #[test]
    fn test_nested_for_exact_key() {
        let details = details_with_nested();
        let nested = details.nested_for(HttpMethod::Get);
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].name, "orders");
        assert_eq!(nested[1].name, "invoices");
    }

    #[test]
    fn test_nested_for_missing_method_is_empty() {
        let details = details_with_nested();
        // No fallback to other methods
        assert!(details.nested_for(HttpMethod::Post).is_empty());
        assert!(!details.has_nested_for(HttpMethod::Delete));
    }

    #[test]
    fn test_find_nested() {
        let details = details_with_nested();
        assert_eq!(
            details.find_nested(HttpMethod::Get, 11).map(|n| n.name.as_str()),
            Some("invoices")
        );
        assert_eq!(details.find_nested(HttpMethod::Get, 99), None);
        assert_eq!(details.find_nested(HttpMethod::Post, 10), None);
    }

    #[test]
    fn test_decode_details() {
        let json = r#"{
            "name": "payments",
            "description": "Payment records",
            "url": "/api/payments",
            "filters": ["status", {"key": "min_amount"}],
            "payload_fields": [{"key": "amount", "required": true}],
            "response_fields": ["id", "amount"],
            "id": 7,
            "method": "POST",
            "nested_entities": {
                "GET": [{
                    "name": "refunds",
                    "url": "/api/payments/refunds",
                    "id": 8,
                    "method": "GET"
                }]
            }
        }"#;

        let details: EntityDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.id, 7);
        assert_eq!(details.method, HttpMethod::Post);
        assert_eq!(details.filters.len(), 2);
        assert!(details.payload_fields[0].is_required());

        let nested = details.nested_for(HttpMethod::Get);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].name, "refunds");
        // Fields missing from the payload decode as empty
        assert!(nested[0].filters.is_empty());
    }

    #[test]
    fn test_decode_option_defaults_has_nested() {
        let json = r#"{"method": "GET", "name": "customers", "id": 42}"#;
        let option: EntityOption = serde_json::from_str(json).unwrap();
        assert!(!option.has_nested);
    }
}
