//! # UI Components
//!
//! Reusable Dioxus components for the Atlas explorer.
//!
//! This module provides the visual building blocks of the two cascading
//! pickers and the detail view:
//! - **MethodSelect**: the five-way HTTP method picker and badge
//! - **EntityList**: search box plus infinitely scrolling result list
//! - **FieldRow**: individual field display with its required marker
//! - **DetailsPanel**: entity/nested-entity record with sectioned fields
//!
//! ## Component Hierarchy
//!
//! ```text
//! App
//! ├── MethodSelect
//! ├── EntityList
//! │   └── EntityRow (multiple)
//! │       └── MethodBadge
//! └── DetailsPanel
//!     ├── DetailBody
//!     │   └── FieldSection → FieldList → FieldRow
//!     └── NestedChip (multiple)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod details_panel;
pub mod entity_list;
pub mod field_row;
pub mod method_select;

// ============================================================================
// Re-exports
// ============================================================================

// Method components
pub use method_select::{MethodBadge, MethodSelect, method_badge_class};

// Entity list components
pub use entity_list::{EntityList, EntityRow, SCROLL_THRESHOLD_PX, near_list_end};

// Field components
pub use field_row::{FieldList, FieldRow, field_summary};

// Details panel
pub use details_panel::DetailsPanel;
