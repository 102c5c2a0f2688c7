//! # Atlas Catalog
//!
//! Data model for the Atlas API catalog explorer.
//!
//! This crate defines the wire types returned by the catalog backend and the
//! small pure helpers the UI resolves them through:
//!
//! - **Method**: the fixed set of HTTP methods an entity can be exposed under
//! - **Entity**: search summaries, full detail records, and nested entities
//! - **Field**: filter/payload/response attributes, bare or structured
//! - **Search**: paginated search responses and the scroll cursor
//!

pub mod entity;
pub mod field;
pub mod method;
pub mod search;

// Re-export commonly used items at crate root
pub use entity::{EntityDetails, EntityId, EntityOption, NestedEntity};
pub use field::Field;
pub use method::{HttpMethod, ParseMethodError};
pub use search::{Cursor, PAGE_SIZE, Pagination, SearchResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
