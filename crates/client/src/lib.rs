//! # Atlas Client
//!
//! HTTP client for the Atlas catalog backend.
//!
//! The backend exposes two read-only, idempotent JSON endpoints: a paginated
//! entity search and an entity detail fetch. This crate wraps them behind
//! [`CatalogClient`] with typed errors and a small configuration surface.

pub mod api;
pub mod config;
pub mod error;

// Re-export commonly used items at crate root
pub use api::{CatalogClient, SearchRequest};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
