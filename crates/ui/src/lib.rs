//! # Atlas UI
//!
//! Dioxus Desktop UI for the Atlas API catalog explorer.
//!
//! This crate provides the explorer interface for browsing an external API
//! catalog by HTTP method, entity, and nested entity.
//!
//! ## Features
//!
//! - Method-scoped entity search with debounced free-text input
//! - Infinite scroll through paginated search results
//! - Entity detail view with filters, payload, and response fields
//! - Nested-entity navigation under the selected method
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use atlas_catalog;
pub use atlas_client;

// Re-export main components
pub use app::{App, load_details, retry_search, run_search};
pub use components::{DetailsPanel, EntityList, FieldList, FieldRow, MethodBadge, MethodSelect};
pub use state::{
    DetailState, DetailTicket, DetailView, EXPLORER, ExplorerState, SearchState, SearchTicket,
};

// Re-export hooks
pub use hooks::{DEBOUNCE, Debouncer, use_debouncer};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Atlas";

/// Application display title
pub const TITLE: &str = "Atlas - API Catalog Explorer";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Atlas desktop application
///
/// This is the main entry point for the Dioxus desktop app.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     atlas_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(720.0, 540.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
