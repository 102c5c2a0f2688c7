//! # UI Hooks
//!
//! Custom Dioxus hooks for the Atlas explorer UI.
//!
//! This module provides reusable hooks for:
//! - Debouncing free-text input (search box)

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_debounce;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_debounce::{DEBOUNCE, Debouncer, use_debouncer};
