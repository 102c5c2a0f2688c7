//! Atlas
//!
//! Desktop explorer for browsing an external API catalog.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    println!();
    println!("  Atlas - API catalog explorer");
    println!();

    // Launch the Dioxus desktop application
    atlas_ui::launch();
}
