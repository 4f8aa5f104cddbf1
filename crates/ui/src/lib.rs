//! # UI Forge Desktop
//!
//! Dioxus desktop shell for the UI Forge visual editor.
//!
//! ## Features
//!
//! - Project dashboard for the signed-in user
//! - Component palette and drag-to-position canvas
//! - Properties panel with content, style and layout fields
//! - Live React + Tailwind code preview, copy, download and export
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod file_ops;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use uiforge_editor;
pub use uiforge_ir;

pub use app::App;
pub use state::{APP_STATE, AppState, CodeTab, StatusLevel, StatusMessage, UiState, View, ViewportMode};

use std::path::PathBuf;

use uiforge_store::StoreConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "UI Forge";

/// Application display title
pub const TITLE: &str = "UI Forge - Visual UI Prototyping";

/// Account the desktop app signs in as
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_NAME: &str = "Demo User";

/// Environment variable naming the store snapshot file
pub const DATA_ENV: &str = "UIFORGE_DATA";

/// Snapshot file used when [`DATA_ENV`] is unset
pub const DEFAULT_DATA_FILE: &str = "uiforge-data.json";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Store configuration for the desktop app, shared with the CLI's
/// `project` commands through [`DATA_ENV`]
pub fn store_config() -> StoreConfig {
    let path = std::env::var_os(DATA_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    StoreConfig::new().with_snapshot_path(path)
}

/// Launch the UI Forge desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     uiforge_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(900.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// The embedded stylesheet
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
