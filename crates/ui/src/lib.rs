//! # Fleet UI
//!
//! Dioxus Desktop UI for Fleet Dashboard.
//!
//! ## Features
//!
//! - "My Vehicles" grid with add, view, edit, and delete dialogs
//! - Admin overview with fleet totals and every vehicle
//! - Profile editor for phone, city, and state
//! - Sidebar on wide windows, bottom navigation on narrow ones
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use fleet_core;
pub use fleet_model;

pub use app::App;
pub use pages::{AdminVehiclesPage, MyVehiclesPage};
pub use state::{APP_STATE, AppState, Session, UiState};

pub use components::{
    Avatar, ConfirmDeleteDialog, ProfileDialog, Select, SelectOption, TextArea, TextInput,
    VehicleCard, VehicleDetailsDialog, VehicleFormDialog,
};

use fleet_core::AppConfig;
use fleet_model::Services;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Fleet Dashboard";

/// Application display title
pub const TITLE: &str = "Fleet Dashboard - Vehicle Management";

/// Stylesheet embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop application
///
/// `services` backs every data operation; the session identity and window
/// geometry come from `config`.
///
/// # Example
///
/// ```rust,ignore
/// let services = Services::from_store(Arc::new(MemoryStore::new()));
/// fleet_ui::launch(&AppConfig::default(), services);
/// ```
pub fn launch(config: &AppConfig, services: Services) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_context(services)
        .with_context(state::Session::from_config(config))
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(360.0, 560.0)),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.starts_with(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        let styles = get_styles();
        assert!(styles.contains(".vehicle-card"));
        assert!(styles.contains(".bottom-nav"));
        assert!(styles.contains(".feedback--error"));
    }
}
