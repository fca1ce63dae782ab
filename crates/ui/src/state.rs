//! Application State Management for Fleet Dashboard
//!
//! Centralized state using Dioxus 0.7 Signals. The dashboard shell state
//! and the feedback slot live in `fleet_model`; this module wraps them with
//! the session and the purely visual state (sidebar, viewport, profile
//! dialog).

use std::time::Duration;

use dioxus::prelude::*;
use fleet_core::{AppConfig, ProviderIdentity, Severity};
use fleet_model::{Dashboard, EditorMode, FeedbackSlot, Layout};

// ============================================================================
// Session
// ============================================================================

/// Signed-in identity plus the settings the shell needs at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub identity: ProviderIdentity,
    pub feedback_duration: Duration,
    pub compact_breakpoint_px: f64,
    pub initial_width: f64,
}

impl Session {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            identity: config.identity.clone(),
            feedback_duration: Duration::from_millis(config.feedback_duration_ms),
            compact_breakpoint_px: config.compact_breakpoint_px,
            initial_width: config.window.width,
        }
    }

    pub fn uid(&self) -> &str {
        &self.identity.uid
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Visual state that never reaches the backend
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub sidebar_expanded: bool,
    /// Last measured width of the window content
    pub viewport_width: f64,
    /// Open profile dialog and its mode
    pub profile_dialog: Option<EditorMode>,
    /// A profile save is running; the dialog cannot close meanwhile
    pub profile_saving: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_expanded: true,
            viewport_width: 1280.0,
            profile_dialog: None,
            profile_saving: false,
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    pub fn open_profile(&mut self, mode: EditorMode) {
        if !self.profile_saving {
            self.profile_dialog = Some(mode);
        }
    }

    /// Close the profile dialog; ignored while a save is running
    pub fn close_profile(&mut self) {
        if !self.profile_saving {
            self.profile_dialog = None;
        }
    }

    /// Returns false when no dialog is open or a save is already running
    pub fn begin_profile_save(&mut self) -> bool {
        if self.profile_saving || self.profile_dialog.is_none() {
            return false;
        }
        self.profile_saving = true;
        true
    }

    /// End a profile save, closing the dialog when it succeeded
    pub fn finish_profile_save(&mut self, saved: bool) {
        self.profile_saving = false;
        if saved {
            self.profile_dialog = None;
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    pub dashboard: Dashboard,
    pub feedback: FeedbackSlot,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, discarding anything left from a previous one
    pub fn start_session(&mut self, session: Session) {
        self.ui.viewport_width = session.initial_width;
        self.session = session;
        self.dashboard = Dashboard::new();
        self.feedback = FeedbackSlot::new();
    }

    /// Layout for the current viewport
    pub fn layout(&self) -> Layout {
        Layout::for_viewport(
            self.ui.viewport_width,
            self.ui.sidebar_expanded,
            self.session.compact_breakpoint_px,
        )
    }

    /// Show a feedback message; returns its id for the expiry timer
    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) -> u64 {
        self.feedback.show(severity, text)
    }

    /// Window title
    pub fn window_title(&self) -> String {
        format!(
            "{} - {}",
            self.dashboard.active_tab().label(),
            crate::TITLE
        )
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to get the signed-in identity
pub fn use_identity() -> ProviderIdentity {
    APP_STATE.read().session.identity.clone()
}

/// Hook to get the current layout
pub fn use_layout() -> Layout {
    APP_STATE.read().layout()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_model::{NavKind, Tab};
    use pretty_assertions::assert_eq;

    fn session(width: f64) -> Session {
        Session {
            initial_width: width,
            ..Session::default()
        }
    }

    #[test]
    fn test_start_session_resets_state() {
        let mut state = AppState::new();
        state.dashboard.set_admin(true);
        state.notify(Severity::Info, "hello");

        state.start_session(session(1000.0));

        assert!(!state.dashboard.is_admin());
        assert!(state.feedback.current().is_none());
        assert_eq!(state.ui.viewport_width, 1000.0);
    }

    #[test]
    fn test_layout_follows_viewport_and_sidebar() {
        let mut state = AppState::new();
        state.start_session(session(1280.0));
        assert_eq!(state.layout().nav, NavKind::Sidebar);
        assert_eq!(state.layout().margin_left, 240.0);

        state.ui.toggle_sidebar();
        assert_eq!(state.layout().margin_left, 68.0);

        state.ui.viewport_width = 640.0;
        let layout = state.layout();
        assert_eq!(layout.nav, NavKind::BottomNav);
        assert_eq!(layout.margin_left, 0.0);
        assert_eq!(layout.padding_bottom, 80.0);
    }

    #[test]
    fn test_profile_dialog() {
        let mut ui = UiState::default();
        assert!(ui.profile_dialog.is_none());

        ui.open_profile(EditorMode::View);
        assert_eq!(ui.profile_dialog, Some(EditorMode::View));

        ui.close_profile();
        assert!(ui.profile_dialog.is_none());
    }

    #[test]
    fn test_profile_dialog_held_open_while_saving() {
        let mut ui = UiState::default();
        assert!(!ui.begin_profile_save());

        ui.open_profile(EditorMode::Edit);
        assert!(ui.begin_profile_save());
        assert!(!ui.begin_profile_save());

        ui.close_profile();
        ui.open_profile(EditorMode::View);
        assert_eq!(ui.profile_dialog, Some(EditorMode::Edit));

        ui.finish_profile_save(false);
        assert_eq!(ui.profile_dialog, Some(EditorMode::Edit));
        assert!(ui.begin_profile_save());
        ui.finish_profile_save(true);
        assert!(ui.profile_dialog.is_none());
        assert!(!ui.profile_saving);
    }

    #[test]
    fn test_window_title() {
        let mut state = AppState::new();
        assert!(state.window_title().starts_with("My Vehicles"));
        state.dashboard.set_admin(true);
        state.dashboard.select_tab(Tab::Admin);
        assert!(state.window_title().starts_with("Dashboard"));
    }

    #[test]
    fn test_session_from_config() {
        let mut config = AppConfig::default();
        config.feedback_duration_ms = 1500;
        let session = Session::from_config(&config);
        assert_eq!(session.feedback_duration, Duration::from_millis(1500));
        assert_eq!(session.uid(), "local-user");
    }
}
