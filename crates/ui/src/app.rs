//! Main Application Component for Fleet Dashboard
//!
//! This module contains the root Dioxus component that renders the entire
//! application: header, navigation (sidebar or bottom bar depending on the
//! viewport width), content area, feedback banner, and dialog overlays.

use dioxus::prelude::*;
use fleet_model::{EditorMode, NavKind, Services, Tab, VehicleDialog};

use crate::actions;
use crate::components::Avatar;
use crate::components::dialogs::{
    ConfirmDeleteDialog, ProfileDialog, VehicleDetailsDialog, VehicleFormDialog,
};
use crate::pages::{AdminVehiclesPage, MyVehiclesPage};
use crate::state::{APP_STATE, Session, use_identity, use_layout};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();

    // Start the session once, then load the flags and the default tab
    use_hook(move || {
        tracing::info!("Session started for {}", session.uid());
        APP_STATE.write().start_session(session);
        actions::load_session_flags(services.clone());
        actions::refresh_vehicles(services);
    });

    let window = dioxus::desktop::use_window();
    use_effect(move || {
        let title = APP_STATE.read().window_title();
        window.set_title(&title);
    });

    rsx! {
        div {
            class: "app",
            onresize: move |e: Event<ResizeData>| {
                if let Ok(size) = e.get_border_box_size() {
                    APP_STATE.write().ui.viewport_width = size.width;
                }
            },

            Header {}

            Navigation {}

            MainContent {}

            FeedbackBanner {}

            DialogOverlay {}

            ProfileOverlay {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top bar with the app title and the signed-in user
#[component]
fn Header() -> Element {
    let identity = use_identity();
    let layout = use_layout();

    rsx! {
        header {
            class: "header",
            style: "margin-left: {layout.margin_left}px;",

            div {
                class: "header__brand",
                span { class: "header__logo", "🚘" }
                span { class: "header__title", "{crate::NAME}" }
            }

            div { class: "header__spacer" }

            button {
                class: "btn btn--ghost",
                title: "View profile",
                onclick: move |_| APP_STATE.write().ui.open_profile(EditorMode::View),
                "👤"
                if !layout.is_compact() {
                    " View profile"
                }
            }

            button {
                class: "header__user",
                title: "Edit profile",
                onclick: move |_| APP_STATE.write().ui.open_profile(EditorMode::Edit),
                Avatar { identity: identity.clone(), size: 32 }
                if !layout.is_compact() {
                    span { class: "header__user-name", "{identity.display_name}" }
                }
            }
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Sidebar on wide windows, bottom bar on narrow ones; never both
#[component]
fn Navigation() -> Element {
    let layout = use_layout();
    let state = APP_STATE.read();
    let items = state.dashboard.menu_items();
    let active = state.dashboard.active_tab();
    let expanded = state.ui.sidebar_expanded;
    drop(state);

    match layout.nav {
        NavKind::Sidebar => rsx! {
            Sidebar { items, active, expanded, width: layout.margin_left }
        },
        NavKind::BottomNav => rsx! {
            BottomNav { items, active }
        },
    }
}

/// Left sidebar with navigation
#[component]
fn Sidebar(items: Vec<Tab>, active: Tab, expanded: bool, width: f64) -> Element {
    rsx! {
        aside {
            class: if expanded { "sidebar" } else { "sidebar sidebar--collapsed" },
            style: "width: {width}px;",

            div {
                class: "sidebar__header",

                if expanded {
                    span { class: "sidebar__heading", "Navigation" }
                }

                button {
                    class: "sidebar__toggle",
                    title: if expanded { "Collapse sidebar" } else { "Expand sidebar" },
                    onclick: move |_| APP_STATE.write().ui.toggle_sidebar(),
                    if expanded { "✕" } else { "☰" }
                }
            }

            nav {
                class: "sidebar__nav",
                for tab in items {
                    NavItem { key: "{tab.label()}", tab, active, show_label: expanded }
                }
            }
        }
    }
}

/// Bottom navigation bar for narrow windows
#[component]
fn BottomNav(items: Vec<Tab>, active: Tab) -> Element {
    rsx! {
        nav {
            class: "bottom-nav",
            for tab in items {
                NavItem { key: "{tab.label()}", tab, active, show_label: true }
            }
        }
    }
}

/// One navigation entry
#[component]
fn NavItem(tab: Tab, active: Tab, show_label: bool) -> Element {
    let services = use_context::<Services>();
    let class = if tab == active {
        "nav-item nav-item--active"
    } else {
        "nav-item"
    };

    rsx! {
        button {
            class: "{class}",
            title: "{tab.label()}",
            onclick: move |_| actions::select_tab(services.clone(), tab),
            span { class: "nav-item__icon", "{tab.icon()}" }
            if show_label {
                span { class: "nav-item__label", "{tab.label()}" }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active tab
#[component]
fn MainContent() -> Element {
    let layout = use_layout();
    let active = APP_STATE.read().dashboard.active_tab();

    rsx! {
        main {
            class: "content",
            style: "{layout.content_style()}",

            match active {
                Tab::Admin => rsx! { AdminVehiclesPage {} },
                Tab::MyVehicles => rsx! { MyVehiclesPage {} },
            }
        }
    }
}

// ============================================================================
// Feedback Banner
// ============================================================================

/// The single feedback message, if any
#[component]
fn FeedbackBanner() -> Element {
    let Some(feedback) = APP_STATE.read().feedback.current().cloned() else {
        return rsx! {};
    };
    let layout = use_layout();
    let class = format!("feedback feedback--{}", feedback.severity.css_modifier());

    rsx! {
        div {
            class: "{class}",
            style: "bottom: {layout.padding_bottom + 16.0}px;",
            role: "status",

            span { class: "feedback__icon", "{feedback.severity.icon()}" }
            span { class: "feedback__text", "{feedback.text}" }
            button {
                class: "feedback__close",
                title: "Dismiss",
                onclick: move |_| APP_STATE.write().feedback.dismiss(),
                "✕"
            }
        }
    }
}

// ============================================================================
// Dialog Overlays
// ============================================================================

/// Modal overlay for the open vehicle dialog
#[component]
fn DialogOverlay() -> Element {
    let dialog = APP_STATE.read().dashboard.dialog().clone();

    let content = match dialog {
        VehicleDialog::Idle => return rsx! {},
        VehicleDialog::Viewing(vehicle) => rsx! {
            VehicleDetailsDialog { key: "view-{vehicle.id}", vehicle }
        },
        VehicleDialog::Editing(vehicle) => {
            let key = vehicle
                .as_ref()
                .map(|v| format!("edit-{}", v.id))
                .unwrap_or_else(|| "create".to_string());
            rsx! {
                VehicleFormDialog { key: "{key}", vehicle }
            }
        }
        VehicleDialog::ConfirmingDelete(vehicle) => rsx! {
            ConfirmDeleteDialog { key: "delete-{vehicle.id}", vehicle }
        },
    };

    rsx! {
        Modal {
            on_backdrop: move |_| APP_STATE.write().dashboard.close_dialog(),
            {content}
        }
    }
}

/// Modal overlay for the profile dialog
#[component]
fn ProfileOverlay() -> Element {
    let Some(mode) = APP_STATE.read().ui.profile_dialog else {
        return rsx! {};
    };

    rsx! {
        Modal {
            on_backdrop: move |_| APP_STATE.write().ui.close_profile(),
            ProfileDialog { key: "{mode.title()}", mode }
        }
    }
}

/// Backdrop plus centered panel
#[component]
fn Modal(on_backdrop: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal",

            div {
                class: "modal__backdrop",
                onclick: move |_| on_backdrop.call(()),
            }

            div {
                class: "modal__panel",
                onclick: move |e| e.stop_propagation(),
                {children}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use fleet_model::{Dashboard, Layout, NavKind, menu_items};

    #[test]
    fn test_navigation_matches_menu() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.menu_items(), menu_items(false));
        dashboard.set_admin(true);
        assert_eq!(dashboard.menu_items(), menu_items(true));
    }

    #[test]
    fn test_exactly_one_navigation() {
        for width in [320.0, 899.0, 900.0, 1920.0] {
            let layout = Layout::for_viewport(width, true, 900.0);
            let sidebar = layout.nav == NavKind::Sidebar;
            let bottom = layout.nav == NavKind::BottomNav;
            assert!(sidebar ^ bottom);
            assert_eq!(bottom, width < 900.0);
        }
    }
}
