//! Async actions shared by components
//!
//! Each action spawns a task on the calling component's scope, runs the
//! backend sequence from `fleet_model::workflows`, and commits the result to
//! [`APP_STATE`]. Must be called from an event handler or hook.

use dioxus::prelude::*;
use fleet_core::Severity;
use fleet_model::{Services, Tab, workflows};

use crate::state::APP_STATE;

/// Show a feedback banner and arm its expiry timer
///
/// The timer lives on the root scope so closing the dialog that reported
/// the message does not cancel it.
pub fn notify(severity: Severity, text: impl Into<String>) {
    let mut state = APP_STATE.write();
    let id = state.notify(severity, text);
    let duration = state.session.feedback_duration;
    drop(state);

    spawn_forever(async move {
        tokio::time::sleep(duration).await;
        APP_STATE.write().feedback.expire(id);
    });
}

/// Fetch the admin and phone flags for the signed-in user
pub fn load_session_flags(services: Services) {
    let uid = APP_STATE.read().session.uid().to_string();
    spawn(async move {
        let flags = workflows::load_session_flags(&services, &uid).await;

        let mut failed = false;
        {
            let mut state = APP_STATE.write();
            match flags.is_admin {
                Ok(is_admin) => state.dashboard.set_admin(is_admin),
                Err(_) => failed = true,
            }
            match flags.has_phone {
                Ok(has_phone) => state.dashboard.set_has_phone(has_phone),
                Err(_) => failed = true,
            }
        }
        if failed {
            notify(Severity::Error, "Could not load your account details");
        }
    });
}

/// Reload the signed-in user's vehicles
pub fn refresh_vehicles(services: Services) {
    let uid = APP_STATE.read().session.uid().to_string();
    let generation = APP_STATE.write().dashboard.begin_fetch();
    spawn(async move {
        match workflows::fetch_vehicles(&services, &uid).await {
            Ok(vehicles) => {
                APP_STATE.write().dashboard.apply_vehicles(generation, vehicles);
            }
            Err(e) => notify(Severity::Error, format!("Could not load vehicles: {}", e)),
        }
    });
}

/// Switch tabs, reloading vehicles when their tab becomes active
pub fn select_tab(services: Services, tab: Tab) {
    let needs_fetch = APP_STATE.write().dashboard.select_tab(tab);
    if needs_fetch {
        refresh_vehicles(services);
    }
}

