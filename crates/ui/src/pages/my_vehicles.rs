//! "My Vehicles" page
//!
//! Lists the signed-in user's vehicles. Adding a vehicle requires a phone
//! number on the profile; without one the add buttons are disabled and a
//! hint links to the profile editor.

use dioxus::prelude::*;
use fleet_model::{EditorMode, Vehicle};

use crate::components::VehicleCard;
use crate::state::APP_STATE;

#[component]
pub fn MyVehiclesPage() -> Element {
    let state = APP_STATE.read();
    let loaded = state.dashboard.vehicles_loaded();
    let can_add = state.dashboard.can_add_vehicle();
    let header_add = state.dashboard.shows_header_add();
    let vehicles: Vec<Vehicle> = state.dashboard.vehicles().to_vec();
    drop(state);

    let count = vehicles.len();

    rsx! {
        section {
            class: "page my-vehicles",

            // Header
            div {
                class: "page__header",
                div {
                    h1 { class: "page__title", "My Vehicles" }
                    if loaded {
                        p {
                            class: "page__subtitle",
                            if count == 1 { "1 vehicle" } else { "{count} vehicles" }
                        }
                    }
                }
                if header_add {
                    AddVehicleButton { enabled: can_add }
                }
            }

            if !can_add {
                PhoneHint {}
            }

            if !loaded {
                div { class: "page__loading", "Loading vehicles..." }
            } else if vehicles.is_empty() {
                div {
                    class: "empty-state",
                    span { class: "empty-state__icon", "🚗" }
                    h2 { class: "empty-state__title", "No vehicles yet" }
                    p { class: "empty-state__text", "Register your first vehicle to get started." }
                    AddVehicleButton { enabled: can_add }
                }
            } else {
                div {
                    class: "vehicle-grid",
                    for vehicle in vehicles {
                        VehicleCard {
                            key: "{vehicle.id}",
                            vehicle: vehicle.clone(),
                            on_view: move |v: Vehicle| APP_STATE.write().dashboard.open_view(v),
                            on_edit: move |v: Vehicle| APP_STATE.write().dashboard.open_edit(v),
                            on_delete: move |v: Vehicle| APP_STATE.write().dashboard.open_delete(v),
                        }
                    }
                }
            }
        }
    }
}

/// Add button, gated on a registered phone number
#[component]
fn AddVehicleButton(enabled: bool) -> Element {
    rsx! {
        button {
            class: "btn btn--primary",
            disabled: !enabled,
            title: if enabled { "Add a vehicle" } else { "Register a phone number first" },
            onclick: move |_| {
                if enabled {
                    APP_STATE.write().dashboard.open_add();
                }
            },
            "➕ Add Vehicle"
        }
    }
}

#[component]
fn PhoneHint() -> Element {
    rsx! {
        div {
            class: "hint hint--warning",
            span { "📞 Add a phone number to your profile to register vehicles." }
            button {
                class: "btn btn--link",
                onclick: move |_| APP_STATE.write().ui.open_profile(EditorMode::Edit),
                "Edit profile"
            }
        }
    }
}
