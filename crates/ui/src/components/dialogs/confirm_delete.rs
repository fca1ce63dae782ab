//! # Confirm Delete Dialog Component
//!
//! Asks before removing a vehicle. Confirming deletes it, reloads the list
//! once, then closes the dialog and reports the outcome.

use dioxus::prelude::*;
use fleet_model::{Services, Vehicle, workflows};

use crate::actions::notify;
use crate::state::APP_STATE;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// The vehicle to delete
    pub vehicle: Vehicle,
}

/// Confirmation dialog for vehicle deletion
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let services = use_context::<Services>();

    let handle_delete = move |_| {
        let Some((vehicle, generation)) = APP_STATE.write().dashboard.begin_delete() else {
            return;
        };

        let services = services.clone();
        let uid = APP_STATE.read().session.uid().to_string();
        spawn(async move {
            let outcome = workflows::delete_and_refetch(&services, &uid, vehicle.id).await;
            let (severity, text) =
                APP_STATE
                    .write()
                    .dashboard
                    .finish_delete(generation, &vehicle, outcome);
            notify(severity, text);
        });
    };

    let handle_cancel = move |_| {
        APP_STATE.write().dashboard.close_dialog();
    };

    let deleting = APP_STATE.read().dashboard.is_mutating();
    let name = props.vehicle.display_name();
    let plate = props.vehicle.display_plate();

    rsx! {
        div {
            class: "dialog confirm-delete-dialog",

            div {
                class: "dialog__header",
                span { class: "dialog__icon dialog__icon--danger", "⚠️" }
                div {
                    h2 { class: "dialog__title dialog__title--danger", "Delete Vehicle" }
                    p {
                        class: "dialog__subtitle",
                        "This cannot be undone."
                    }
                }
            }

            div {
                class: "confirm-delete-dialog__item",
                span { class: "confirm-delete-dialog__label", "Vehicle:" }
                span { class: "confirm-delete-dialog__name", "{name}" }
                span { class: "vehicle-card__plate", "{plate}" }
            }

            div {
                class: "dialog__actions",

                button {
                    r#type: "button",
                    class: "btn btn--secondary",
                    disabled: deleting,
                    onclick: handle_cancel,
                    "Cancel"
                }

                button {
                    r#type: "button",
                    class: "btn btn--danger",
                    disabled: deleting,
                    onclick: handle_delete,

                    if deleting {
                        span { class: "spinner", "⏳" }
                        "Deleting..."
                    } else {
                        span { "🗑️" }
                        "Delete"
                    }
                }
            }
        }
    }
}
