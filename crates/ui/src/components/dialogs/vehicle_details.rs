//! Read-only vehicle details with shortcuts to edit and delete

use dioxus::prelude::*;
use fleet_model::Vehicle;

use crate::components::vehicle_card::format_mileage;
use crate::state::APP_STATE;

#[derive(Props, Clone, PartialEq)]
pub struct VehicleDetailsDialogProps {
    pub vehicle: Vehicle,
}

#[component]
pub fn VehicleDetailsDialog(props: VehicleDetailsDialogProps) -> Element {
    let vehicle = props.vehicle.clone();
    let name = vehicle.display_name();
    let plate = vehicle.display_plate();
    let mileage = vehicle
        .mileage_km
        .map(format_mileage)
        .unwrap_or_else(|| "-".to_string());
    let registered = vehicle.created_at.format("%Y-%m-%d").to_string();

    let edit_target = vehicle.clone();
    let delete_target = vehicle.clone();

    rsx! {
        div {
            class: "dialog vehicle-details-dialog",

            div {
                class: "dialog__header",
                span { class: "dialog__icon", "🚗" }
                div {
                    h2 { class: "dialog__title", "{name}" }
                    p { class: "dialog__subtitle", "{vehicle.year}" }
                }
            }

            dl {
                class: "dialog__body details-list",
                dt { "Brand" }
                dd { "{vehicle.brand.name}" }
                dt { "Model" }
                dd { "{vehicle.model}" }
                dt { "Plate" }
                dd { class: "vehicle-card__plate", "{plate}" }
                dt { "Color" }
                dd {
                    if vehicle.color.is_empty() { "-" } else { "{vehicle.color}" }
                }
                dt { "Mileage" }
                dd { "{mileage}" }
                dt { "Registered" }
                dd { "{registered}" }
                if !vehicle.notes.is_empty() {
                    dt { "Notes" }
                    dd { class: "details-list__notes", "{vehicle.notes}" }
                }
            }

            div {
                class: "dialog__actions",

                button {
                    r#type: "button",
                    class: "btn btn--danger",
                    onclick: move |_| APP_STATE.write().dashboard.open_delete(delete_target.clone()),
                    "🗑️ Delete"
                }
                button {
                    r#type: "button",
                    class: "btn btn--secondary",
                    onclick: move |_| APP_STATE.write().dashboard.open_edit(edit_target.clone()),
                    "✏️ Edit"
                }
                button {
                    r#type: "button",
                    class: "btn btn--primary",
                    onclick: move |_| APP_STATE.write().dashboard.close_dialog(),
                    "Close"
                }
            }
        }
    }
}
