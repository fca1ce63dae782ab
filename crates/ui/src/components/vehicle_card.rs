//! # Vehicle Card Component
//!
//! One vehicle in the "My Vehicles" grid, with view, edit and delete
//! actions. The card only reports clicks; the page decides which dialog to
//! open.

use dioxus::prelude::*;
use fleet_model::Vehicle;

#[derive(Props, Clone, PartialEq)]
pub struct VehicleCardProps {
    pub vehicle: Vehicle,

    #[props(default)]
    pub on_view: EventHandler<Vehicle>,

    #[props(default)]
    pub on_edit: EventHandler<Vehicle>,

    #[props(default)]
    pub on_delete: EventHandler<Vehicle>,
}

#[component]
pub fn VehicleCard(props: VehicleCardProps) -> Element {
    let vehicle = props.vehicle.clone();
    let title = format!("{} {}", vehicle.brand.name, vehicle.model);
    let plate = vehicle.display_plate();
    let mileage = vehicle.mileage_km.map(format_mileage);

    let view_target = vehicle.clone();
    let edit_target = vehicle.clone();
    let delete_target = vehicle.clone();

    rsx! {
        article {
            class: "vehicle-card",
            onclick: move |_| props.on_view.call(view_target.clone()),

            div {
                class: "vehicle-card__header",
                span { class: "vehicle-card__icon", "🚗" }
                div {
                    h3 { class: "vehicle-card__title", "{title}" }
                    span { class: "vehicle-card__year", "{vehicle.year}" }
                }
            }

            dl {
                class: "vehicle-card__facts",
                dt { "Plate" }
                dd { class: "vehicle-card__plate", "{plate}" }
                if !vehicle.color.is_empty() {
                    dt { "Color" }
                    dd { "{vehicle.color}" }
                }
                if let Some(mileage) = mileage {
                    dt { "Mileage" }
                    dd { "{mileage}" }
                }
            }

            div {
                class: "vehicle-card__actions",
                button {
                    class: "btn btn--ghost",
                    title: "Edit",
                    onclick: move |e| {
                        e.stop_propagation();
                        props.on_edit.call(edit_target.clone());
                    },
                    "✏️ Edit"
                }
                button {
                    class: "btn btn--ghost btn--danger",
                    title: "Delete",
                    onclick: move |e| {
                        e.stop_propagation();
                        props.on_delete.call(delete_target.clone());
                    },
                    "🗑️ Delete"
                }
            }
        }
    }
}

/// `123456` -> `"123,456 km"`
pub fn format_mileage(km: u32) -> String {
    let digits = km.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(" km");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mileage() {
        assert_eq!(format_mileage(0), "0 km");
        assert_eq!(format_mileage(999), "999 km");
        assert_eq!(format_mileage(1000), "1,000 km");
        assert_eq!(format_mileage(1234567), "1,234,567 km");
    }
}
