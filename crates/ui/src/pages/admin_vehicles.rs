//! # Admin Dashboard Page
//!
//! Fleet-wide view for administrators: totals, vehicles per brand, and a
//! table of every vehicle with its owner. Data is loaded fresh each time the
//! page mounts.

use dioxus::prelude::*;
use fleet_core::Severity;
use fleet_model::{FleetSummary, Services, workflows};

use crate::actions::notify;
use crate::components::format_mileage;

#[component]
pub fn AdminVehiclesPage() -> Element {
    let services = use_context::<Services>();
    let mut summary = use_signal(|| None::<FleetSummary>);
    let mut failed = use_signal(|| false);

    use_effect(move || {
        let services = services.clone();
        spawn(async move {
            match workflows::load_admin_summary(&services).await {
                Ok(loaded) => summary.set(Some(loaded)),
                Err(e) => {
                    failed.set(true);
                    notify(Severity::Error, format!("Could not load fleet overview: {}", e));
                }
            }
        });
    });

    let Some(summary) = summary.read().clone() else {
        let text = if *failed.read() {
            "Fleet overview unavailable"
        } else {
            "Loading fleet overview..."
        };
        return rsx! {
            section {
                class: "page admin-vehicles",
                h1 { class: "page__title", "Dashboard" }
                div { class: "page__loading", "{text}" }
            }
        };
    };

    rsx! {
        section {
            class: "page admin-vehicles",

            div {
                class: "page__header",
                h1 { class: "page__title", "Dashboard" }
            }

            // Totals
            div {
                class: "stats",
                StatCard { icon: "🚗", label: "Vehicles", value: summary.total_vehicles }
                StatCard { icon: "👥", label: "Users", value: summary.total_users }
                StatCard { icon: "📵", label: "Users without phone", value: summary.users_without_phone }
            }

            if !summary.per_brand.is_empty() {
                div {
                    class: "panel",
                    h2 { class: "panel__title", "Vehicles per brand" }
                    ul {
                        class: "brand-list",
                        for (brand, count) in summary.per_brand.iter() {
                            li {
                                key: "{brand}",
                                class: "brand-list__item",
                                span { "{brand}" }
                                span { class: "brand-list__count", "{count}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "panel",
                h2 { class: "panel__title", "All vehicles" }

                if summary.rows.is_empty() {
                    p { class: "empty-state__text", "No vehicles registered." }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Vehicle" }
                                th { "Year" }
                                th { "Plate" }
                                th { "Mileage" }
                                th { "Owner" }
                            }
                        }
                        tbody {
                            for row in summary.rows.iter() {
                                tr {
                                    key: "{row.vehicle.id}",
                                    td { "{row.vehicle.brand.name} {row.vehicle.model}" }
                                    td { "{row.vehicle.year}" }
                                    td { class: "vehicle-card__plate", "{row.vehicle.display_plate()}" }
                                    td {
                                        {row.vehicle.mileage_km.map(format_mileage).unwrap_or_else(|| "-".to_string())}
                                    }
                                    td { "{row.owner}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-card__icon", "{icon}" }
            div {
                span { class: "stat-card__value", "{value}" }
                span { class: "stat-card__label", "{label}" }
            }
        }
    }
}
