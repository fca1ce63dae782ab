//! # Vehicle Form Dialog
//!
//! Create and edit dialog for vehicles.
//!
//! ## Behavior
//!
//! - Every field error is shown at once; editing a field clears its error
//! - On save the vehicle is persisted, the list is reloaded, and only then
//!   the dialog closes
//! - A failed save keeps the dialog open with the typed values intact
//!

use dioxus::prelude::*;
use fleet_core::FieldErrors;
use fleet_model::vehicle::BRAND_CATALOG;
use fleet_model::{Services, Vehicle, VehicleForm, workflows};

use crate::actions::notify;
use crate::components::inputs::{TextArea, TextInput};
use crate::state::APP_STATE;

/// Which buffer of the form an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Brand,
    Model,
    Year,
    Plate,
    Color,
    Mileage,
    Notes,
}

impl Field {
    fn key(&self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::Model => "model",
            Field::Year => "year",
            Field::Plate => "plate",
            Field::Color => "color",
            Field::Mileage => "mileage",
            Field::Notes => "notes",
        }
    }

    fn buffer<'a>(&self, form: &'a mut VehicleForm) -> &'a mut String {
        match self {
            Field::Brand => &mut form.brand,
            Field::Model => &mut form.model,
            Field::Year => &mut form.year,
            Field::Plate => &mut form.plate,
            Field::Color => &mut form.color,
            Field::Mileage => &mut form.mileage,
            Field::Notes => &mut form.notes,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct VehicleFormDialogProps {
    /// Vehicle to edit; `None` creates a new one
    pub vehicle: Option<Vehicle>,
}

#[component]
pub fn VehicleFormDialog(props: VehicleFormDialogProps) -> Element {
    let services = use_context::<Services>();
    let vehicle_id = props.vehicle.as_ref().map(|v| v.id);

    let mut form = use_signal(|| {
        props
            .vehicle
            .as_ref()
            .map(VehicleForm::from_vehicle)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);

    let mut update = move |field: Field, value: String| {
        *field.buffer(&mut form.write()) = value;
        errors.write().remove(field.key());
    };

    let mut handle_save = move |_| {
        if APP_STATE.read().dashboard.is_mutating() {
            return;
        }
        let draft = match form.read().to_draft() {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        // Holds the form open until the save and reload have finished
        if !APP_STATE.write().dashboard.begin_save() {
            return;
        }
        let services = services.clone();
        let uid = APP_STATE.read().session.uid().to_string();
        spawn(async move {
            let outcome = workflows::save_and_refetch(&services, &uid, vehicle_id, draft).await;
            let (severity, text) = APP_STATE.write().dashboard.finish_save(outcome);
            notify(severity, text);
        });
    };

    let (title, save_label) = if vehicle_id.is_some() {
        ("Edit Vehicle", "Save Changes")
    } else {
        ("Add Vehicle", "Add Vehicle")
    };

    let current = form.read().clone();
    let error_for = |field: Field| errors.read().get(field.key()).cloned();
    let saving = APP_STATE.read().dashboard.is_mutating();

    rsx! {
        div {
            class: "dialog vehicle-form-dialog",

            div {
                class: "dialog__header",
                span { class: "dialog__icon", "🚗" }
                h2 { class: "dialog__title", "{title}" }
            }

            form {
                class: "dialog__body",
                onsubmit: move |e| {
                    e.prevent_default();
                    handle_save(());
                },

                div {
                    class: "dialog__row",

                    TextInput {
                        value: current.brand.clone(),
                        label: "Brand",
                        placeholder: "e.g., Toyota",
                        required: true,
                        list: "brand-catalog",
                        error: error_for(Field::Brand),
                        disabled: saving,
                        on_change: move |value| update(Field::Brand, value),
                    }
                    datalist {
                        id: "brand-catalog",
                        for brand in BRAND_CATALOG.iter() {
                            option { key: "{brand}", value: "{brand}" }
                        }
                    }

                    TextInput {
                        value: current.model.clone(),
                        label: "Model",
                        placeholder: "e.g., Corolla",
                        required: true,
                        error: error_for(Field::Model),
                        disabled: saving,
                        on_change: move |value| update(Field::Model, value),
                    }
                }

                div {
                    class: "dialog__row",

                    TextInput {
                        value: current.year.clone(),
                        label: "Year",
                        input_type: "number",
                        required: true,
                        error: error_for(Field::Year),
                        disabled: saving,
                        on_change: move |value| update(Field::Year, value),
                    }

                    TextInput {
                        value: current.plate.clone(),
                        label: "Plate",
                        placeholder: "ABC-1234 or ABC1D23",
                        required: true,
                        max_length: 8usize,
                        error: error_for(Field::Plate),
                        disabled: saving,
                        on_change: move |value: String| update(Field::Plate, value.to_uppercase()),
                    }
                }

                div {
                    class: "dialog__row",

                    TextInput {
                        value: current.color.clone(),
                        label: "Color",
                        disabled: saving,
                        on_change: move |value| update(Field::Color, value),
                    }

                    TextInput {
                        value: current.mileage.clone(),
                        label: "Mileage (km)",
                        input_type: "number",
                        error: error_for(Field::Mileage),
                        disabled: saving,
                        on_change: move |value| update(Field::Mileage, value),
                    }
                }

                TextArea {
                    value: current.notes.clone(),
                    label: "Notes",
                    disabled: saving,
                    on_change: move |value| update(Field::Notes, value),
                }

                div {
                    class: "dialog__actions",

                    button {
                        r#type: "button",
                        class: "btn btn--secondary",
                        disabled: saving,
                        onclick: move |_| APP_STATE.write().dashboard.close_dialog(),
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn--primary",
                        disabled: saving,
                        if saving { "Saving..." } else { "{save_label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_buffers() {
        let mut form = VehicleForm::default();
        *Field::Plate.buffer(&mut form) = "ABC1D23".to_string();
        *Field::Notes.buffer(&mut form) = "spare key".to_string();
        assert_eq!(form.plate, "ABC1D23");
        assert_eq!(form.notes, "spare key");
    }

    #[test]
    fn test_field_keys_match_form_errors() {
        let errors = VehicleForm::default().field_errors_for_year(2026);
        for field in [Field::Brand, Field::Model, Field::Year, Field::Plate] {
            assert!(errors.contains_key(field.key()), "{:?}", field);
        }
        assert!(!errors.contains_key(Field::Mileage.key()));
    }
}
