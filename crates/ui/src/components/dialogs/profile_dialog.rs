//! # Profile Dialog Component
//!
//! Shows the signed-in user's profile and lets them maintain phone, city,
//! and state. Name and email are shown as stored and are always read-only.
//!
//! A new instance is mounted every time the dialog opens, so the form is
//! always loaded from a fresh fetch and closing discards unsaved edits.

use dioxus::prelude::*;
use fleet_core::{Severity, StateCode};
use fleet_model::{EditorMode, ProfileForm, Services, workflows};

use crate::actions::notify;
use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::components::avatar::Avatar;
use crate::state::APP_STATE;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileDialogProps {
    pub mode: EditorMode,
}

/// Profile view/edit dialog
#[component]
pub fn ProfileDialog(props: ProfileDialogProps) -> Element {
    let services = use_context::<Services>();
    let identity = APP_STATE.read().session.identity.clone();

    let mut form = use_signal(|| ProfileForm::new(props.mode));
    let mut is_loading = use_signal(|| true);

    // Load on mount
    {
        let services = services.clone();
        let uid = identity.uid.clone();
        use_effect(move || {
            let services = services.clone();
            let uid = uid.clone();
            spawn(async move {
                match workflows::load_profile(&services, &uid).await {
                    Ok(profile) => form.write().load(profile),
                    Err(e) => notify(Severity::Error, format!("Could not load profile: {}", e)),
                }
                is_loading.set(false);
            });
        });
    }

    let mut handle_save = {
        let services = services.clone();
        let uid = identity.uid.clone();
        move |_| {
            let Some(update) = form.write().prepare_save() else {
                return;
            };
            // Holds the dialog open until the save has finished
            if !APP_STATE.write().ui.begin_profile_save() {
                return;
            }

            let services = services.clone();
            let uid = uid.clone();
            spawn(async move {
                match workflows::save_profile(&services, &uid, update).await {
                    Ok(has_phone) => {
                        let mut state = APP_STATE.write();
                        if let Some(has_phone) = has_phone {
                            state.dashboard.set_has_phone(has_phone);
                        }
                        state.ui.finish_profile_save(true);
                        drop(state);
                        notify(Severity::Success, "Profile updated");
                    }
                    Err(e) => {
                        APP_STATE.write().ui.finish_profile_save(false);
                        notify(Severity::Error, format!("Could not save profile: {}", e));
                    }
                }
            });
        }
    };

    let close = move |_| {
        APP_STATE.write().ui.close_profile();
    };

    let state_options: Vec<SelectOption> = StateCode::ALL
        .iter()
        .map(|code| SelectOption::new(code.as_str(), code.as_str()))
        .collect();

    let current = form.read();
    let loading = *is_loading.read();
    let saving = APP_STATE.read().ui.profile_saving;
    let disabled = !current.is_editable() || saving;
    let can_save = current.can_save() && !saving;
    let phone = current.display_phone();
    let city = current.buffers().city.clone();
    let state_value = current
        .buffers()
        .state
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();
    let city_error = current.error("city").map(str::to_string);
    let state_error = current.error("state").map(str::to_string);
    let name = current.name().to_string();
    let email = current.email().to_string();
    let city_required = current.city_required();
    let state_required = current.state_required();
    drop(current);

    rsx! {
        div {
            class: "dialog profile-dialog",

            // Header
            div {
                class: "dialog__header",
                Avatar { identity: identity.clone(), size: 48 }
                div {
                    h2 { class: "dialog__title", "{props.mode.title()}" }
                    p { class: "dialog__subtitle", "{identity.display_name}" }
                }
            }

            if loading {
                div { class: "dialog__loading", "Loading profile..." }
            } else {
                form {
                    class: "dialog__body",
                    onsubmit: move |e| {
                        e.prevent_default();
                        handle_save(());
                    },

                    TextInput {
                        value: name,
                        label: "Name",
                        disabled: true,
                    }

                    TextInput {
                        value: email,
                        label: "Email",
                        input_type: "email",
                        disabled: true,
                    }

                    TextInput {
                        value: phone,
                        label: "Phone",
                        input_type: "tel",
                        placeholder: "(11) 99999-9999",
                        help_text: "Required to register vehicles",
                        max_length: 15usize,
                        disabled: disabled,
                        on_change: move |value: String| form.write().set_phone(&value),
                    }

                    div {
                        class: "dialog__row",

                        TextInput {
                            value: city,
                            label: "City",
                            required: city_required,
                            error: city_error,
                            disabled: disabled,
                            on_change: move |value: String| form.write().set_city(value),
                        }

                        Select {
                            value: state_value,
                            options: state_options,
                            label: "State",
                            placeholder: "Select",
                            required: state_required,
                            error: state_error,
                            disabled: disabled,
                            on_change: move |value: String| form.write().set_state(&value),
                        }
                    }

                    // Actions
                    div {
                        class: "dialog__actions",

                        button {
                            r#type: "button",
                            class: "btn btn--secondary",
                            disabled: saving,
                            onclick: close,
                            if props.mode == EditorMode::Edit { "Cancel" } else { "Close" }
                        }

                        if props.mode == EditorMode::Edit {
                            button {
                                r#type: "submit",
                                class: "btn btn--primary",
                                disabled: !can_save,
                                if saving { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }
        }
    }
}
