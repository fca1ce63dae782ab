//! # Input Components
//!
//! Form inputs used by the profile and vehicle dialogs:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection
//!
//! Every input renders its label, a required marker, and either the error
//! or the help text below the field.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, tel, number)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Maximum length
    #[props(default)]
    pub max_length: Option<usize>,

    /// Id of a `datalist` offering suggestions
    #[props(default)]
    pub list: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field__label",
                    "{label}"
                    if props.required {
                        span { class: "field__required", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                maxlength: props.max_length.map(|l| l.to_string()),
                list: props.list.clone(),
                oninput: move |e| props.on_change.call(e.value()),
            }

            {field_message(props.error.as_deref(), props.help_text.as_deref())}
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default = 3)]
    pub rows: usize,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = build_input_class(false, props.disabled);

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label { class: "field__label", "{label}" }
            }

            textarea {
                class: "{class} field__input--multiline",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option in a Select
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value; empty selects the placeholder
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field__label",
                    "{label}"
                    if props.required {
                        span { class: "field__required", "*" }
                    }
                }
            }

            select {
                class: "{class} field__input--select",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            {field_message(props.error.as_deref(), None)}
        }
    }
}

// ============================================================================
// Field Message
// ============================================================================

/// Error or help text under a field
fn field_message(error: Option<&str>, help_text: Option<&str>) -> Element {
    if let Some(error) = error {
        rsx! { p { class: "field__error", "{error}" } }
    } else if let Some(help) = help_text {
        rsx! { p { class: "field__help", "{help}" } }
    } else {
        rsx! {}
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["field__input"];
    if has_error {
        classes.push("field__input--error");
    }
    if disabled {
        classes.push("field__input--disabled");
    }
    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false);
        assert_eq!(class, "field__input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false);
        assert!(class.contains("field__input--error"));
        assert!(!class.contains("field__input--disabled"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        let class = build_input_class(false, true);
        assert!(class.contains("field__input--disabled"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("SP", "São Paulo");
        assert_eq!(opt.value, "SP");
        assert_eq!(opt.label, "São Paulo");
    }
}
