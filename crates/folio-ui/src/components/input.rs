//! Contact Form Field Components
//!
//! Uncontrolled inputs: the page reads their values by id when the form is
//! submitted. Each field owns an error slot (`<id>-error`) that validation
//! messages are written into.

use dioxus::prelude::*;

/// Id of the error slot that belongs to a field
pub fn error_slot_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Element id; also used as the `name` attribute
    pub id: String,
    /// Label text
    pub label: String,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Labelled single-line input with its error slot
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormField {
///         id: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let error_id = error_slot_id(&props.id);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "form-input",
                r#type: "{props.input_type}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
            }
            p { class: "error-message", id: "{error_id}" }
        }
    }
}

/// Properties for the TextAreaField component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaFieldProps {
    pub id: String,
    pub label: String,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Labelled multi-line input with its error slot
#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let error_id = error_slot_id(&props.id);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "form-input form-textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
            }
            p { class: "error-message", id: "{error_id}" }
        }
    }
}
