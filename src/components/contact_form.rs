//! Contact form: three validated fields and the animated submit button.

use dioxus::prelude::*;
use folio_core::{Event, Field, Target};
use folio_ui::{Button, ButtonVariant, FormField, TextAreaField};

use crate::context::use_runtime;

#[component]
pub fn ContactForm() -> Element {
    let runtime = use_runtime();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        runtime.dispatch_with(|surface| {
            Ok(Event::Submit {
                input: surface.read_form()?,
                button_label: surface.label_of(Target::SubmitButton)?,
            })
        });
    };

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form card",
            novalidate: true,
            onsubmit: on_submit,
            FormField {
                id: Field::Name.as_str().to_string(),
                label: "Name".to_string(),
                placeholder: "Your name".to_string(),
            }
            FormField {
                id: Field::Email.as_str().to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                placeholder: "you@example.com".to_string(),
            }
            TextAreaField {
                id: Field::Message.as_str().to_string(),
                label: "Message".to_string(),
                placeholder: "What would you like to talk about?".to_string(),
            }
            Button {
                variant: ButtonVariant::Submit,
                button_type: "submit".to_string(),
                "Send Message"
            }
        }
    }
}
