//! Landing section with the resume download and floating shapes.

use dioxus::prelude::*;
use folio_core::{Event, SectionId, Target};
use folio_ui::{ButtonVariant, LinkButton};

use crate::content::OWNER;
use crate::context::use_runtime;

#[component]
pub fn Hero() -> Element {
    let runtime = use_runtime();

    let on_resume = move |evt: MouseEvent| {
        evt.prevent_default();
        runtime.dispatch_with(|surface| {
            Ok(Event::ResumeClick {
                label: surface.label_of(Target::ResumeButton)?,
            })
        });
    };

    rsx! {
        section { id: SectionId::Home.as_str(), class: "section hero",
            div { class: "floating-shapes",
                div { class: "shape shape-1 tilt-element" }
                div { class: "shape shape-2 tilt-element" }
                div { class: "shape shape-3 tilt-element" }
            }
            div { class: "container hero-content",
                p { class: "hero-greeting", "Hi, I'm" }
                h1 { class: "hero-name", "{OWNER.name}" }
                p { class: "hero-role", "{OWNER.role}" }
                p { class: "hero-tagline", "{OWNER.tagline}" }
                div { class: "hero-actions",
                    LinkButton {
                        id: "resume-download".to_string(),
                        href: OWNER.resume_href.to_string(),
                        variant: ButtonVariant::Primary,
                        onclick: on_resume,
                        "Download Resume"
                    }
                    a { class: "btn btn-outline", href: "#contact", "Get in Touch" }
                }
            }
        }
    }
}
