//! Page section shell
//!
//! Renders `section.section#<id>` with its heading. The id and class are
//! what navigation and the reveal effects look up.

use dioxus::prelude::*;
use folio_core::SectionId;

/// Classes of section children that reveal with a stagger
pub const ANIMATED_CHILD_SELECTOR: &str =
    ".card-3d, .timeline-item, .achievement-card, .skill-category";

#[derive(Clone, PartialEq, Props)]
pub struct PageSectionProps {
    pub id: SectionId,
    /// Heading override; defaults to the section title
    #[props(default)]
    pub heading: Option<String>,
    /// Optional line under the heading
    #[props(default)]
    pub subtitle: Option<String>,
    pub children: Element,
}

#[component]
pub fn PageSection(props: PageSectionProps) -> Element {
    let heading = props
        .heading
        .clone()
        .unwrap_or_else(|| props.id.title().to_string());

    rsx! {
        section { id: props.id.as_str(), class: "section",
            div { class: "container",
                h2 { class: "section-title", "{heading}" }
                if let Some(subtitle) = &props.subtitle {
                    p { class: "section-subtitle", "{subtitle}" }
                }
                {props.children}
            }
        }
    }
}

/// One navbar entry pointing at a section
#[component]
pub fn NavLink(id: SectionId, onclick: EventHandler<MouseEvent>) -> Element {
    let href = id.href();
    let title = id.title();

    rsx! {
        li { class: "nav-item",
            a {
                class: "nav-link",
                href: "{href}",
                onclick: move |evt| onclick.call(evt),
                "{title}"
            }
        }
    }
}
