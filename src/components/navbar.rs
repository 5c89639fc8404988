//! Fixed navigation bar: logo, section links, theme and menu toggles.

use dioxus::prelude::*;
use folio_core::{Event, SectionId};
use folio_ui::{Button, ButtonVariant, NavLink};

use crate::content::OWNER;
use crate::context::use_runtime;

#[component]
pub fn Navbar() -> Element {
    let runtime = use_runtime();

    let links = SectionId::ALL.into_iter().map(|id| {
        let runtime = runtime.clone();
        rsx! {
            NavLink {
                key: "{id}",
                id,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    runtime.dispatch(Event::NavLinkClick(id));
                },
            }
        }
    });

    let on_logo = {
        let runtime = runtime.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            runtime.dispatch(Event::LogoClick);
        }
    };
    let on_theme = {
        let runtime = runtime.clone();
        move |_: MouseEvent| runtime.dispatch(Event::ThemeToggleClick)
    };
    let on_menu = {
        let runtime = runtime.clone();
        move |_: MouseEvent| runtime.dispatch(Event::MenuToggleClick)
    };

    rsx! {
        nav { id: "navbar", class: "navbar",
            div { class: "nav-container",
                div { class: "nav-logo",
                    a { href: "#home", onclick: on_logo, "{OWNER.initials}" }
                }

                ul { id: "nav-menu", class: "nav-menu", {links} }

                div { class: "nav-actions",
                    Button {
                        id: "theme-toggle".to_string(),
                        variant: ButtonVariant::Icon,
                        aria_label: "Toggle theme".to_string(),
                        onclick: on_theme,
                        span { class: "theme-icon", "🌙" }
                    }
                    Button {
                        id: "mobile-menu-toggle".to_string(),
                        variant: ButtonVariant::Icon,
                        class: "mobile-menu-toggle".to_string(),
                        aria_label: "Toggle navigation".to_string(),
                        onclick: on_menu,
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
                    }
                }
            }
        }
    }
}
