//! The single portfolio page: hero followed by the content sections.

use dioxus::prelude::*;
use folio_core::{Event, SectionId, Target};
use folio_ui::{ButtonVariant, Card, CardKind, LinkButton, PageSection};

use crate::components::{ContactForm, Hero, Navbar};
use crate::content::{
    project_links, ProjectLinkRef, ABOUT, ACHIEVEMENTS, EDUCATION, EXPERIENCE, OWNER, PROJECTS,
    SKILLS,
};
use crate::context::use_runtime;

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        main { class: "page",
            Hero {}
            About {}
            Timeline { id: SectionId::Education }
            Timeline { id: SectionId::Experience }
            Projects {}
            Skills {}
            Achievements {}
            Contact {}
        }
        footer { class: "footer",
            div { class: "container", "© {OWNER.name}" }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        PageSection { id: SectionId::About,
            div { class: "card card-3d",
                for paragraph in ABOUT.iter() {
                    p { "{paragraph}" }
                }
                p { class: "card-meta", "Based in {OWNER.location}" }
            }
        }
    }
}

/// Education or experience, rendered as a timeline of cards
#[component]
fn Timeline(id: SectionId) -> Element {
    let entries = if id == SectionId::Education {
        EDUCATION
    } else {
        EXPERIENCE
    };

    rsx! {
        PageSection { id,
            div { class: "timeline",
                for entry in entries.iter() {
                    Card {
                        key: "{entry.title}",
                        title: entry.title.to_string(),
                        kind: CardKind::Timeline,
                        meta: format!("{} · {}", entry.place, entry.period),
                        p { "{entry.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectLinkButton(link: ProjectLinkRef) -> Element {
    let runtime = use_runtime();
    let index = link.index;

    rsx! {
        LinkButton {
            href: link.href.to_string(),
            variant: ButtonVariant::Outline,
            class: "project-link".to_string(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                runtime.dispatch_with(|surface| {
                    Ok(Event::ProjectLinkClick {
                        index,
                        label: surface.label_of(Target::ProjectLink(index))?,
                    })
                });
            },
            "{link.label}"
        }
    }
}

#[component]
fn Projects() -> Element {
    let links = project_links();

    rsx! {
        PageSection { id: SectionId::Projects, subtitle: "A few things I've built".to_string(),
            div { class: "card-grid",
                for (project, link_refs) in PROJECTS.iter().zip(links) {
                    Card {
                        key: "{project.name}",
                        title: project.name.to_string(),
                        tags: tags(project.tags),
                        p { "{project.summary}" }
                        div { class: "project-links",
                            for link in link_refs {
                                ProjectLinkButton { key: "{link.index}", link }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Skills() -> Element {
    rsx! {
        PageSection { id: SectionId::Skills,
            div { class: "card-grid",
                for group in SKILLS.iter() {
                    Card {
                        key: "{group.name}",
                        title: group.name.to_string(),
                        kind: CardKind::Skills,
                        ul { class: "skill-list",
                            for skill in group.skills.iter() {
                                li { key: "{skill}", class: "tag", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Achievements() -> Element {
    rsx! {
        PageSection { id: SectionId::Achievements,
            div { class: "card-grid",
                for achievement in ACHIEVEMENTS.iter() {
                    Card {
                        key: "{achievement.title}",
                        title: achievement.title.to_string(),
                        kind: CardKind::Achievement,
                        meta: achievement.year.to_string(),
                        p { "{achievement.detail}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        PageSection {
            id: SectionId::Contact,
            subtitle: "Have a project in mind? Say hello.".to_string(),
            div { class: "contact-grid",
                div { class: "contact-info",
                    p { "The fastest way to reach me is the form, or email:" }
                    a { href: "mailto:{OWNER.email}", "{OWNER.email}" }
                }
                ContactForm {}
            }
        }
    }
}
