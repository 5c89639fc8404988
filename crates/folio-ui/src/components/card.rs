//! Content cards
//!
//! Every card carries `card-3d` so it takes part in pointer tilt and the
//! staggered section reveal.

use dioxus::prelude::*;

/// Card flavours; each adds its own reveal class next to `card-3d`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardKind {
    #[default]
    Plain,
    Timeline,
    Achievement,
    Skills,
}

impl CardKind {
    pub fn class(&self) -> &'static str {
        match self {
            CardKind::Plain => "card card-3d",
            CardKind::Timeline => "card card-3d timeline-item",
            CardKind::Achievement => "card card-3d achievement-card",
            CardKind::Skills => "card card-3d skill-category",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub title: String,
    #[props(default)]
    pub kind: CardKind,
    /// Small line above the body (dates, issuer, ...)
    #[props(default)]
    pub meta: Option<String>,
    #[props(default)]
    pub tags: Vec<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        article { class: props.kind.class(),
            h3 { class: "card-title", "{props.title}" }
            if let Some(meta) = &props.meta {
                p { class: "card-meta", "{meta}" }
            }
            div { class: "card-body", {props.children} }
            if !props.tags.is_empty() {
                ul { class: "card-tags",
                    for tag in props.tags.iter() {
                        li { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ANIMATED_CHILD_SELECTOR;

    #[test]
    fn every_kind_is_tiltable() {
        for kind in [CardKind::Plain, CardKind::Timeline, CardKind::Achievement, CardKind::Skills] {
            assert!(kind.class().split(' ').any(|c| c == "card-3d"));
        }
    }

    #[test]
    fn flavoured_kinds_match_reveal_selector() {
        for kind in [CardKind::Timeline, CardKind::Achievement, CardKind::Skills] {
            let flavour = kind.class().rsplit(' ').next().unwrap_or_default();
            assert!(ANIMATED_CHILD_SELECTOR.contains(&format!(".{flavour}")));
        }
    }
}
