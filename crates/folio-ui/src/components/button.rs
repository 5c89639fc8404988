//! Button Components
//!
//! - Primary: filled call to action (resume download)
//! - Outline: secondary action (project links)
//! - Submit: the contact form's submit control
//! - Icon: compact round toggle (theme, mobile menu)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Submit,
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Submit => "btn btn-primary submit-button",
            ButtonVariant::Icon => "icon-btn",
        }
    }

    /// Variant classes followed by any extra classes
    pub fn with_extra(&self, extra: Option<&str>) -> String {
        match extra {
            Some(extra) if !extra.is_empty() => format!("{} {}", self.class(), extra),
            _ => self.class().to_string(),
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Extra classes, e.g. `mobile-menu-toggle`
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Submit,
///         button_type: "submit".to_string(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.with_extra(props.class.as_deref());

    rsx! {
        button {
            id: props.id.as_deref(),
            class: "{class}",
            r#type: "{props.button_type}",
            "aria-label": props.aria_label.as_deref(),
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// Anchor styled as a button; clicks are handed to `onclick` with the
/// default navigation left for the handler to cancel.
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    pub children: Element,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub id: Option<String>,
    /// Extra classes, e.g. `project-link`
    #[props(default)]
    pub class: Option<String>,
    pub onclick: EventHandler<MouseEvent>,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let class = props.variant.with_extra(props.class.as_deref());

    rsx! {
        a {
            id: props.id.as_deref(),
            class: "{class}",
            href: "{props.href}",
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}
