//! Visual directives: the only way controllers change the page.
//!
//! Controllers return `Vec<Directive>`; a [`crate::surface::Surface`]
//! applies them. Clearing an inline style is a `SetStyle` with an empty
//! value.

use crate::form::Field;
use crate::section::SectionId;

/// A page element a directive addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// The document root, carrier of `data-theme`
    Root,
    Body,
    Navbar,
    NavMenu,
    MenuToggle,
    ThemeIcon,
    NavLink(SectionId),
    Section(SectionId),
    /// The `index`-th animated child of a section
    SectionChild { section: SectionId, index: usize },
    Hero,
    /// The `index`-th tilt-eligible element
    TiltTarget(usize),
    ErrorSlot(Field),
    ContactForm,
    SubmitButton,
    ResumeButton,
    /// The `index`-th project link
    ProjectLink(usize),
}

impl Target {
    /// Element id for targets addressed by id, if any.
    pub fn element_id(&self) -> Option<String> {
        let id = match self {
            Target::Navbar => "navbar".to_string(),
            Target::NavMenu => "nav-menu".to_string(),
            Target::MenuToggle => "mobile-menu-toggle".to_string(),
            Target::ContactForm => "contact-form".to_string(),
            Target::ResumeButton => "resume-download".to_string(),
            Target::Section(id) => id.as_str().to_string(),
            Target::ErrorSlot(field) => format!("{}-error", field.as_str()),
            _ => return None,
        };
        Some(id)
    }
}

/// One change to apply to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    SetAttribute {
        target: Target,
        name: &'static str,
        value: String,
    },
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    AddClass {
        target: Target,
        class: &'static str,
    },
    RemoveClass {
        target: Target,
        class: &'static str,
    },
    SetText {
        target: Target,
        text: String,
    },
    SetDisabled {
        target: Target,
        disabled: bool,
    },
    /// Smoothly scroll the window to a document offset
    ScrollTo { top: f64 },
    /// Smoothly scroll an element into view
    ScrollIntoView { target: Target },
    /// Reset every field of the contact form
    ResetForm,
    /// Create a decorative particle at (`x`, `y`) that travels by
    /// (`dx`, `dy`) while shrinking and fading over `duration_ms`
    SpawnParticle {
        id: u32,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        duration_ms: u64,
    },
    RemoveParticle { id: u32 },
}

impl Directive {
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Directive::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    pub fn clear_style(target: Target, property: &'static str) -> Self {
        Directive::style(target, property, "")
    }

    pub fn add_class(target: Target, class: &'static str) -> Self {
        Directive::AddClass { target, class }
    }

    pub fn remove_class(target: Target, class: &'static str) -> Self {
        Directive::RemoveClass { target, class }
    }

    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Directive::SetText {
            target,
            text: text.into(),
        }
    }

    /// The element this directive touches, if it addresses one.
    pub fn target(&self) -> Option<Target> {
        match self {
            Directive::SetAttribute { target, .. }
            | Directive::SetStyle { target, .. }
            | Directive::AddClass { target, .. }
            | Directive::RemoveClass { target, .. }
            | Directive::SetText { target, .. }
            | Directive::SetDisabled { target, .. }
            | Directive::ScrollIntoView { target } => Some(*target),
            Directive::ScrollTo { .. }
            | Directive::ResetForm
            | Directive::SpawnParticle { .. }
            | Directive::RemoveParticle { .. } => None,
        }
    }
}
