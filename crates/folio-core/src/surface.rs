//! The narrow adapter between controllers and the rendered page.
//!
//! The browser implementation lives in the application crate. This module
//! holds the trait and [`RecordingSurface`], an in-memory page used off
//! the browser.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::directive::{Directive, Target};
use crate::error::{FolioError, FolioResult};
use crate::layout::Layout;

/// Selectors that must match before the page can start. Measuring a page
/// that lacks one fails with [`FolioError::MissingElement`] naming it.
pub const REQUIRED_ELEMENTS: &[&str] = &[
    "#navbar",
    "#nav-menu",
    "#mobile-menu-toggle",
    "#theme-toggle",
    "#theme-toggle .theme-icon",
    "#resume-download",
    "#contact-form",
    "#contact-form .submit-button",
    "#name",
    "#email",
    "#message",
    "#name-error",
    "#email-error",
    "#message-error",
];

/// A page the controllers can measure and update.
pub trait Surface {
    /// Measure the page as it is right now.
    fn layout(&self) -> FolioResult<Layout>;

    fn apply(&mut self, directive: &Directive) -> FolioResult<()>;

    fn apply_all(&mut self, directives: &[Directive]) -> FolioResult<()> {
        for directive in directives {
            self.apply(directive)?;
        }
        Ok(())
    }
}

/// In-memory page that keeps the resulting state of every directive.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    layout: Layout,
    missing: Option<String>,
    measurements: Cell<usize>,
    applied: Vec<Directive>,
    attributes: HashMap<(Target, &'static str), String>,
    styles: HashMap<(Target, &'static str), String>,
    classes: HashMap<Target, BTreeSet<&'static str>>,
    texts: HashMap<Target, String>,
    disabled: HashMap<Target, bool>,
    particles: BTreeMap<u32, (f64, f64)>,
    particles_spawned: usize,
    scroll_requests: Vec<Directive>,
    form_resets: usize,
}

impl RecordingSurface {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// A page lacking the element matched by `selector`. Measuring fails
    /// when that element is one of [`REQUIRED_ELEMENTS`].
    pub fn missing(selector: impl Into<String>) -> Self {
        Self {
            missing: Some(selector.into()),
            ..Self::default()
        }
    }

    /// How many times the page has been measured.
    pub fn measurements(&self) -> usize {
        self.measurements.get()
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Every directive applied so far, in order.
    pub fn applied(&self) -> &[Directive] {
        &self.applied
    }

    pub fn clear_log(&mut self) {
        self.applied.clear();
        self.scroll_requests.clear();
    }

    pub fn attribute(&self, target: Target, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|((t, n), _)| *t == target && *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Inline style value; cleared styles read as `None`.
    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|((t, p), _)| *t == target && *p == property)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes
            .get(&target)
            .is_some_and(|set| set.contains(class))
    }

    pub fn text(&self, target: Target) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    pub fn is_disabled(&self, target: Target) -> bool {
        self.disabled.get(&target).copied().unwrap_or(false)
    }

    /// Particles currently attached to the page.
    pub fn live_particles(&self) -> usize {
        self.particles.len()
    }

    pub fn particles_spawned(&self) -> usize {
        self.particles_spawned
    }

    /// `ScrollTo` / `ScrollIntoView` directives since the last clear.
    pub fn scroll_requests(&self) -> &[Directive] {
        &self.scroll_requests
    }

    pub fn form_resets(&self) -> usize {
        self.form_resets
    }
}

impl Surface for RecordingSurface {
    fn layout(&self) -> FolioResult<Layout> {
        self.measurements.set(self.measurements.get() + 1);
        match &self.missing {
            Some(selector) if REQUIRED_ELEMENTS.contains(&selector.as_str()) => {
                Err(FolioError::MissingElement(selector.clone()))
            }
            _ => Ok(self.layout.clone()),
        }
    }

    fn apply(&mut self, directive: &Directive) -> FolioResult<()> {
        match directive {
            Directive::SetAttribute {
                target,
                name,
                value,
            } => {
                self.attributes.insert((*target, *name), value.clone());
            }
            Directive::SetStyle {
                target,
                property,
                value,
            } => {
                self.styles.insert((*target, *property), value.clone());
            }
            Directive::AddClass { target, class } => {
                self.classes.entry(*target).or_default().insert(*class);
            }
            Directive::RemoveClass { target, class } => {
                if let Some(set) = self.classes.get_mut(target) {
                    set.remove(class);
                }
            }
            Directive::SetText { target, text } => {
                self.texts.insert(*target, text.clone());
            }
            Directive::SetDisabled { target, disabled } => {
                self.disabled.insert(*target, *disabled);
            }
            Directive::ScrollTo { .. } | Directive::ScrollIntoView { .. } => {
                self.scroll_requests.push(directive.clone());
            }
            Directive::ResetForm => self.form_resets += 1,
            Directive::SpawnParticle { id, x, y, .. } => {
                self.particles.insert(*id, (*x, *y));
                self.particles_spawned += 1;
            }
            Directive::RemoveParticle { id } => {
                if self.particles.remove(id).is_none() {
                    return Err(FolioError::Dom(format!("particle {} is not attached", id)));
                }
            }
        }
        self.applied.push(directive.clone());
        Ok(())
    }
}
