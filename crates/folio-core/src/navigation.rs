//! Active-link highlighting, link scrolling, keyboard section navigation and
//! the mobile menu.

use crate::directive::{Directive, Target};
use crate::layout::Layout;
use crate::section::SectionId;

const ACTIVE: &str = "active";

/// Last section (in document order) whose top, minus `lead`, has been
/// scrolled past. `None` when the page is above every section.
pub fn current_section(layout: &Layout, lead: f64) -> Option<SectionId> {
    layout
        .sections
        .iter()
        .rev()
        .find(|s| layout.scroll_y >= s.offset_top - lead)
        .map(|s| s.id)
}

/// Like [`current_section`] but defaults to the first section.
pub fn current_section_or_home(layout: &Layout, lead: f64) -> SectionId {
    current_section(layout, lead).unwrap_or(SectionId::Home)
}

/// Clear `active` from every link, then mark the current one.
pub fn update_active_nav_link(
    layout: &Layout,
    sections: &[SectionId],
    lead: f64,
) -> Vec<Directive> {
    let current = current_section(layout, lead);
    let mut directives: Vec<Directive> = sections
        .iter()
        .map(|&id| Directive::remove_class(Target::NavLink(id), ACTIVE))
        .collect();
    if let Some(id) = current.filter(|id| sections.contains(id)) {
        directives.push(Directive::add_class(Target::NavLink(id), ACTIVE));
    }
    directives
}

/// Document offset a link to `section` scrolls to, below the fixed header.
pub fn link_scroll_offset(layout: &Layout, section: SectionId, header_offset: f64) -> Option<f64> {
    layout
        .section(section)
        .map(|s| s.offset_top - header_offset)
}

/// Index of the section `direction` steps away from `current`, clamped to
/// the list. `None` when the clamp leaves the index unchanged.
///
/// A `current` missing from `order` counts as index -1.
pub fn step_section(order: &[SectionId], current: SectionId, direction: i32) -> Option<usize> {
    if order.is_empty() {
        return None;
    }
    let current_index = order
        .iter()
        .position(|&id| id == current)
        .map_or(-1, |i| i as i64);
    let last = order.len() as i64 - 1;
    let next_index = (current_index + direction as i64).clamp(0, last);
    (next_index != current_index).then_some(next_index as usize)
}

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Key {
        match key {
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            _ => Key::Other,
        }
    }

    /// Section step for arrow keys.
    pub fn section_step(&self) -> Option<i32> {
        match self {
            Key::ArrowDown => Some(1),
            Key::ArrowUp => Some(-1),
            _ => None,
        }
    }

    /// Whether the browser's default handling must be suppressed. Arrows
    /// would scroll the page; Enter on the focused theme toggle would also
    /// fire the button's click and toggle a second time.
    pub fn prevents_default(&self, theme_toggle_focused: bool) -> bool {
        self.section_step().is_some() || (*self == Key::Enter && theme_toggle_focused)
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<Directive> {
        self.open = !self.open;
        self.render()
    }

    /// Close the menu. Closing an already-closed menu still re-asserts the
    /// closed presentation.
    pub fn close(&mut self) -> Vec<Directive> {
        self.open = false;
        self.render()
    }

    fn render(&self) -> Vec<Directive> {
        if self.open {
            vec![
                Directive::add_class(Target::NavMenu, ACTIVE),
                Directive::add_class(Target::MenuToggle, ACTIVE),
                Directive::style(Target::MenuToggle, "transform", "rotateY(180deg)"),
            ]
        } else {
            vec![
                Directive::remove_class(Target::NavMenu, ACTIVE),
                Directive::remove_class(Target::MenuToggle, ACTIVE),
                Directive::style(Target::MenuToggle, "transform", "rotateY(0deg)"),
            ]
        }
    }
}
