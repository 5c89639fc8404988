//! Read-only snapshot of page geometry.
//!
//! The surface measures the page once per event and hands the controllers a
//! [`Layout`]; controllers never query the page themselves.

use crate::section::SectionId;

/// Axis-aligned box in viewport coordinates (px).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether the box lies entirely inside the viewport.
    pub fn is_inside(&self, viewport: &Viewport) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom() <= viewport.height
            && self.right() <= viewport.width
    }
}

/// Visible window size (px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Geometry of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub id: SectionId,
    /// Distance from the document top
    pub offset_top: f64,
    /// Distance from the viewport top (negative once scrolled past)
    pub viewport_top: f64,
    /// Number of children that take part in the staggered reveal
    pub animated_children: usize,
}

/// Everything the controllers need to know about the page at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub viewport: Viewport,
    pub scroll_y: f64,
    /// Sections in document order
    pub sections: Vec<SectionLayout>,
    /// Bounding boxes of tilt-eligible elements, in document order
    pub tilt_targets: Vec<Rect>,
    pub has_hero: bool,
    /// Bounding box of the contact form's submit button
    pub submit_button: Rect,
}

impl Layout {
    /// Build a layout for a document whose sections start at `offsets`,
    /// deriving viewport positions from `scroll_y`.
    pub fn stacked(viewport: Viewport, scroll_y: f64, offsets: &[(SectionId, f64)]) -> Self {
        let sections = offsets
            .iter()
            .map(|&(id, offset_top)| SectionLayout {
                id,
                offset_top,
                viewport_top: offset_top - scroll_y,
                animated_children: 0,
            })
            .collect();
        Self {
            viewport,
            scroll_y,
            sections,
            tilt_targets: Vec::new(),
            has_hero: true,
            submit_button: Rect::default(),
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionLayout> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Same document scrolled to a different offset.
    pub fn scrolled_to(&self, scroll_y: f64) -> Self {
        let mut next = self.clone();
        for section in &mut next.sections {
            section.viewport_top = section.offset_top - scroll_y;
        }
        next.scroll_y = scroll_y;
        next
    }
}
