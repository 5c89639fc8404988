//! Scroll-driven effects: navbar preset, section reveal, hero parallax, and
//! the throttle that coalesces raw scroll events into ticks.

use crate::directive::{Directive, Target};
use crate::layout::{Layout, SectionLayout};
use crate::scheduler::{Scheduler, Task, TimerId};
use crate::section::SectionId;
use crate::theme::Theme;

/// Inline styles the navbar wears in one scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarPreset {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarPreset {
    pub fn select(scrolled: bool, theme: Theme) -> NavbarPreset {
        let background = match (scrolled, theme) {
            (true, Theme::Dark) => "rgba(45, 55, 72, 0.98)",
            (true, Theme::Light) => "rgba(255, 255, 255, 0.98)",
            (false, Theme::Dark) => "rgba(45, 55, 72, 0.95)",
            (false, Theme::Light) => "rgba(255, 255, 255, 0.95)",
        };
        if scrolled {
            NavbarPreset {
                background,
                backdrop_filter: "blur(20px) saturate(180%)",
                box_shadow: "0 8px 32px rgba(0, 0, 0, 0.1)",
            }
        } else {
            NavbarPreset {
                background,
                backdrop_filter: "blur(10px)",
                box_shadow: "none",
            }
        }
    }

    fn directives(&self) -> Vec<Directive> {
        vec![
            Directive::style(Target::Navbar, "background", self.background),
            Directive::style(Target::Navbar, "backdrop-filter", self.backdrop_filter),
            Directive::style(Target::Navbar, "box-shadow", self.box_shadow),
        ]
    }
}

/// Navbar translucency for the current offset and theme.
pub fn handle_navbar_scroll(scroll_y: f64, theme: Theme, threshold: f64) -> Vec<Directive> {
    NavbarPreset::select(scroll_y > threshold, theme).directives()
}

/// Sections whose top edge has risen above `viewport height - margin`.
pub fn sections_in_view(layout: &Layout, margin: f64) -> impl Iterator<Item = &SectionLayout> {
    let limit = layout.viewport.height - margin;
    layout.sections.iter().filter(move |s| s.viewport_top < limit)
}

/// Mark `section` visible and schedule its children's staggered reveal.
pub fn reveal_section(
    section: &SectionLayout,
    stagger_ms: u64,
    scheduler: &mut Scheduler,
) -> Vec<Directive> {
    for index in 0..section.animated_children {
        scheduler.schedule(
            index as u64 * stagger_ms,
            Task::RevealChild {
                section: section.id,
                index,
            },
        );
    }
    vec![Directive::add_class(Target::Section(section.id), "visible")]
}

/// Final state of one staggered child.
pub fn reveal_child(section: SectionId, index: usize) -> Vec<Directive> {
    let target = Target::SectionChild { section, index };
    vec![
        Directive::style(target, "opacity", "1"),
        Directive::style(target, "transform", "translateY(0) translateZ(0)"),
    ]
}

/// Hero translation proportional to the scroll offset.
pub fn handle_parallax_effect(layout: &Layout, speed: f64) -> Option<Directive> {
    layout.has_hero.then(|| {
        Directive::style(
            Target::Hero,
            "transform",
            format!("translateY({}px)", layout.scroll_y * speed),
        )
    })
}

/// Initial pose of every section before the intersection observer
/// reveals it.
pub fn intersection_setup(sections: &[SectionId]) -> Vec<Directive> {
    sections
        .iter()
        .flat_map(|&id| {
            let target = Target::Section(id);
            [
                Directive::style(
                    target,
                    "transform",
                    "translateY(50px) translateZ(-20px) rotateX(10deg)",
                ),
                Directive::style(
                    target,
                    "transition",
                    "all 0.8s cubic-bezier(0.23, 1, 0.320, 1)",
                ),
            ]
        })
        .collect()
}

/// A section crossed the intersection threshold.
pub fn intersection_reveal(section: SectionId) -> Vec<Directive> {
    let target = Target::Section(section);
    vec![
        Directive::add_class(target, "visible"),
        Directive::style(target, "transform", "translateY(0) translateZ(0) rotateX(0)"),
        Directive::style(target, "opacity", "1"),
    ]
}

/// Coalesces raw scroll events into at most one tick per window.
///
/// The first event of an idle window arms a timer; events arriving while it
/// is armed are dropped. The tick itself measures the page when it fires.
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    pending: Option<TimerId>,
    ticks: u64,
    dropped: u64,
}

impl ScrollThrottle {
    /// Returns true if this event armed a new tick.
    pub fn on_scroll(&mut self, scheduler: &mut Scheduler, window_ms: u64) -> bool {
        if self.pending.is_some_and(|t| scheduler.is_pending(t)) {
            self.dropped += 1;
            return false;
        }
        self.pending = Some(scheduler.schedule(window_ms, Task::ScrollTick));
        true
    }

    /// Record that the armed tick fired.
    pub fn on_tick(&mut self) {
        self.pending = None;
        self.ticks += 1;
        tracing::debug!(ticks = self.ticks, dropped = self.dropped, "scroll tick");
    }

    /// Number of combined-handler runs so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Raw events swallowed by an armed window.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
