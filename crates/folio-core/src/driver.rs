//! Glue between a [`Portfolio`] and a [`Surface`].
//!
//! The host calls [`Driver::dispatch`] for page events and [`Driver::tick`]
//! when its timer fires at [`Driver::next_due`]. Each call measures the page
//! at most once and applies the resulting directives. Raw scroll events are
//! not measured: they only arm the throttle, and the throttled tick measures
//! when it fires.

use crate::error::FolioResult;
use crate::portfolio::{Event, Portfolio};
use crate::surface::Surface;
use crate::theme::ThemeStore;

pub struct Driver<S: ThemeStore, F: Surface> {
    portfolio: Portfolio<S>,
    surface: F,
}

impl<S: ThemeStore, F: Surface> Driver<S, F> {
    pub fn new(portfolio: Portfolio<S>, surface: F) -> Self {
        Self { portfolio, surface }
    }

    /// Initialise the page. Fails if the surface cannot be measured, e.g.
    /// because a required element is missing.
    pub fn start(&mut self, now: u64) -> FolioResult<()> {
        let layout = self.surface.layout()?;
        let directives = self.portfolio.init(now, &layout);
        self.surface.apply_all(&directives)
    }

    pub fn dispatch(&mut self, now: u64, event: Event) -> FolioResult<()> {
        if event == Event::Scroll {
            self.portfolio.note_scroll(now);
            return Ok(());
        }
        let layout = self.surface.layout()?;
        let directives = self.portfolio.handle(now, &layout, event);
        self.surface.apply_all(&directives)
    }

    /// Run everything due at `now`.
    pub fn tick(&mut self, now: u64) -> FolioResult<()> {
        let layout = self.surface.layout()?;
        let directives = self.portfolio.advance(now, &layout);
        self.surface.apply_all(&directives)
    }

    pub fn next_due(&mut self) -> Option<u64> {
        self.portfolio.next_due()
    }

    pub fn portfolio(&self) -> &Portfolio<S> {
        &self.portfolio
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut F {
        &mut self.surface
    }
}
