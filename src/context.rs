//! Page runtime shared through context.
//!
//! One [`Runtime`] per page owns the [`Driver`], the single pending timer
//! and the window listeners. Components reach it with [`use_runtime`] and
//! hand it events; it applies the resulting directives and re-arms the
//! timer for the scheduler's next due task.
//!
//! ## Usage
//!
//! ```ignore
//! let runtime = use_runtime();
//! rsx! {
//!     button { onclick: move |_| runtime.dispatch(Event::ThemeToggleClick), "🌙" }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Driver, Event, FolioResult, Portfolio, PortfolioConfig};
use gloo::timers::callback::Timeout;

use crate::dom::DomSurface;
use crate::events::Bindings;
use crate::storage::LocalThemeStore;

pub type PageDriver = Driver<LocalThemeStore, DomSurface>;

/// Shared runtime type for context.
///
/// `Rc` because the page is single threaded; the `RefCell`s are only
/// borrowed for the duration of one dispatch.
pub type SharedRuntime = Rc<Runtime>;

/// Milliseconds on the page clock.
pub fn now() -> u64 {
    js_sys::Date::now() as u64
}

#[derive(Default)]
pub struct Runtime {
    driver: RefCell<Option<PageDriver>>,
    timer: RefCell<Option<Timeout>>,
    bindings: RefCell<Option<Bindings>>,
}

impl Runtime {
    pub fn is_running(&self) -> bool {
        self.driver.borrow().is_some()
    }

    /// Initialise the page and install listeners. On failure nothing is
    /// kept and the page stays inert.
    pub fn start(self: &Rc<Self>, config: PortfolioConfig) -> FolioResult<()> {
        let started = now();
        let portfolio = Portfolio::new(config, LocalThemeStore, started)?;
        let mut driver = Driver::new(portfolio, DomSurface::new()?);
        driver.start(started)?;

        let bindings = Bindings::install(self, driver.portfolio().config())?;
        *self.driver.borrow_mut() = Some(driver);
        *self.bindings.borrow_mut() = Some(bindings);

        tracing::debug!("page listeners installed");
        self.rearm();
        Ok(())
    }

    pub fn dispatch(self: &Rc<Self>, event: Event) {
        self.dispatch_with(|_| Ok(event));
    }

    /// Dispatch an event that needs to read the page first (form values,
    /// button labels).
    pub fn dispatch_with(self: &Rc<Self>, build: impl FnOnce(&DomSurface) -> FolioResult<Event>) {
        {
            let Ok(mut slot) = self.driver.try_borrow_mut() else {
                tracing::debug!("runtime busy, event dropped");
                return;
            };
            let Some(driver) = slot.as_mut() else {
                return;
            };
            let result = build(driver.surface()).and_then(|event| driver.dispatch(now(), event));
            if let Err(err) = result {
                tracing::error!("event handling failed: {}", err);
            }
        }
        self.rearm();
    }

    fn tick(self: &Rc<Self>) {
        {
            let Ok(mut slot) = self.driver.try_borrow_mut() else {
                return;
            };
            let Some(driver) = slot.as_mut() else {
                return;
            };
            if let Err(err) = driver.tick(now()) {
                tracing::error!("scheduled task failed: {}", err);
            }
        }
        self.rearm();
    }

    /// Replace the pending timeout with one for the next due task.
    fn rearm(self: &Rc<Self>) {
        let due = self.driver.borrow_mut().as_mut().and_then(|d| d.next_due());
        let mut timer = self.timer.borrow_mut();
        timer.take();

        let Some(due) = due else {
            return;
        };
        let delay = u32::try_from(due.saturating_sub(now())).unwrap_or(u32::MAX);
        let runtime = Rc::downgrade(self);
        *timer = Some(Timeout::new(delay, move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.tick();
            }
        }));
    }
}

/// Hook to access the page runtime from context.
pub fn use_runtime() -> SharedRuntime {
    use_context::<SharedRuntime>()
}
