//! Folio Core Library
//!
//! Behavior for a single-page portfolio: theme switching, the mobile menu,
//! scroll-driven effects, pointer tilt, contact form validation, and the
//! cosmetic button and particle animations.
//!
//! ## Architecture
//!
//! - Controllers are plain functions and small state holders that turn a
//!   [`Layout`] snapshot plus an [`Event`] into [`Directive`]s.
//! - [`Portfolio`] owns all mutable state; there are no module globals.
//! - Every delayed effect is a [`Task`] on one virtual-clock [`Scheduler`].
//! - A [`Surface`] measures the page and applies directives; the browser
//!   provides one, [`RecordingSurface`] is the in-memory one.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{
//!     Driver, Event, Layout, MemoryThemeStore, Portfolio, PortfolioConfig, RecordingSurface,
//!     SectionId, Viewport,
//! };
//!
//! let layout = Layout::stacked(Viewport::default(), 0.0, &[(SectionId::Home, 0.0)]);
//! let portfolio = Portfolio::new(PortfolioConfig::default(), MemoryThemeStore::new(), 7)?;
//! let mut driver = Driver::new(portfolio, RecordingSurface::new(layout));
//!
//! driver.start(0)?;
//! driver.dispatch(10, Event::ThemeToggleClick)?;
//! assert_eq!(driver.portfolio().store().value(), Some("dark"));
//! # Ok::<(), folio_core::FolioError>(())
//! ```

pub mod config;
pub mod directive;
pub mod driver;
pub mod effects;
pub mod error;
pub mod form;
pub mod layout;
pub mod navigation;
pub mod portfolio;
pub mod scheduler;
pub mod scroll;
pub mod section;
pub mod surface;
pub mod theme;
pub mod tilt;

// Re-exports
pub use config::PortfolioConfig;
pub use directive::{Directive, Target};
pub use driver::Driver;
pub use effects::{ButtonAnimator, Control};
pub use error::{FolioError, FolioResult};
pub use form::{validate_form, Field, FormInput, FormPhase, ValidationErrors};
pub use layout::{Layout, Rect, SectionLayout, Viewport};
pub use navigation::Key;
pub use portfolio::{Event, Portfolio};
pub use scheduler::{Scheduler, Task, TimerId};
pub use section::SectionId;
pub use surface::{RecordingSurface, Surface, REQUIRED_ELEMENTS};
pub use theme::{MemoryThemeStore, Theme, ThemeStore, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
pub use tilt::PointerPosition;
