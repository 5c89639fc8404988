//! Folio UI Components
//!
//! Dioxus components for the portfolio page shell. They only render
//! markup; every behavior (theme, scrolling, tilt, form submission) is
//! driven by `folio-core` through the element ids and classes these
//! components emit.
//!
//! ## Contract with folio-core
//!
//! - Sections render as `section.section#<id>`
//! - Form fields render an `input#<id>` and a `.error-message#<id>-error`
//! - Tilt cards carry `.card-3d`

pub mod components;

pub use components::*;
