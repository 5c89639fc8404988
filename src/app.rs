use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::PortfolioConfig;

use crate::context::{Runtime, SharedRuntime};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page runtime, and starts the runtime once
/// the page is mounted.
#[component]
pub fn App() -> Element {
    let runtime: SharedRuntime = use_context_provider(|| Rc::new(Runtime::default()));

    use_effect(move || {
        if runtime.is_running() {
            return;
        }
        if let Err(e) = runtime.start(PortfolioConfig::default()) {
            tracing::error!("Failed to initialise portfolio: {}", e);
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
