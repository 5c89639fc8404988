//! Window and document listeners feeding the runtime.

use std::rc::{Rc, Weak};

use folio_core::{Event, FolioError, FolioResult, Key, PortfolioConfig, SectionId};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    MouseEvent,
};

use crate::context::Runtime;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Listeners and the section observer; dropping this detaches them.
pub struct Bindings {
    _listeners: Vec<EventListener>,
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Bindings {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn forward(runtime: &Weak<Runtime>, event: Event) {
    if let Some(runtime) = runtime.upgrade() {
        runtime.dispatch(event);
    }
}

impl Bindings {
    pub fn install(runtime: &Rc<Runtime>, config: &PortfolioConfig) -> FolioResult<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::Dom("no document".to_string()))?;
        let weak = Rc::downgrade(runtime);

        let mut listeners = Vec::new();

        let rt = weak.clone();
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            forward(&rt, Event::Scroll);
        }));

        let rt = weak.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            forward(&rt, Event::Resize);
        }));

        let rt = weak.clone();
        listeners.push(EventListener::new(&document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            forward(
                &rt,
                Event::PointerMove {
                    client_x: f64::from(event.client_x()),
                    client_y: f64::from(event.client_y()),
                },
            );
        }));

        let rt = weak.clone();
        let focus_document = document.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = Key::from_dom(&event.key());
                if key == Key::Other {
                    return;
                }
                let theme_toggle_focused = focus_document
                    .active_element()
                    .is_some_and(|element| element.id() == "theme-toggle");
                if key.prevents_default(theme_toggle_focused) {
                    event.prevent_default();
                }
                forward(
                    &rt,
                    Event::Key {
                        key,
                        theme_toggle_focused,
                    },
                );
            },
        ));

        let rt = weak;
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Ok(section) = entry.target().id().parse::<SectionId>() {
                        forward(&rt, Event::SectionIntersecting(section));
                    }
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.intersection_threshold));
        options.set_root_margin(&config.intersection_root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| FolioError::Dom(format!("{err:?}")))?;

        for section in &config.sections {
            if let Some(element) = document.get_element_by_id(section.as_str()) {
                observer.observe(&element);
            }
        }

        Ok(Self {
            _listeners: listeners,
            observer,
            _callback: callback,
        })
    }
}
