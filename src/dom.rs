//! Browser implementation of [`Surface`]
//!
//! Measures the live document into a [`Layout`] and applies directives
//! through `web-sys`. Targets with an element id are looked up by id; the
//! rest are resolved with the selectors below.

use std::collections::HashMap;

use folio_core::{
    Directive, Field, FolioError, FolioResult, FormInput, Layout, Rect, SectionId, SectionLayout,
    Surface, Target, Viewport, REQUIRED_ELEMENTS,
};
use folio_ui::ANIMATED_CHILD_SELECTOR;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

const TILT_SELECTOR: &str = ".tilt-element, .card-3d";
const PROJECT_LINK_SELECTOR: &str = ".project-link";
const PARTICLE_CLASS: &str = "success-particle";

fn dom_error(err: JsValue) -> FolioError {
    FolioError::Dom(format!("{err:?}"))
}

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub struct DomSurface {
    window: Window,
    document: Document,
    particles: HashMap<u32, Element>,
}

impl DomSurface {
    pub fn new() -> FolioResult<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::Dom("no document".to_string()))?;
        Ok(Self {
            window,
            document,
            particles: HashMap::new(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn by_id(&self, id: &str) -> FolioResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FolioError::MissingElement(id.to_string()))
    }

    fn query(&self, selector: &str) -> FolioResult<Option<Element>> {
        self.document.query_selector(selector).map_err(dom_error)
    }

    fn elements(list: Result<NodeList, JsValue>) -> FolioResult<Vec<Element>> {
        let list = list.map_err(dom_error)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn nth(&self, selector: &str, index: usize) -> FolioResult<Option<Element>> {
        Ok(Self::elements(self.document.query_selector_all(selector))?
            .into_iter()
            .nth(index))
    }

    /// Resolve a directive target to its element.
    fn element(&self, target: Target) -> FolioResult<Element> {
        if let Some(id) = target.element_id() {
            return self.by_id(&id);
        }

        let found = match target {
            Target::Root => self.document.document_element(),
            Target::Body => self.document.body().map(Element::from),
            Target::ThemeIcon => self.query("#theme-toggle .theme-icon")?,
            Target::NavLink(section) => {
                self.query(&format!(".nav-link[href=\"{}\"]", section.href()))?
            }
            Target::SectionChild { section, index } => {
                let parent = self.by_id(section.as_str())?;
                Self::elements(parent.query_selector_all(ANIMATED_CHILD_SELECTOR))?
                    .into_iter()
                    .nth(index)
            }
            Target::Hero => self.query(".hero")?,
            Target::TiltTarget(index) => self.nth(TILT_SELECTOR, index)?,
            Target::SubmitButton => self.query("#contact-form .submit-button")?,
            Target::ProjectLink(index) => self.nth(PROJECT_LINK_SELECTOR, index)?,
            _ => None,
        };

        found.ok_or_else(|| FolioError::MissingElement(format!("{target:?}")))
    }

    fn html_element(&self, target: Target) -> FolioResult<HtmlElement> {
        self.element(target)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| FolioError::Dom(format!("{target:?} is not an HTML element")))
    }

    /// Current visible text of a control, used as the label it returns to.
    pub fn label_of(&self, target: Target) -> FolioResult<String> {
        Ok(self.element(target)?.text_content().unwrap_or_default())
    }

    /// Read the three contact fields.
    pub fn read_form(&self) -> FolioResult<FormInput> {
        let input_value = |field: Field| -> FolioResult<String> {
            let element = self.by_id(field.as_str())?;
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                return Ok(input.value());
            }
            element
                .dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .map_err(|_| FolioError::Dom(format!("{field} is not a form field")))
        };

        Ok(FormInput::new(
            input_value(Field::Name)?,
            input_value(Field::Email)?,
            input_value(Field::Message)?,
        ))
    }

    fn spawn_particle(
        &mut self,
        id: u32,
        at: (f64, f64),
        travel: (f64, f64),
        duration_ms: u64,
    ) -> FolioResult<()> {
        let ((x, y), (dx, dy)) = (at, travel);
        let particle = self.document.create_element("div").map_err(dom_error)?;
        particle.set_class_name(PARTICLE_CLASS);
        let style = format!(
            "left: {x}px; top: {y}px; --dx: {dx}px; --dy: {dy}px; \
             animation-duration: {duration_ms}ms;"
        );
        particle.set_attribute("style", &style).map_err(dom_error)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| FolioError::MissingElement("body".to_string()))?;
        body.append_child(&particle).map_err(dom_error)?;
        self.particles.insert(id, particle);
        Ok(())
    }
}

impl Surface for DomSurface {
    fn layout(&self) -> FolioResult<Layout> {
        for selector in REQUIRED_ELEMENTS {
            if self.query(selector)?.is_none() {
                return Err(FolioError::MissingElement(selector.to_string()));
            }
        }

        let number = |value: Result<JsValue, JsValue>| -> FolioResult<f64> {
            value
                .map_err(dom_error)?
                .as_f64()
                .ok_or_else(|| FolioError::Dom("viewport size is not a number".to_string()))
        };
        let viewport = Viewport {
            width: number(self.window.inner_width())?,
            height: number(self.window.inner_height())?,
        };
        let scroll_y = self.window.scroll_y().map_err(dom_error)?;

        let mut sections = Vec::new();
        for id in SectionId::ALL {
            let Some(element) = self.document.get_element_by_id(id.as_str()) else {
                continue;
            };
            let offset_top = element
                .dyn_ref::<HtmlElement>()
                .map(|html| html.offset_top() as f64)
                .unwrap_or_default();
            let children = Self::elements(element.query_selector_all(ANIMATED_CHILD_SELECTOR))?;
            sections.push(SectionLayout {
                id,
                offset_top,
                viewport_top: element.get_bounding_client_rect().top(),
                animated_children: children.len(),
            });
        }

        let tilt_targets = Self::elements(self.document.query_selector_all(TILT_SELECTOR))?
            .iter()
            .map(rect_of)
            .collect();
        let submit_button = self
            .query("#contact-form .submit-button")?
            .map(|button| rect_of(&button))
            .unwrap_or_default();

        Ok(Layout {
            viewport,
            scroll_y,
            sections,
            tilt_targets,
            has_hero: self.query(".hero")?.is_some(),
            submit_button,
        })
    }

    fn apply(&mut self, directive: &Directive) -> FolioResult<()> {
        match directive {
            Directive::SetAttribute { target, name, value } => self
                .element(*target)?
                .set_attribute(name, value)
                .map_err(dom_error),
            Directive::SetStyle {
                target,
                property,
                value,
            } => {
                let style = self.html_element(*target)?.style();
                if value.is_empty() {
                    style.remove_property(property).map(|_| ()).map_err(dom_error)
                } else {
                    style.set_property(property, value).map_err(dom_error)
                }
            }
            Directive::AddClass { target, class } => self
                .element(*target)?
                .class_list()
                .add_1(class)
                .map_err(dom_error),
            Directive::RemoveClass { target, class } => self
                .element(*target)?
                .class_list()
                .remove_1(class)
                .map_err(dom_error),
            Directive::SetText { target, text } => {
                self.element(*target)?.set_text_content(Some(text.as_str()));
                Ok(())
            }
            Directive::SetDisabled { target, disabled } => {
                let element = self.element(*target)?;
                if *disabled {
                    element.set_attribute("disabled", "").map_err(dom_error)
                } else {
                    element.remove_attribute("disabled").map_err(dom_error)
                }
            }
            Directive::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
                Ok(())
            }
            Directive::ScrollIntoView { target } => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                self.element(*target)?
                    .scroll_into_view_with_scroll_into_view_options(&options);
                Ok(())
            }
            Directive::ResetForm => {
                self.element(Target::ContactForm)?
                    .dyn_into::<HtmlFormElement>()
                    .map_err(|_| FolioError::Dom("contact-form is not a form".to_string()))?
                    .reset();
                Ok(())
            }
            Directive::SpawnParticle {
                id,
                x,
                y,
                dx,
                dy,
                duration_ms,
            } => self.spawn_particle(*id, (*x, *y), (*dx, *dy), *duration_ms),
            Directive::RemoveParticle { id } => {
                let particle = self
                    .particles
                    .remove(id)
                    .ok_or_else(|| FolioError::Dom(format!("no particle {id}")))?;
                particle.remove();
                Ok(())
            }
        }
    }
}
