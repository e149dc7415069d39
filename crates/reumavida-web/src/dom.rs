#![forbid(unsafe_code)]

//! `web-sys` implementations of the core capability traits.

use reumavida_core::{NavError, ScrollSuppression, SectionBounds, SectionGeometry, SectionId};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub(crate) fn window() -> Result<Window, NavError> {
    web_sys::window().ok_or_else(|| NavError::Host("no global `window`".into()))
}

/// Live document geometry.
pub struct DomGeometry {
    window: Window,
    document: Document,
}

impl DomGeometry {
    pub fn from_window(window: Window) -> Result<Self, NavError> {
        let document = window
            .document()
            .ok_or_else(|| NavError::Host("window has no document".into()))?;
        Ok(Self { window, document })
    }

    fn element(&self, id: SectionId) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl SectionGeometry for DomGeometry {
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let element = self.element(id)?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn section_document_top(&self, id: SectionId) -> Option<f64> {
        let element = self.element(id)?;
        Some(element.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `document.body.style.overflow` as the scroll suppression flag.
#[derive(Clone)]
pub struct BodyScrollLock {
    body: HtmlElement,
}

impl BodyScrollLock {
    pub fn from_window(window: &Window) -> Result<Self, NavError> {
        let body = window
            .document()
            .and_then(|d| d.body())
            .ok_or_else(|| NavError::Host("document has no body".into()))?;
        Ok(Self { body })
    }
}

impl ScrollSuppression for BodyScrollLock {
    fn set_suppressed(&mut self, suppressed: bool) {
        let value = if suppressed { "hidden" } else { "" };
        if let Err(err) = self.body.style().set_property("overflow", value) {
            warn!(?err, suppressed, "failed to write body overflow");
        }
    }
}
