#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for the NavigationRuntime.
//!
//! This module wraps [`super::runtime_core::RuntimeCore`] with DOM wiring and
//! JS-friendly types. Only compiled on `wasm32` targets.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reumavida_core::content::{OutboundLink, PAGE, WHATSAPP};
use reumavida_core::{NavConfig, NavError, SECTIONS};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use super::dom::{self, BodyScrollLock, DomGeometry};
use super::listeners::EventListenerGuard;
use super::logging;
use super::runtime_core::RuntimeCore;

type Core = RuntimeCore<DomGeometry, BodyScrollLock>;

/// State reachable from listener closures.
struct Shared {
    core: RefCell<Core>,
    on_change: RefCell<Option<js_sys::Function>>,
    frame_id: Cell<Option<i32>>,
}

fn to_js(err: NavError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Hand pending transitions to the host callback. Runs with no borrow of the
/// core held, so the callback may call back into the runtime.
fn flush_changes(shared: &Shared) {
    let changes = shared.core.borrow_mut().take_changes_json();
    let json = match changes {
        Ok(Some(json)) => json,
        Ok(None) => return,
        Err(err) => {
            warn!(%err, "failed to encode navigation changes");
            return;
        }
    };
    let callback = shared.on_change.borrow().clone();
    if let Some(callback) = callback
        && let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json))
    {
        warn!(?err, "change callback threw");
    }
}

fn run_frame(shared: &Shared) {
    shared.core.borrow_mut().animation_frame();
    flush_changes(shared);
}

fn open_link(window: &Window, link: OutboundLink) -> Result<(), JsValue> {
    window
        .open_with_url_and_target_and_features(link.url, link.target, link.features)
        .map(|_| ())
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    logging::install_panic_hook();
}

/// Scroll-synchronized navigation for the ReumaVida page.
///
/// Host-driven: construct, register a change callback, then `mount()` to
/// attach the scroll and resize listeners. `destroy()` (or `free()`)
/// removes every listener and releases the body scroll lock.
#[wasm_bindgen]
pub struct NavigationRuntime {
    shared: Rc<Shared>,
    window: Window,
    listeners: Vec<EventListenerGuard>,
    frame: Option<Rc<Closure<dyn FnMut(f64)>>>,
}

#[wasm_bindgen]
impl NavigationRuntime {
    /// Create a runtime. `config_json` overrides `NavConfig` fields, e.g.
    /// `{"nav_height": 64, "log_level": "debug"}`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<NavigationRuntime, JsValue> {
        logging::install_panic_hook();
        let config = match config_json.as_deref() {
            Some(json) => NavConfig::from_json(json).map_err(to_js)?,
            None => NavConfig::default(),
        };
        logging::init(config.level().map_err(to_js)?);

        let window = dom::window().map_err(to_js)?;
        let geometry = DomGeometry::from_window(window.clone()).map_err(to_js)?;
        let body = BodyScrollLock::from_window(&window).map_err(to_js)?;
        Ok(Self {
            shared: Rc::new(Shared {
                core: RefCell::new(RuntimeCore::new(config, geometry, body)),
                on_change: RefCell::new(None),
                frame_id: Cell::new(None),
            }),
            window,
            listeners: Vec::new(),
            frame: None,
        })
    }

    /// Attach scroll (passive, sampled once per animation frame) and resize
    /// listeners. Calling it again while mounted does nothing.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }

        let frame = {
            let shared = Rc::clone(&self.shared);
            Rc::new(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                shared.frame_id.set(None);
                run_frame(&shared);
            }))
        };

        let on_scroll = {
            let shared = Rc::clone(&self.shared);
            let frame = Rc::clone(&frame);
            let window = self.window.clone();
            move |_: Event| {
                if !shared.core.borrow_mut().scroll_event() {
                    return;
                }
                let closure: &Closure<dyn FnMut(f64)> = &frame;
                match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => shared.frame_id.set(Some(id)),
                    Err(err) => {
                        warn!(?err, "requestAnimationFrame failed, sampling inline");
                        run_frame(&shared);
                    }
                }
            }
        };

        let on_resize = {
            let shared = Rc::clone(&self.shared);
            move |_: Event| {
                shared.core.borrow_mut().resize_event();
                flush_changes(&shared);
            }
        };

        let scroll = EventListenerGuard::register(&self.window, "scroll", true, on_scroll)
            .map_err(to_js)?;
        let resize = EventListenerGuard::register(&self.window, "resize", false, on_resize)
            .map_err(to_js)?;
        self.listeners = vec![scroll, resize];
        self.frame = Some(frame);

        // The viewport may have changed since construction.
        self.shared.core.borrow_mut().resize_event();
        flush_changes(&self.shared);
        debug!("navigation runtime mounted");
        Ok(())
    }

    /// Register `callback(json)` for state changes, or clear it with `null`.
    /// The payload is `{ state: { active_section, menu_open }, events: [...] }`.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&self, callback: Option<js_sys::Function>) {
        *self.shared.on_change.borrow_mut() = callback;
    }

    /// Nav control activation. Returns `true` if a scroll was started,
    /// `false` if the section is not in the document (the menu still closes).
    /// Throws on an unknown id.
    pub fn navigate(&self, id: &str) -> Result<bool, JsValue> {
        let result = self.shared.core.borrow_mut().navigate(id);
        flush_changes(&self.shared);
        result.map_err(to_js)
    }

    /// Mobile menu button. Returns whether the menu is now open.
    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&self) -> bool {
        let open = self.shared.core.borrow_mut().toggle_menu();
        flush_changes(&self.shared);
        open
    }

    /// Hero call-to-action by index (0: WhatsApp, 1: "Sobre mim").
    #[wasm_bindgen(js_name = activateHero)]
    pub fn activate_hero(&self, index: usize) -> Result<(), JsValue> {
        let link = self.shared.core.borrow_mut().activate_hero(index);
        flush_changes(&self.shared);
        match link.map_err(to_js)? {
            Some(link) => open_link(&self.window, link),
            None => Ok(()),
        }
    }

    /// Open the WhatsApp booking link in a new browsing context.
    #[wasm_bindgen(js_name = openWhatsApp)]
    pub fn open_whatsapp(&self) -> Result<(), JsValue> {
        open_link(&self.window, WHATSAPP)
    }

    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> String {
        self.shared.core.borrow().active_section().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.shared.core.borrow().is_menu_open()
    }

    /// Nav bar view: items with labels, active flags and ARIA attributes,
    /// plus the menu button state.
    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> Result<String, JsValue> {
        self.shared.core.borrow().view_json().map_err(to_js)
    }

    /// `[{ id, label }, ...]` in render order.
    #[wasm_bindgen(js_name = sectionsJson)]
    pub fn sections_json() -> Result<String, JsValue> {
        serde_json::to_string(&SECTIONS).map_err(|e| to_js(NavError::Host(e.to_string())))
    }

    /// Static page content.
    #[wasm_bindgen(js_name = contentJson)]
    pub fn content_json() -> Result<String, JsValue> {
        serde_json::to_string(&PAGE).map_err(|e| to_js(NavError::Host(e.to_string())))
    }

    /// Remove listeners, cancel a pending frame and release the body scroll
    /// lock. Safe to call more than once.
    pub fn destroy(&mut self) {
        self.teardown();
    }
}

impl NavigationRuntime {
    /// Whether a scroll sample is waiting on an animation frame.
    #[cfg(test)]
    pub(crate) fn frame_pending(&self) -> bool {
        self.shared.frame_id.get().is_some() || self.shared.core.borrow().frame_pending()
    }

    fn teardown(&mut self) {
        let was_mounted = !self.listeners.is_empty();
        self.listeners.clear();
        if let Some(id) = self.shared.frame_id.take()
            && let Err(err) = self.window.cancel_animation_frame(id)
        {
            warn!(?err, "cancelAnimationFrame failed");
        }
        self.frame = None;
        self.shared.core.borrow_mut().shutdown();
        flush_changes(&self.shared);
        if was_mounted {
            debug!("navigation runtime unmounted");
        }
    }
}

impl Drop for NavigationRuntime {
    fn drop(&mut self) {
        self.teardown();
    }
}
