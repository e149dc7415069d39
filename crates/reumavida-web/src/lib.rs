#![forbid(unsafe_code)]

//! WASM host for the ReumaVida navigation controller.
//!
//! This crate provides [`NavigationRuntime`], a `wasm-bindgen`-exported
//! struct that drives `reumavida_core::NavController` from live DOM events:
//!
//! - geometry and smooth scrolling through `web-sys` (`dom`),
//! - body scroll suppression through `document.body.style.overflow`,
//! - scroll and resize listeners held by RAII guards (`listeners`),
//! - scroll sampling coalesced to one per `requestAnimationFrame`,
//! - `tracing` output and panics routed to the browser console (`logging`).
//!
//! ```text
//! scroll ─► RuntimeCore::scroll_event ─► requestAnimationFrame
//!                                          └► animation_frame ─► on_scroll
//! resize ─► RuntimeCore::resize_event ─► on_resize
//! click  ─► navigate / toggleMenu
//!           └► take_changes_json ─► host onChange(json)
//! ```

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::NavigationRuntime;

// Runtime core is used by the wasm module and by native tests.
#[cfg(any(target_arch = "wasm32", test))]
mod runtime_core;


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::NavigationRuntime;
    use crate::dom::BodyScrollLock;
    use reumavida_core::ScrollSuppression;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch(event: &str) {
        let window = web_sys::window().unwrap();
        window.dispatch_event(&Event::new(event).unwrap()).unwrap();
    }

    #[wasm_bindgen_test]
    fn runtime_mounts_and_unmounts() {
        let mut runtime = NavigationRuntime::new(None).unwrap();
        runtime.mount().unwrap();
        runtime.mount().unwrap();
        assert_eq!(runtime.active_section(), "home");
        runtime.destroy();
        runtime.destroy();
    }

    #[wasm_bindgen_test]
    fn destroy_removes_scroll_and_resize_listeners() {
        let mut runtime = NavigationRuntime::new(None).unwrap();
        runtime.mount().unwrap();

        dispatch("scroll");
        assert!(runtime.frame_pending());

        let calls = Rc::new(Cell::new(0_u32));
        let on_change = {
            let calls = Rc::clone(&calls);
            Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| calls.set(calls.get() + 1))
        };
        runtime.set_on_change(Some(on_change.as_ref().unchecked_ref::<js_sys::Function>().clone()));

        runtime.destroy();
        assert!(!runtime.frame_pending());

        dispatch("scroll");
        dispatch("resize");
        assert!(!runtime.frame_pending());
        assert_eq!(calls.get(), 0);
    }

    #[wasm_bindgen_test]
    fn body_scroll_lock_writes_overflow() {
        let window = web_sys::window().unwrap();
        let body = window.document().unwrap().body().unwrap();
        let mut lock = BodyScrollLock::from_window(&window).unwrap();

        lock.set_suppressed(true);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
        lock.set_suppressed(false);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
    }

    #[wasm_bindgen_test]
    fn runtime_rejects_bad_config() {
        assert!(NavigationRuntime::new(Some("{\"nav_height\": -5}".into())).is_err());
    }

    #[wasm_bindgen_test]
    fn navigate_to_unmounted_section_reports_no_scroll() {
        let runtime = NavigationRuntime::new(None).unwrap();
        assert_eq!(runtime.navigate("contact").ok(), Some(false));
        assert!(!runtime.is_menu_open());
        assert!(runtime.navigate("blog").is_err());
    }
}
