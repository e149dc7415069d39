#![forbid(unsafe_code)]

//! Scoped DOM event subscriptions.
//!
//! An [`EventListenerGuard`] owns both the JS closure and its registration;
//! dropping it removes the listener before the closure is freed, so a
//! listener can never outlive the runtime that installed it.

use reumavida_core::NavError;
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    /// Register `callback` for `event` on `target`. Passive listeners never
    /// call `preventDefault`, so the browser does not wait on them to scroll.
    pub fn register(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, NavError> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| NavError::Host(format!("addEventListener({event}) failed: {err:?}")))?;
        trace!(event, passive, "listener registered");
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => trace!(event = self.event, "listener removed"),
            Err(err) => warn!(event = self.event, ?err, "removeEventListener failed"),
        }
    }
}
