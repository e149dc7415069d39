#![forbid(unsafe_code)]

//! Platform-independent runtime wrapping [`NavController`].
//!
//! Shared between the wasm-bindgen exports and native tests: the DOM side
//! only forwards events here and turns the JSON it gets back into JS values.
//! No JS/WASM types in this module.

use reumavida_core::content::{Action, HERO_ACTIONS, OutboundLink};
use reumavida_core::{
    NavBarView, NavConfig, NavController, NavError, NavEvent, NavigateOutcome, NavigationState,
    ScrollCoalescer, ScrollSuppression, SectionGeometry, SectionId,
};
use serde::Serialize;
use tracing::{debug, trace};

/// Payload handed to the host's change callback.
#[derive(Debug, Serialize)]
struct ChangeBatch<'a> {
    state: NavigationState,
    events: &'a [NavEvent],
}

/// Event-driven runtime: scroll coalescing plus controller dispatch.
pub struct RuntimeCore<G: SectionGeometry, S: ScrollSuppression + Clone> {
    nav: NavController<G, S>,
    coalescer: ScrollCoalescer,
    frames_sampled: u64,
}

impl<G: SectionGeometry, S: ScrollSuppression + Clone> RuntimeCore<G, S> {
    pub fn new(config: NavConfig, geometry: G, suppression: S) -> Self {
        Self {
            nav: NavController::new(config, geometry, suppression),
            coalescer: ScrollCoalescer::new(),
            frames_sampled: 0,
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[must_use]
    pub fn controller(&self) -> &NavController<G, S> {
        &self.nav
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn controller_mut(&mut self) -> &mut NavController<G, S> {
        &mut self.nav
    }

    /// Scroll listener body. Returns `true` when the host must request an
    /// animation frame; later events in the same frame only bump a counter.
    pub fn scroll_event(&mut self) -> bool {
        self.coalescer.push()
    }

    /// Animation frame callback: one sample for all scroll events since the
    /// previous frame.
    pub fn animation_frame(&mut self) -> Option<SectionId> {
        let coalesced = self.coalescer.drain()?;
        self.frames_sampled += 1;
        trace!(coalesced, frame = self.frames_sampled, "sampling scroll position");
        self.nav.on_scroll()
    }

    /// Whether a frame has been requested and not yet run.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.coalescer.has_pending()
    }

    pub fn resize_event(&mut self) {
        self.nav.on_resize();
    }

    /// Nav control activation by element id. Returns `true` if a scroll was
    /// requested, `false` if the target is not mounted.
    pub fn navigate(&mut self, id: &str) -> Result<bool, NavError> {
        let outcome = self.nav.navigate_to(id)?;
        Ok(matches!(outcome, NavigateOutcome::Scrolled { .. }))
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    /// Run a call-to-action. In-page actions navigate; outbound ones are
    /// returned for the host to open.
    pub fn activate(&mut self, action: Action) -> Option<OutboundLink> {
        match action {
            Action::Navigate { section } => {
                self.nav.navigate(section);
                None
            }
            Action::Open { link } => {
                debug!(url = link.url, "opening outbound link");
                Some(link)
            }
        }
    }

    /// Run the hero button at `index`.
    pub fn activate_hero(&mut self, index: usize) -> Result<Option<OutboundLink>, NavError> {
        let cta = HERO_ACTIONS
            .get(index)
            .ok_or(NavError::UnknownAction(index))?;
        Ok(self.activate(cta.action))
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.nav.active_section()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.nav.is_menu_open()
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[must_use]
    pub fn frames_sampled(&self) -> u64 {
        self.frames_sampled
    }

    /// Nav bar view for the current state, as JSON.
    pub fn view_json(&self) -> Result<String, NavError> {
        to_json(&NavBarView::from_state(&self.nav.state()))
    }

    /// Drain pending transitions. `None` when nothing changed since the last
    /// call, otherwise `{ state, events }` as JSON.
    pub fn take_changes_json(&mut self) -> Result<Option<String>, NavError> {
        let events = self.nav.take_events();
        if events.is_empty() {
            return Ok(None);
        }
        let batch = ChangeBatch {
            state: self.nav.state(),
            events: &events,
        };
        to_json(&batch).map(Some)
    }

    /// Unmount. Closes the menu and drops any pending frame.
    pub fn shutdown(&mut self) {
        let _ = self.coalescer.drain();
        self.nav.shutdown();
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, NavError> {
    serde_json::to_string(value).map_err(|e| NavError::Host(e.to_string()))
}
