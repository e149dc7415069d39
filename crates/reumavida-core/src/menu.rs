#![forbid(unsafe_code)]

//! Mobile overlay menu lifecycle.
//!
//! ```text
//!            toggle (narrow)
//!   Closed ──────────────────► Open ── holds ScrollLock
//!     ▲                          │
//!     └──────────────────────────┘
//!      toggle | navigate | resize into wide | teardown
//! ```
//!
//! The open flag is an [`Observable`] so hosts can re-render on change; the
//! scroll lock lives exactly as long as the menu is open.

use serde::Serialize;
use tracing::debug;

use crate::config::LayoutClass;
use crate::observable::{Observable, Subscription};
use crate::scroll_lock::{ScrollLock, ScrollSuppression};

/// Why the menu closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseCause {
    Toggle,
    Navigate,
    Resize,
    Teardown,
}

/// Result of a toggle activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened,
    Closed,
    /// Toggle while the layout is wide: the menu control is not shown there
    /// and the menu may only be open in the narrow layout.
    Ignored,
}

/// Open/closed state machine owning the body scroll suppression.
pub struct MobileMenu<S: ScrollSuppression + Clone> {
    host: S,
    lock: Option<ScrollLock<S>>,
    open: Observable<bool>,
    layout: LayoutClass,
}

impl<S: ScrollSuppression + Clone> std::fmt::Debug for MobileMenu<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileMenu")
            .field("open", &self.is_open())
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<S: ScrollSuppression + Clone> MobileMenu<S> {
    /// Closed menu for a viewport currently in `layout`.
    pub fn new(host: S, layout: LayoutClass) -> Self {
        Self {
            host,
            lock: None,
            open: Observable::new(false),
            layout,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    #[must_use]
    pub fn layout(&self) -> LayoutClass {
        self.layout
    }

    /// Version of the open flag.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.open.version()
    }

    pub fn subscribe(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.open.subscribe(callback)
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        if self.is_open() {
            self.close(CloseCause::Toggle);
            return ToggleOutcome::Closed;
        }
        if self.layout == LayoutClass::Wide {
            debug!("menu toggle ignored in wide layout");
            return ToggleOutcome::Ignored;
        }
        self.lock = Some(ScrollLock::acquire(self.host.clone()));
        self.open.set(true);
        debug!("mobile menu opened");
        ToggleOutcome::Opened
    }

    /// Force the menu closed. Returns `true` if it was open.
    pub fn close(&mut self, cause: CloseCause) -> bool {
        let Some(lock) = self.lock.take() else {
            return false;
        };
        lock.release();
        self.open.set(false);
        debug!(?cause, "mobile menu closed");
        true
    }

    /// Record the viewport's new layout class. Landing in the wide layout
    /// while open closes the menu; returns `true` in that case.
    pub fn on_layout(&mut self, layout: LayoutClass) -> bool {
        self.layout = layout;
        layout == LayoutClass::Wide && self.close(CloseCause::Resize)
    }
}
