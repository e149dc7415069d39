#![forbid(unsafe_code)]

//! Body scroll suppression while the mobile menu overlay is open.
//!
//! The host exposes a single flag (on the web: `document.body.style.overflow`).
//! Only the menu lifecycle writes it, and only through [`ScrollLock`], which
//! sets the flag on acquisition and clears it on drop. Every way out of the
//! open state (toggle, navigation, resize, controller teardown, unwinding)
//! therefore releases the suppression.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

/// Host-side body scroll flag.
pub trait ScrollSuppression {
    fn set_suppressed(&mut self, suppressed: bool);
}

/// Held scroll suppression. Released on drop.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSuppression> {
    host: S,
}

impl<S: ScrollSuppression> ScrollLock<S> {
    /// Suppress background scrolling until the returned lock is dropped.
    pub fn acquire(mut host: S) -> Self {
        host.set_suppressed(true);
        trace!("body scroll suppressed");
        Self { host }
    }

    /// Release explicitly. Equivalent to dropping the lock.
    pub fn release(self) {}
}

impl<S: ScrollSuppression> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.host.set_suppressed(false);
        trace!("body scroll released");
    }
}

/// Suppression flag that records every write. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingSuppression {
    suppressed: Rc<Cell<bool>>,
    writes: Rc<RefCell<Vec<bool>>>,
}

impl RecordingSuppression {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flag value.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Every value written, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<bool> {
        self.writes.borrow().clone()
    }
}

impl ScrollSuppression for RecordingSuppression {
    fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed.set(suppressed);
        self.writes.borrow_mut().push(suppressed);
    }
}
