#![forbid(unsafe_code)]

//! Versioned navigation state with change notification.
//!
//! [`Observable<T>`] holds one piece of controller state (the active section,
//! the menu flag) in `Rc<RefCell<..>>`. Writing a value equal to the current
//! one is a no-op: no version bump, no notification. That is what makes
//! repeated scroll samples at an unchanged offset invisible to subscribers.
//!
//! # Failure Modes
//!
//! - **Re-entrant write**: writing from inside a subscriber callback panics
//!   (RefCell borrow rules). A subscriber that needs to mutate navigation
//!   state should queue the change and apply it after the callback returns.
//! - **Subscriber leak**: callbacks live as long as their [`Subscription`]
//!   guard. Dead weak entries are pruned on the next notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value.
///
/// Clones are handles to the same value and subscriber list.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 per value-changing write.
/// 2. Writing the current value is a no-op.
/// 3. Subscribers run in registration order, after the write is committed.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Write `value`. Returns the previous value if it changed, `None` if the
    /// write was a no-op.
    ///
    /// # Panics
    ///
    /// Panics if called from within a subscriber callback.
    pub fn replace(&self, value: T) -> Option<T> {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return None;
            }
            inner.version += 1;
            std::mem::replace(&mut inner.value, value)
        };
        self.notify();
        Some(previous)
    }

    /// Write `value`, discarding the previous one.
    pub fn set(&self, value: T) {
        let _ = self.replace(value);
    }

    /// Register a change callback. Dropping the returned guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of value-changing writes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dropped ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        let (callbacks, value) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let callbacks: Vec<CallbackRc<T>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (callbacks, inner.value.clone())
        };
        for callback in &callbacks {
            callback(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
pub struct Subscription {
    // Keeps the callback `Rc` alive; the observable only holds a `Weak`.
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
