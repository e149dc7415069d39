#![forbid(unsafe_code)]

//! Core: scroll-synchronized navigation for the ReumaVida page.
//!
//! # Role
//! `reumavida-core` is the platform-independent half of the site's
//! navigation chrome. It decides which section is active for a scroll
//! offset, where to scroll when a nav control is activated, and when the
//! mobile overlay menu opens, closes, and suppresses background scrolling.
//! It has no JS or DOM types; hosts plug in through two capability traits.
//!
//! # Primary responsibilities
//! - **NavController**: owns the active section and menu state, handles
//!   scroll, resize and activation events, records [`NavEvent`]s.
//! - **SectionGeometry**: host capability for section spans, scroll offset,
//!   viewport width and smooth scrolling.
//! - **ScrollLock**: RAII body scroll suppression held while the menu is open.
//! - **NavBarView**: render-ready labels, active flags and ARIA attributes.
//! - **content**: the static page payload.
//!
//! # How it fits
//! `reumavida-web` implements the capability traits over `web-sys`, wires
//! DOM listeners to the controller and exports it to JavaScript. Tests drive
//! the same controller with [`StaticGeometry`] and [`RecordingSuppression`].

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod menu;
pub mod observable;
pub mod sampler;
pub mod scroll_lock;
pub mod section;
pub mod view;

pub use config::{LayoutClass, NavConfig};
pub use controller::{ChangeCause, NavController, NavEvent, NavigateOutcome, NavigationState};
pub use error::NavError;
pub use geometry::{SectionBounds, SectionGeometry, StaticGeometry};
pub use menu::{CloseCause, MobileMenu, ToggleOutcome};
pub use observable::{Observable, Subscription};
pub use sampler::ScrollCoalescer;
pub use scroll_lock::{RecordingSuppression, ScrollLock, ScrollSuppression};
pub use section::{SECTIONS, Section, SectionId};
pub use view::NavBarView;
