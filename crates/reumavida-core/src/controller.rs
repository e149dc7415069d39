#![forbid(unsafe_code)]

//! The navigation controller.
//!
//! Owns the active section and the mobile menu, and reacts to the host
//! event sources:
//!
//! | Source             | Handler                        |
//! |--------------------|--------------------------------|
//! | scroll (per frame) | [`NavController::on_scroll`]   |
//! | resize             | [`NavController::on_resize`]   |
//! | nav activation     | [`NavController::navigate`]    |
//! | menu button        | [`NavController::toggle_menu`] |
//!
//! Every state change is recorded as a [`NavEvent`]; hosts drain them with
//! [`NavController::take_events`] after each handler to re-render.
//!
//! Navigation updates the active section optimistically, before the smooth
//! scroll animation has moved anything. The sampler keeps running during
//! the animation, so intermediate frames may briefly highlight sections the
//! animation passes through; the state converges once the scroll settles.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::NavConfig;
use crate::error::NavError;
use crate::geometry::SectionGeometry;
use crate::menu::{CloseCause, MobileMenu, ToggleOutcome};
use crate::observable::{Observable, Subscription};
use crate::sampler;
use crate::scroll_lock::ScrollSuppression;
use crate::section::{SECTIONS, Section, SectionId};

/// What triggered an active-section change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCause {
    Scroll,
    Navigate,
}

/// A navigation state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEvent {
    ActiveSectionChanged {
        from: SectionId,
        to: SectionId,
        cause: ChangeCause,
    },
    MenuOpened,
    MenuClosed {
        cause: CloseCause,
    },
}

/// Result of [`NavController::navigate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigateOutcome {
    /// A smooth scroll to `top` was requested.
    Scrolled { target: SectionId, top: f64 },
    /// The target element is not in the document; nothing scrolled.
    TargetMissing(SectionId),
}

/// Snapshot of the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            menu_open: false,
        }
    }
}

/// Scroll-synchronized navigation controller.
pub struct NavController<G: SectionGeometry, S: ScrollSuppression + Clone> {
    config: NavConfig,
    geometry: G,
    active: Observable<SectionId>,
    menu: MobileMenu<S>,
    events: Vec<NavEvent>,
}

impl<G, S> std::fmt::Debug for NavController<G, S>
where
    G: SectionGeometry,
    S: ScrollSuppression + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("config", &self.config)
            .field("active", &self.active)
            .field("menu", &self.menu)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<G: SectionGeometry, S: ScrollSuppression + Clone> NavController<G, S> {
    /// Mount a controller: active section `home`, menu closed.
    ///
    /// The layout class is taken from the host's current viewport width.
    pub fn new(config: NavConfig, geometry: G, suppression: S) -> Self {
        let layout = config.layout_class(geometry.viewport_width());
        debug!(?layout, "navigation controller mounted");
        Self {
            config,
            geometry,
            active: Observable::new(SectionId::Home),
            menu: MobileMenu::new(suppression, layout),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Sections in render order.
    #[must_use]
    pub fn sections(&self) -> &'static [Section] {
        &SECTIONS
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.active.get()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        NavigationState {
            active_section: self.active_section(),
            menu_open: self.is_menu_open(),
        }
    }

    /// Sum of the active-section and menu versions. Unchanged means no
    /// transition happened.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.active.version() + self.menu.version()
    }

    /// Subscribe to active-section changes.
    ///
    /// Callbacks run while the controller is mutably borrowed; they must not
    /// call back into it.
    pub fn subscribe_active(&self, callback: impl Fn(&SectionId) + 'static) -> Subscription {
        self.active.subscribe(callback)
    }

    /// Subscribe to menu open/close changes. Same re-entrancy rule as
    /// [`subscribe_active`](Self::subscribe_active).
    pub fn subscribe_menu(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.menu.subscribe(callback)
    }

    /// Drain recorded transitions, oldest first.
    pub fn take_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    /// Sample the scroll position and update the active section.
    ///
    /// Returns the new active section if it changed. No match (gap, above
    /// the first section, nothing mounted) leaves the state untouched.
    pub fn on_scroll(&mut self) -> Option<SectionId> {
        let scroll_y = self.geometry.scroll_y();
        let probe = sampler::probe_offset(scroll_y, &self.config);
        let Some(found) = sampler::section_at(&self.geometry, probe) else {
            trace!(scroll_y, probe, "no section at probe");
            return None;
        };
        self.set_active(found, ChangeCause::Scroll)
    }

    /// Smooth-scroll to `target`, mark it active and close the menu.
    ///
    /// A missing target element skips the scroll and keeps the active section,
    /// but the menu still closes.
    pub fn navigate(&mut self, target: SectionId) -> NavigateOutcome {
        let outcome = match self.geometry.section_document_top(target) {
            Some(element_top) => {
                let top = element_top - self.config.nav_height;
                self.geometry.smooth_scroll_to(top);
                debug!(%target, top, "scrolling to section");
                self.set_active(target, ChangeCause::Navigate);
                NavigateOutcome::Scrolled { target, top }
            }
            None => {
                warn!(error = %NavError::MissingTarget(target), "navigation skipped scroll");
                NavigateOutcome::TargetMissing(target)
            }
        };
        self.close_menu(CloseCause::Navigate);
        outcome
    }

    /// [`navigate`](Self::navigate) by element id. Unknown ids are rejected
    /// without touching any state.
    pub fn navigate_to(&mut self, id: &str) -> Result<NavigateOutcome, NavError> {
        let target = id.parse::<SectionId>().inspect_err(|err| {
            warn!(%err, "navigation rejected");
        })?;
        Ok(self.navigate(target))
    }

    /// Menu button activation. Returns whether the menu is open afterwards.
    pub fn toggle_menu(&mut self) -> bool {
        match self.menu.toggle() {
            ToggleOutcome::Opened => self.events.push(NavEvent::MenuOpened),
            ToggleOutcome::Closed => self.events.push(NavEvent::MenuClosed {
                cause: CloseCause::Toggle,
            }),
            ToggleOutcome::Ignored => {}
        }
        self.is_menu_open()
    }

    /// Viewport resize: re-read the width and close the menu if the layout
    /// became wide.
    pub fn on_resize(&mut self) {
        let width = self.geometry.viewport_width();
        let layout = self.config.layout_class(width);
        trace!(width, ?layout, "viewport resized");
        if self.menu.on_layout(layout) {
            self.events.push(NavEvent::MenuClosed {
                cause: CloseCause::Resize,
            });
        }
    }

    /// Unmount: close the menu (releasing scroll suppression). Dropping the
    /// controller has the same effect on the host, minus the event.
    pub fn shutdown(&mut self) {
        self.close_menu(CloseCause::Teardown);
        debug!("navigation controller unmounted");
    }

    fn close_menu(&mut self, cause: CloseCause) {
        if self.menu.close(cause) {
            self.events.push(NavEvent::MenuClosed { cause });
        }
    }

    fn set_active(&mut self, to: SectionId, cause: ChangeCause) -> Option<SectionId> {
        let from = self.active.replace(to)?;
        debug!(%from, %to, ?cause, "active section changed");
        self.events
            .push(NavEvent::ActiveSectionChanged { from, to, cause });
        Some(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticGeometry;
    use crate::scroll_lock::RecordingSuppression;
    use pretty_assertions::assert_eq;

    type Controller = NavController<StaticGeometry, RecordingSuppression>;

    fn page(width: f64) -> StaticGeometry {
        StaticGeometry::tiled(&[
            (SectionId::Home, 700.0),
            (SectionId::About, 800.0),
            (SectionId::Specialties, 800.0),
            (SectionId::Contact, 900.0),
        ])
        .with_viewport_width(width)
    }

    fn mount(width: f64) -> (Controller, RecordingSuppression) {
        let host = RecordingSuppression::new();
        (
            NavController::new(NavConfig::default(), page(width), host.clone()),
            host,
        )
    }

    #[test]
    fn mounts_at_home_with_menu_closed() {
        let (nav, host) = mount(500.0);
        assert_eq!(nav.state(), NavigationState::default());
        assert_eq!(nav.version(), 0);
        assert!(!host.is_suppressed());
    }

    #[test]
    fn scroll_updates_active_section_and_records_event() {
        let (mut nav, _) = mount(1280.0);
        nav.geometry_mut().set_scroll_y(1600.0);
        assert_eq!(nav.on_scroll(), Some(SectionId::Specialties));
        assert_eq!(
            nav.take_events(),
            vec![NavEvent::ActiveSectionChanged {
                from: SectionId::Home,
                to: SectionId::Specialties,
                cause: ChangeCause::Scroll,
            }]
        );
    }

    #[test]
    fn repeated_sample_is_not_a_transition() {
        let (mut nav, _) = mount(1280.0);
        nav.geometry_mut().set_scroll_y(900.0);
        nav.on_scroll();
        nav.take_events();
        let version = nav.version();

        assert_eq!(nav.on_scroll(), None);
        assert!(nav.take_events().is_empty());
        assert_eq!(nav.version(), version);
    }

    #[test]
    fn scroll_into_gap_keeps_previous_section() {
        let geometry = StaticGeometry::new()
            .with_section(SectionId::Home, 0.0, 500.0)
            .with_section(SectionId::About, 1000.0, 500.0)
            .with_scroll_y(1000.0);
        let mut nav = NavController::new(NavConfig::default(), geometry, RecordingSuppression::new());
        nav.on_scroll();
        assert_eq!(nav.active_section(), SectionId::About);

        nav.geometry_mut().set_scroll_y(500.0);
        assert_eq!(nav.on_scroll(), None);
        assert_eq!(nav.active_section(), SectionId::About);
    }

    #[test]
    fn navigate_scrolls_below_nav_bar_and_closes_menu() {
        let (mut nav, host) = mount(500.0);
        assert!(nav.toggle_menu());
        assert!(host.is_suppressed());

        let outcome = nav.navigate(SectionId::Contact);
        assert_eq!(
            outcome,
            NavigateOutcome::Scrolled {
                target: SectionId::Contact,
                top: 2300.0 - 80.0,
            }
        );
        assert_eq!(nav.geometry().scroll_requests(), &[2220.0]);
        assert_eq!(nav.active_section(), SectionId::Contact);
        assert!(!nav.is_menu_open());
        assert!(!host.is_suppressed());
        assert_eq!(
            nav.take_events(),
            vec![
                NavEvent::MenuOpened,
                NavEvent::ActiveSectionChanged {
                    from: SectionId::Home,
                    to: SectionId::Contact,
                    cause: ChangeCause::Navigate,
                },
                NavEvent::MenuClosed {
                    cause: CloseCause::Navigate,
                },
            ]
        );
    }

    #[test]
    fn navigate_to_active_section_still_scrolls() {
        let (mut nav, _) = mount(1280.0);
        let outcome = nav.navigate(SectionId::Home);
        assert_eq!(
            outcome,
            NavigateOutcome::Scrolled {
                target: SectionId::Home,
                top: -80.0,
            }
        );
        assert!(nav.take_events().is_empty());
    }

    #[test]
    fn navigate_to_missing_section_only_closes_menu() {
        let (mut nav, host) = mount(500.0);
        nav.geometry_mut().remove_section(SectionId::About);
        nav.toggle_menu();
        nav.take_events();

        let outcome = nav.navigate(SectionId::About);
        assert_eq!(outcome, NavigateOutcome::TargetMissing(SectionId::About));
        assert!(nav.geometry().scroll_requests().is_empty());
        assert_eq!(nav.active_section(), SectionId::Home);
        assert!(!nav.is_menu_open());
        assert!(!host.is_suppressed());
        assert_eq!(
            nav.take_events(),
            vec![NavEvent::MenuClosed {
                cause: CloseCause::Navigate,
            }]
        );
    }

    #[test]
    fn navigate_to_rejects_unknown_id_without_side_effects() {
        let (mut nav, _) = mount(500.0);
        nav.toggle_menu();
        nav.take_events();

        let err = nav.navigate_to("blog").unwrap_err();
        assert_eq!(err, NavError::UnknownSection("blog".into()));
        assert!(nav.is_menu_open());
        assert!(nav.take_events().is_empty());
    }

    #[test]
    fn navigate_to_accepts_element_ids() {
        let (mut nav, _) = mount(1280.0);
        let outcome = nav.navigate_to("specialties").unwrap();
        assert_eq!(
            outcome,
            NavigateOutcome::Scrolled {
                target: SectionId::Specialties,
                top: 1420.0,
            }
        );
    }

    #[test]
    fn resize_to_wide_closes_menu_and_releases_suppression() {
        let (mut nav, host) = mount(500.0);
        nav.toggle_menu();
        nav.take_events();

        nav.geometry_mut().set_viewport_width(1024.0);
        nav.on_resize();
        assert!(!nav.is_menu_open());
        assert!(!host.is_suppressed());
        assert_eq!(
            nav.take_events(),
            vec![NavEvent::MenuClosed {
                cause: CloseCause::Resize,
            }]
        );
    }

    #[test]
    fn resize_while_closed_records_nothing() {
        let (mut nav, _) = mount(500.0);
        nav.geometry_mut().set_viewport_width(1024.0);
        nav.on_resize();
        assert!(nav.take_events().is_empty());
    }

    #[test]
    fn toggle_ignored_on_wide_viewport() {
        let (mut nav, host) = mount(1280.0);
        assert!(!nav.toggle_menu());
        assert!(nav.take_events().is_empty());
        assert!(host.writes().is_empty());
    }

    #[test]
    fn shutdown_releases_open_menu() {
        let (mut nav, host) = mount(500.0);
        nav.toggle_menu();
        nav.take_events();
        nav.shutdown();
        assert!(!host.is_suppressed());
        assert_eq!(
            nav.take_events(),
            vec![NavEvent::MenuClosed {
                cause: CloseCause::Teardown,
            }]
        );
    }

    #[test]
    fn drop_while_open_releases_suppression() {
        let (mut nav, host) = mount(500.0);
        nav.toggle_menu();
        drop(nav);
        assert!(!host.is_suppressed());
    }

    #[test]
    fn subscribers_see_navigation() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (mut nav, _) = mount(500.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_active = Rc::clone(&seen);
        let _active = nav.subscribe_active(move |id| seen_active.borrow_mut().push(id.to_string()));
        let seen_menu = Rc::clone(&seen);
        let _menu = nav.subscribe_menu(move |open| seen_menu.borrow_mut().push(format!("menu:{open}")));

        nav.toggle_menu();
        nav.navigate(SectionId::About);

        assert_eq!(*seen.borrow(), vec!["menu:true", "about", "menu:false"]);
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = NavEvent::ActiveSectionChanged {
            from: SectionId::Home,
            to: SectionId::About,
            cause: ChangeCause::Scroll,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"active_section_changed","from":"home","to":"about","cause":"scroll"}"#
        );
        let json = serde_json::to_string(&NavEvent::MenuClosed {
            cause: CloseCause::Resize,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"menu_closed","cause":"resize"}"#);
    }
}
