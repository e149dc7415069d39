#![forbid(unsafe_code)]

//! Render-ready view of the navigation chrome.
//!
//! Presentation components only receive labels, flags and ARIA attributes
//! from here; they invoke the controller on activation and never hold
//! navigation state themselves.

use serde::Serialize;

use crate::controller::NavigationState;
use crate::section::{SECTIONS, SectionId};

/// Accessible label of the mobile menu button.
pub const MENU_BUTTON_LABEL: &str = "Abrir menu";

/// One nav control, desktop bar or mobile overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItemView {
    pub id: SectionId,
    pub label: &'static str,
    pub active: bool,
    /// `aria-current` value: `"page"` on the active item.
    pub aria_current: Option<&'static str>,
}

/// Icon shown on the mobile menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuIcon {
    Menu,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuButtonView {
    pub aria_label: &'static str,
    pub aria_expanded: bool,
    pub icon: MenuIcon,
}

/// Everything the nav bar needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBarView {
    pub items: Vec<NavItemView>,
    pub menu_button: MenuButtonView,
    /// Whether the mobile overlay (a modal dialog) is rendered.
    pub overlay_visible: bool,
}

impl NavBarView {
    #[must_use]
    pub fn from_state(state: &NavigationState) -> Self {
        let items = SECTIONS
            .iter()
            .map(|section| {
                let active = section.id == state.active_section;
                NavItemView {
                    id: section.id,
                    label: section.label,
                    active,
                    aria_current: active.then_some("page"),
                }
            })
            .collect();
        Self {
            items,
            menu_button: MenuButtonView {
                aria_label: MENU_BUTTON_LABEL,
                aria_expanded: state.menu_open,
                icon: if state.menu_open {
                    MenuIcon::Close
                } else {
                    MenuIcon::Menu
                },
            },
            overlay_visible: state.menu_open,
        }
    }

    /// The item marked active. There is always exactly one.
    #[must_use]
    pub fn active_item(&self) -> Option<&NavItemView> {
        self.items.iter().find(|item| item.active)
    }
}
