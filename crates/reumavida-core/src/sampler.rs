#![forbid(unsafe_code)]

//! Scroll-position sampling.
//!
//! The probe offset is the scroll position pushed down by the fixed nav bar
//! and a small lookahead, so a section counts as active once its top edge is
//! just under the bar. Sections are tested in declaration order and the first
//! span containing the probe wins.
//!
//! # Known limitation
//!
//! First match, not best match. A zero-height section never matches, and a
//! probe that falls in a gap between spans (or above the first one) yields no
//! section at all; the caller keeps the previous active section in that case.
//!
//! Scroll events are far more frequent than frames. [`ScrollCoalescer`]
//! folds every scroll notification between two animation frames into a
//! single sample.

use crate::config::NavConfig;
use crate::geometry::SectionGeometry;
use crate::section::{SECTIONS, SectionId};

/// `scroll_y + nav_height + probe_lookahead`.
#[must_use]
pub fn probe_offset(scroll_y: f64, config: &NavConfig) -> f64 {
    scroll_y + config.nav_height + config.probe_lookahead
}

/// First section, in declaration order, whose span contains `probe`.
/// Sections missing from the document are skipped.
#[must_use]
pub fn section_at<G: SectionGeometry + ?Sized>(geometry: &G, probe: f64) -> Option<SectionId> {
    SECTIONS
        .iter()
        .map(|section| section.id)
        .find(|&id| {
            geometry
                .section_bounds(id)
                .is_some_and(|bounds| bounds.contains(probe))
        })
}

/// Resolve the active section for the host's current scroll position.
#[must_use]
pub fn sample<G: SectionGeometry + ?Sized>(geometry: &G, config: &NavConfig) -> Option<SectionId> {
    section_at(geometry, probe_offset(geometry.scroll_y(), config))
}

/// Collapses scroll notifications into at most one sample per frame.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    pending: bool,
    event_count: u32,
}

impl ScrollCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a scroll event. Returns `true` when this is the first event since
    /// the last drain, i.e. the host should request an animation frame.
    pub fn push(&mut self) -> bool {
        self.event_count = self.event_count.saturating_add(1);
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called from the animation frame. Returns the number of coalesced
    /// events, or `None` if nothing is pending.
    pub fn drain(&mut self) -> Option<u32> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(std::mem::take(&mut self.event_count))
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticGeometry;

    fn page() -> StaticGeometry {
        StaticGeometry::new()
            .with_section(SectionId::Home, 0.0, 700.0)
            .with_section(SectionId::About, 700.0, 800.0)
            .with_section(SectionId::Specialties, 1500.0, 800.0)
            .with_section(SectionId::Contact, 2300.0, 900.0)
    }

    #[test]
    fn probe_adds_nav_height_and_lookahead() {
        assert_eq!(probe_offset(0.0, &NavConfig::default()), 100.0);
        assert_eq!(probe_offset(1600.0, &NavConfig::default()), 1700.0);
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(sample(&page(), &NavConfig::default()), Some(SectionId::Home));
    }

    #[test]
    fn probe_in_specialties_span() {
        let geometry = page().with_scroll_y(1600.0);
        assert_eq!(
            sample(&geometry, &NavConfig::default()),
            Some(SectionId::Specialties)
        );
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let geometry = StaticGeometry::new()
            .with_section(SectionId::About, 0.0, 1000.0)
            .with_section(SectionId::Home, 500.0, 1000.0);
        // Home is declared first, so it wins wherever both spans contain the probe.
        assert_eq!(section_at(&geometry, 600.0), Some(SectionId::Home));
        assert_eq!(section_at(&geometry, 400.0), Some(SectionId::About));
    }

    #[test]
    fn gap_and_above_first_section_yield_none() {
        let geometry = StaticGeometry::new()
            .with_section(SectionId::Home, 200.0, 100.0)
            .with_section(SectionId::About, 400.0, 100.0);
        assert_eq!(section_at(&geometry, 150.0), None);
        assert_eq!(section_at(&geometry, 350.0), None);
    }

    #[test]
    fn zero_height_section_never_matches() {
        let geometry = StaticGeometry::new().with_section(SectionId::Home, 0.0, 0.0);
        assert_eq!(section_at(&geometry, 0.0), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut geometry = page();
        geometry.remove_section(SectionId::Home);
        assert_eq!(section_at(&geometry, 100.0), None);
        assert_eq!(section_at(&geometry, 800.0), Some(SectionId::About));
    }

    #[test]
    fn coalescer_requests_one_frame_per_burst() {
        let mut coalescer = ScrollCoalescer::new();
        assert_eq!(coalescer.drain(), None);

        assert!(coalescer.push());
        assert!(!coalescer.push());
        assert!(!coalescer.push());
        assert!(coalescer.has_pending());
        assert_eq!(coalescer.drain(), Some(3));

        assert!(!coalescer.has_pending());
        assert!(coalescer.push());
        assert_eq!(coalescer.drain(), Some(1));
    }
}
