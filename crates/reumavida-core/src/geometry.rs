#![forbid(unsafe_code)]

//! Host geometry capability.
//!
//! Section positions, the scroll offset and the viewport width belong to the
//! rendering host. The controller only reads them (and asks the host to
//! scroll) through [`SectionGeometry`], so it runs the same against the live
//! DOM and against [`StaticGeometry`] in tests or prerendering.

use std::collections::HashMap;

use crate::section::SectionId;

/// Vertical span of a section element, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Distance from the top of the document (`offsetTop`).
    pub offset_top: f64,
    /// Rendered height (`offsetHeight`).
    pub offset_height: f64,
}

impl SectionBounds {
    #[must_use]
    pub const fn new(offset_top: f64, offset_height: f64) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.offset_top + self.offset_height
    }

    /// Half-open containment: `[offset_top, offset_top + offset_height)`.
    ///
    /// A zero-height section contains nothing.
    #[must_use]
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.offset_top && offset < self.bottom()
    }
}

/// Read/scroll access to the host document.
pub trait SectionGeometry {
    /// Bounds of the element for `id`, or `None` if it is not in the document.
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds>;

    /// Document-relative top of the element for `id` (its viewport-relative
    /// top plus the current scroll offset), or `None` if it is missing.
    fn section_document_top(&self, id: SectionId) -> Option<f64>;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Current viewport width.
    fn viewport_width(&self) -> f64;

    /// Ask the host to animate the viewport to an absolute vertical offset.
    fn smooth_scroll_to(&mut self, top: f64);
}

/// In-memory geometry with fixed section spans.
///
/// Scroll requests are recorded, not animated; call [`settle`](Self::settle)
/// to jump to the last requested offset as if the animation finished.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    sections: HashMap<SectionId, SectionBounds>,
    scroll_y: f64,
    viewport_width: f64,
    scroll_requests: Vec<f64>,
}

impl StaticGeometry {
    /// Empty document with a wide viewport at scroll offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport_width: 1280.0,
            ..Self::default()
        }
    }

    /// Stack sections back to back starting at offset 0, in the given order.
    #[must_use]
    pub fn tiled(heights: &[(SectionId, f64)]) -> Self {
        let mut geometry = Self::new();
        let mut top = 0.0;
        for &(id, height) in heights {
            geometry.sections.insert(id, SectionBounds::new(top, height));
            top += height;
        }
        geometry
    }

    #[must_use]
    pub fn with_section(mut self, id: SectionId, offset_top: f64, offset_height: f64) -> Self {
        self.sections
            .insert(id, SectionBounds::new(offset_top, offset_height));
        self
    }

    #[must_use]
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    #[must_use]
    pub fn with_scroll_y(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn set_section(&mut self, id: SectionId, bounds: SectionBounds) {
        self.sections.insert(id, bounds);
    }

    /// Unmount a section element.
    pub fn remove_section(&mut self, id: SectionId) -> Option<SectionBounds> {
        self.sections.remove(&id)
    }

    /// Every offset passed to `smooth_scroll_to`, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    /// Jump to the most recent scroll request. Returns the new offset.
    pub fn settle(&mut self) -> Option<f64> {
        let top = *self.scroll_requests.last()?;
        self.scroll_y = top;
        Some(top)
    }
}

impl SectionGeometry for StaticGeometry {
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.sections.get(&id).copied()
    }

    fn section_document_top(&self, id: SectionId) -> Option<f64> {
        self.sections.get(&id).map(|b| b.offset_top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let bounds = SectionBounds::new(100.0, 50.0);
        assert!(!bounds.contains(99.9));
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(149.9));
        assert!(!bounds.contains(150.0));
    }

    #[test]
    fn zero_height_contains_nothing() {
        let bounds = SectionBounds::new(100.0, 0.0);
        assert!(!bounds.contains(100.0));
    }

    #[test]
    fn tiled_stacks_sections() {
        let geometry = StaticGeometry::tiled(&[
            (SectionId::Home, 700.0),
            (SectionId::About, 800.0),
            (SectionId::Specialties, 800.0),
        ]);
        assert_eq!(
            geometry.section_bounds(SectionId::Specialties),
            Some(SectionBounds::new(1500.0, 800.0))
        );
        assert_eq!(geometry.section_bounds(SectionId::Contact), None);
    }

    #[test]
    fn settle_jumps_to_last_request() {
        let mut geometry = StaticGeometry::new();
        assert_eq!(geometry.settle(), None);
        geometry.smooth_scroll_to(400.0);
        geometry.smooth_scroll_to(1200.0);
        assert_eq!(geometry.settle(), Some(1200.0));
        assert_eq!(geometry.scroll_y(), 1200.0);
        assert_eq!(geometry.scroll_requests(), &[400.0, 1200.0]);
    }
}
