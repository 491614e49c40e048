//! Scroll-position effects: header shadow, scroll-up button, active
//! section link.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_SHADOW_Y, SCROLL_UP_Y, SECTION_OFFSET_PX};

/// Whether the fixed header shows its shadow at this scroll offset.
#[must_use]
pub fn header_has_shadow(scroll_y: f64) -> bool {
    scroll_y >= HEADER_SHADOW_Y
}

/// Whether the scroll-up button is visible at this scroll offset.
#[must_use]
pub fn show_scroll_up(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_UP_Y
}

/// A page section's measured geometry, for active-link resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// The section element's id, which the nav links target.
    pub id: String,
    /// Document offset of the section top, in CSS pixels.
    pub top: f64,
    /// Rendered height, in CSS pixels.
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// The section whose nav link should be highlighted at this scroll offset.
///
/// Detection leads the section top by [`SECTION_OFFSET_PX`] so the link
/// activates as the section heading approaches, not when it hits the very
/// top. With overlapping geometry the later section wins.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    let mut active = None;
    for section in sections {
        let top = section.top - SECTION_OFFSET_PX;
        if scroll_y > top && scroll_y <= top + section.height {
            active = Some(section.id.as_str());
        }
    }
    active
}
