#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use appearance::overlay::OverlayState;
use appearance::scroll;

/// UI state for overlays and scroll-derived flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub overlays: OverlayState,
    pub header_shadow: bool,
    pub show_scroll_up: bool,
    pub active_section: Option<String>,
}

impl UiState {
    /// Recompute every scroll-derived flag for a new scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[scroll::Section]) {
        self.header_shadow = scroll::header_has_shadow(scroll_y);
        self.show_scroll_up = scroll::show_scroll_up(scroll_y);
        self.active_section = scroll::active_section(scroll_y, sections).map(str::to_owned);
    }
}
