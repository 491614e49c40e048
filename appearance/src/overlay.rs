//! Overlay exclusivity: the nav menu, language dropdown, and theme
//! sidebar never stack — opening one closes the rest.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// The overlay panels the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    NavMenu,
    LanguageMenu,
    ThemeSidebar,
}

/// Which overlay, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    open: Option<Panel>,
}

impl OverlayState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        self.open == Some(panel)
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open a panel, closing whichever one was open.
    pub fn open(&mut self, panel: Panel) {
        self.open = Some(panel);
    }

    /// Close a panel if it is the one that's open.
    pub fn close(&mut self, panel: Panel) {
        if self.open == Some(panel) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn toggle(&mut self, panel: Panel) {
        if self.is_open(panel) {
            self.open = None;
        } else {
            self.open = Some(panel);
        }
    }

    /// Escape closes the theme sidebar. Returns whether the key was
    /// handled.
    pub fn escape(&mut self) -> bool {
        if self.is_open(Panel::ThemeSidebar) {
            self.open = None;
            return true;
        }
        false
    }

    /// Body scrolling is locked exactly while the sidebar is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_open(Panel::ThemeSidebar)
    }
}
