//! Local chrome state of the site header (scroll density, mobile menu).
//!
//! DESIGN
//! ======
//! Owned by the header component and dropped with it. Both flags are
//! independent: scrolling never touches the menu and vice versa.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Offset in logical pixels past which the header compacts.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Compact style applies strictly above the threshold. No hysteresis.
pub fn is_compact(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub compact: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// Recompute `compact` for a new scroll offset. Returns whether it changed.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let compact = is_compact(scroll_y);
        let changed = compact != self.compact;
        self.compact = compact;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Classes for the `<header>` element.
    pub fn header_class(self) -> &'static str {
        if self.compact {
            "fixed w-full z-50 transition-all duration-300 bg-gray-900/95 backdrop-blur-md shadow-lg py-3"
        } else {
            "fixed w-full z-50 transition-all duration-300 bg-gray-900 py-5"
        }
    }
}
