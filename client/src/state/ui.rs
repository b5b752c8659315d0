//! Local UI chrome state (navbar, mobile menu, catalog filter).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the cart so page chrome can
//! evolve independently of cart contents. The catalog filter lives here
//! because both the category cards and the products section set it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::catalog::CategoryFilter;

/// Vertical scroll offset (px) past which the navbar switches to its solid style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

/// UI state for the navbar and catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Window has scrolled past [`NAVBAR_SCROLL_THRESHOLD`].
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub catalog_filter: CategoryFilter,
}

impl UiState {
    /// Record the current window scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

/// In-page navigation targets shown in the navbar, as (label, anchor).
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("Categories", "#categories"),
    ("Brands", "#brands"),
    ("Products", "#products"),
    ("Testimonials", "#testimonials"),
    ("Contact Us", "#contact"),
];
