use super::*;
use crate::catalog::Category;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_not_scrolled() {
    let state = UiState::default();
    assert!(!state.scrolled);
    assert!(!state.mobile_menu_open);
}

#[test]
fn ui_state_default_filter_is_all() {
    assert_eq!(UiState::default().catalog_filter, CategoryFilter::All);
}

// =============================================================
// Scroll tracking
// =============================================================

#[test]
fn on_scroll_switches_past_threshold() {
    let mut state = UiState::default();
    state.on_scroll(NAVBAR_SCROLL_THRESHOLD);
    assert!(!state.scrolled);
    state.on_scroll(NAVBAR_SCROLL_THRESHOLD + 1.0);
    assert!(state.scrolled);
    state.on_scroll(0.0);
    assert!(!state.scrolled);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn catalog_filter_is_independent_of_menu() {
    let mut state = UiState { catalog_filter: CategoryFilter::Only(Category::Mobiles), ..UiState::default() };
    state.toggle_mobile_menu();
    assert_eq!(state.catalog_filter, CategoryFilter::Only(Category::Mobiles));
}

// =============================================================
// NAV_ITEMS
// =============================================================

#[test]
fn nav_items_are_anchors() {
    assert!(NAV_ITEMS.iter().all(|(_, href)| href.starts_with('#')));
    assert_eq!(NAV_ITEMS[0], ("Home", "#home"));
    assert_eq!(NAV_ITEMS[5], ("Contact Us", "#contact"));
}
