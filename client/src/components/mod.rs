//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome (navbar, cart panel, toasts, footer)
//! and catalog building blocks while reading/writing shared state from Leptos
//! context providers.

pub mod cart_sidebar;
pub mod footer;
pub mod icon;
pub mod navbar;
pub mod product_card;
pub mod rating_stars;
pub mod toaster;
