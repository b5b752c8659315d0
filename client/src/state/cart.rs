//! Shopping cart state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<CartState>` is created by the root `App` and provided via
//! context. The navbar, catalog, detail page, and cart sidebar all read and
//! mutate that single instance, so a mutation made inside one
//! `signal.update(..)` is observed by every consumer at once.
//!
//! DESIGN
//! ======
//! Fields are private: lines can only change through the operations below,
//! which keep quantities positive and product ids unique. Item count and
//! total price are computed from the lines on every read and never stored.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::Serialize;

use crate::catalog::{Money, Product, ProductId};

/// One product in the cart with its quantity (always at least 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// Cart contents plus the visibility of the cart sidebar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    lines: Vec<CartLine>,
    panel_open: bool,
}

impl CartState {
    /// Lines in the order their products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `product_id` in the cart, or 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product.id == product_id)
            .map_or(0, |line| line.quantity)
    }

    /// Sum of all line quantities. Widened so saturated lines cannot overflow.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same product id, otherwise
    /// appends a new line. Stock is not checked here; callers disable their
    /// controls for out-of-stock products. A zero quantity is ignored.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product: *product, quantity }),
        }
        log::debug!("cart: +{quantity} x product {} ({} items)", product.id, self.total_items());
    }

    /// Remove the line for `product_id`; a no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != product_id);
        if self.lines.len() != before {
            log::debug!("cart: removed product {product_id}");
        }
    }

    /// Set the quantity for `product_id` exactly.
    ///
    /// Zero or negative quantities remove the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
            log::debug!("cart: product {product_id} set to {quantity}");
        }
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }
}
