//! Toast notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum toasts shown at once; the oldest is dropped first.
pub const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.toasts.len() >= TOAST_LIMIT {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast { id, kind, title: title.into(), description: description.into() });
        id
    }

    /// Remove the toast with `id`, if it is still shown.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Body text for the toast raised after an add-to-cart action.
pub fn added_to_cart_description(product_name: &str, quantity: u32) -> String {
    if quantity > 1 {
        format!("{quantity} x {product_name} added to your cart.")
    } else {
        format!("{product_name} added to your cart.")
    }
}
