use super::*;
use crate::catalog::Category;

fn product(id: ProductId, dollars: u64) -> Product {
    Product {
        id,
        name: "Test product",
        brand: "Brand",
        category: Category::Electronics,
        price: Money::from_dollars(dollars),
        original_price: Money::from_dollars(dollars),
        rating: 4.0,
        images: &["img.jpg"],
        badge: None,
        in_stock: true,
        description: "",
        features: &[],
        specifications: &[],
    }
}

fn ids(cart: &CartState) -> Vec<ProductId> {
    cart.lines().iter().map(|line| line.product.id).collect()
}

fn assert_totals_consistent(cart: &CartState) {
    let items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
    let cents: u64 = cart
        .lines()
        .iter()
        .map(|l| l.product.price.cents() * u64::from(l.quantity))
        .sum();
    assert_eq!(cart.total_items(), items);
    assert_eq!(cart.total_price().cents(), cents);
    assert!(cart.lines().iter().all(|l| l.quantity > 0));
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn cart_default_is_empty_and_closed() {
    let cart = CartState::default();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Money::ZERO);
    assert!(!cart.panel_open());
}

// =============================================================
// add_to_cart
// =============================================================

#[test]
fn add_appends_new_line() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 2);
    assert_eq!(ids(&cart), [1]);
    assert_eq!(cart.quantity_of(1), 2);
}

#[test]
fn add_same_product_merges_quantities() {
    let p = product(1, 10);
    for (n, m) in [(1, 1), (2, 5), (7, 3)] {
        let mut cart = CartState::default();
        cart.add_to_cart(&p, n);
        cart.add_to_cart(&p, m);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), n + m);
        assert_totals_consistent(&cart);
    }
}

#[test]
fn add_zero_quantity_is_ignored() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 0);
    assert!(cart.is_empty());
}

#[test]
fn add_does_not_check_stock() {
    let mut cart = CartState::default();
    let mut p = product(1, 10);
    p.in_stock = false;
    cart.add_to_cart(&p, 1);
    assert_eq!(cart.quantity_of(1), 1);
}

#[test]
fn add_keeps_insertion_order() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(3, 10), 1);
    cart.add_to_cart(&product(1, 10), 1);
    cart.add_to_cart(&product(2, 10), 1);
    cart.add_to_cart(&product(3, 10), 4);
    assert_eq!(ids(&cart), [3, 1, 2]);
}

// =============================================================
// remove_from_cart
// =============================================================

#[test]
fn remove_deletes_matching_line() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 1);
    cart.add_to_cart(&product(2, 20), 1);
    cart.remove_from_cart(1);
    assert_eq!(ids(&cart), [2]);
    assert_totals_consistent(&cart);
}

#[test]
fn remove_missing_id_leaves_state_unchanged() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 2);
    cart.set_panel_open(true);
    let before = cart.clone();
    cart.remove_from_cart(99);
    assert_eq!(cart, before);
}

#[test]
fn remove_is_idempotent() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 2);
    cart.remove_from_cart(1);
    cart.remove_from_cart(1);
    assert!(cart.is_empty());
}

// =============================================================
// update_quantity
// =============================================================

#[test]
fn update_sets_exact_quantity() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 3);
    cart.update_quantity(1, 1);
    assert_eq!(cart.quantity_of(1), 1);
}

#[test]
fn update_to_zero_or_negative_removes_line() {
    for q in [0, -1, -5, i64::MIN] {
        let mut cart = CartState::default();
        cart.add_to_cart(&product(1, 10), 3);
        cart.add_to_cart(&product(2, 10), 1);
        cart.update_quantity(1, q);
        assert_eq!(ids(&cart), [2], "quantity {q} should remove the line");
    }
}

#[test]
fn update_missing_id_is_noop() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 3);
    let before = cart.clone();
    cart.update_quantity(42, 7);
    cart.update_quantity(42, 0);
    assert_eq!(cart, before);
}

#[test]
fn update_does_not_reorder_lines() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 1);
    cart.add_to_cart(&product(2, 10), 1);
    cart.update_quantity(1, 9);
    assert_eq!(ids(&cart), [1, 2]);
}

#[test]
fn update_saturates_huge_quantity() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 1);
    cart.update_quantity(1, i64::MAX);
    assert_eq!(cart.quantity_of(1), u32::MAX);
}

#[test]
fn total_items_counts_past_a_saturated_line() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), u32::MAX);
    cart.add_to_cart(&product(2, 10), 1);
    assert_eq!(cart.quantity_of(1), u32::MAX);
    assert_eq!(cart.total_items(), u64::from(u32::MAX) + 1);
}

// =============================================================
// Panel visibility
// =============================================================

#[test]
fn panel_toggle_does_not_touch_lines() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 10), 2);
    cart.set_panel_open(true);
    assert!(cart.panel_open());
    assert_eq!(cart.quantity_of(1), 2);
    cart.set_panel_open(false);
    assert!(!cart.panel_open());
    assert_eq!(cart.quantity_of(1), 2);
}

// =============================================================
// Totals
// =============================================================

#[test]
fn line_subtotal_is_price_times_quantity() {
    let line = CartLine { product: product(1, 25), quantity: 4 };
    assert_eq!(line.subtotal(), Money::from_dollars(100));
}

#[test]
fn totals_track_every_mutation() {
    let mut cart = CartState::default();
    cart.add_to_cart(&product(1, 699), 1);
    assert_totals_consistent(&cart);
    cart.add_to_cart(&product(2, 149), 3);
    assert_totals_consistent(&cart);
    cart.update_quantity(2, 2);
    assert_totals_consistent(&cart);
    cart.add_to_cart(&product(1, 699), 2);
    assert_totals_consistent(&cart);
    cart.remove_from_cart(1);
    assert_totals_consistent(&cart);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Money::from_dollars(298));
}

#[test]
fn checkout_walkthrough() {
    let p = product(1, 100);
    let mut cart = CartState::default();

    cart.add_to_cart(&p, 2);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Money::from_dollars(200));

    cart.add_to_cart(&p, 1);
    assert_eq!(cart.quantity_of(1), 3);
    assert_eq!(cart.total_price(), Money::from_dollars(300));

    cart.update_quantity(1, 1);
    assert_eq!(cart.quantity_of(1), 1);
    assert_eq!(cart.total_price(), Money::from_dollars(100));

    cart.remove_from_cart(1);
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Money::ZERO);
}
