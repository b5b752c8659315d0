use std::collections::HashSet;

use super::*;
use crate::catalog::products::{PRODUCTS, find_product};

fn product(id: ProductId, category: Category) -> Product {
    Product {
        id,
        name: "Test",
        brand: "Brand",
        category,
        price: Money::from_dollars(100),
        original_price: Money::from_dollars(120),
        rating: 4.5,
        images: &["a.jpg", "b.jpg"],
        badge: None,
        in_stock: true,
        description: "",
        features: &[],
        specifications: &[],
    }
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_parses_from_label() {
    for category in Category::ALL {
        assert_eq!(category.label().parse::<Category>(), Ok(category));
    }
}

#[test]
fn category_parse_rejects_unknown_label() {
    let err = "Toys".parse::<Category>().unwrap_err();
    assert_eq!(err, ParseCategoryError("Toys".to_owned()));
    assert_eq!(err.to_string(), "unknown product category: Toys");
}

#[test]
fn category_display_matches_label() {
    assert_eq!(Category::HomeAppliances.to_string(), "Home Appliances");
}

// =============================================================
// CategoryFilter
// =============================================================

#[test]
fn filter_default_is_all() {
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
}

#[test]
fn filter_tabs_start_with_all() {
    let labels: Vec<_> = CategoryFilter::TABS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Electronics", "Mobiles", "Home Appliances", "Furniture"]);
}

#[test]
fn filter_all_keeps_every_product_in_order() {
    let products = [product(1, Category::Mobiles), product(2, Category::Furniture)];
    let ids: Vec<_> = filter_products(&products, CategoryFilter::All).iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[test]
fn filter_only_keeps_matching_category() {
    let products = [
        product(1, Category::Electronics),
        product(2, Category::Mobiles),
        product(3, Category::Electronics),
    ];
    let ids: Vec<_> = filter_products(&products, CategoryFilter::Only(Category::Electronics))
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn filter_with_no_matches_is_empty() {
    let products = [product(1, Category::Electronics)];
    assert!(filter_products(&products, CategoryFilter::Only(Category::Furniture)).is_empty());
}

// =============================================================
// Product helpers
// =============================================================

#[test]
fn savings_is_original_minus_price() {
    assert_eq!(product(1, Category::Mobiles).savings(), Money::from_dollars(20));
}

#[test]
fn filled_stars_rounds_down() {
    let mut p = product(1, Category::Mobiles);
    p.rating = 4.9;
    assert_eq!(p.filled_stars(), 4);
    p.rating = 5.0;
    assert_eq!(p.filled_stars(), 5);
    p.rating = 7.0;
    assert_eq!(p.filled_stars(), MAX_STARS);
}

#[test]
fn primary_image_is_first_or_empty() {
    let mut p = product(1, Category::Mobiles);
    assert_eq!(p.primary_image(), "a.jpg");
    p.images = &[];
    assert_eq!(p.primary_image(), "");
}

#[test]
fn parse_product_id_accepts_digits_with_whitespace() {
    assert_eq!(parse_product_id("3"), Some(3));
    assert_eq!(parse_product_id(" 42 "), Some(42));
}

#[test]
fn parse_product_id_rejects_garbage() {
    assert_eq!(parse_product_id("abc"), None);
    assert_eq!(parse_product_id(""), None);
    assert_eq!(parse_product_id("-1"), None);
    assert_eq!(parse_product_id("1.5"), None);
}

// =============================================================
// Dataset
// =============================================================

#[test]
fn dataset_ids_are_unique() {
    let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PRODUCTS.len());
}

#[test]
fn dataset_products_have_images_and_sane_prices() {
    for p in &PRODUCTS {
        assert!(!p.images.is_empty(), "{} has no images", p.name);
        assert!(p.price <= p.original_price, "{} is priced above original", p.name);
    }
}

#[test]
fn find_product_by_id() {
    assert_eq!(find_product(2).map(|p| p.name), Some("iPhone 15 Pro Max"));
    assert!(find_product(999).is_none());
}

#[test]
fn every_category_has_products() {
    for category in Category::ALL {
        assert!(!filter_products(&PRODUCTS, CategoryFilter::Only(category)).is_empty());
    }
}
