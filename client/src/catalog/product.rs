//! Product model and category filtering.
//!
//! DESIGN
//! ======
//! Products are `'static` catalog rows: every field borrows from the
//! compiled-in dataset, so a `Product` is `Copy` and cart lines can hold one
//! by value without any shared ownership.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::money::Money;

/// Unique product identifier.
pub type ProductId = u32;

/// Number of stars drawn for a rating.
pub const MAX_STARS: usize = 5;

/// Product category used for catalog filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Electronics,
    Mobiles,
    HomeAppliances,
    Furniture,
}

impl Category {
    /// Every category, in filter-tab order.
    pub const ALL: [Self; 4] = [Self::Electronics, Self::Mobiles, Self::HomeAppliances, Self::Furniture];

    /// Human-readable label shown on tabs and cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Mobiles => "Mobiles",
            Self::HomeAppliances => "Home Appliances",
            Self::Furniture => "Furniture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label does not name a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Active catalog filter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter tabs in display order.
    pub const TABS: [Self; 5] = [
        Self::All,
        Self::Only(Category::Electronics),
        Self::Only(Category::Mobiles),
        Self::Only(Category::HomeAppliances),
        Self::Only(Category::Furniture),
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }
}

/// One row of a product's technical specification table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Specification {
    pub label: &'static str,
    pub value: &'static str,
}

/// A catalog product.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub brand: &'static str,
    pub category: Category,
    pub price: Money,
    pub original_price: Money,
    pub rating: f32,
    /// Image URLs; the first one is the catalog thumbnail.
    pub images: &'static [&'static str],
    pub badge: Option<&'static str>,
    pub in_stock: bool,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub specifications: &'static [Specification],
}

impl Product {
    /// Thumbnail image, or an empty string for a product without images.
    #[must_use]
    pub fn primary_image(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }

    /// Discount against the original price.
    #[must_use]
    pub const fn savings(&self) -> Money {
        self.original_price.saturating_sub(self.price)
    }

    /// Stars to draw filled: the rating rounded down, capped at [`MAX_STARS`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled_stars(&self) -> usize {
        (self.rating.max(0.0).floor() as usize).min(MAX_STARS)
    }
}

/// Products matching `filter`, in their original order.
#[must_use]
pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Parse a route parameter into a product id.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// unsigned integer yields `None`.
#[must_use]
pub fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.trim().parse().ok()
}
