//! Static store data: products, money, and landing-page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here is fetched or mutated at runtime. Pages read these tables
//! directly; the cart copies `Product` values into its lines.

pub mod money;
pub mod product;
pub mod products;
pub mod showcase;

pub use money::Money;
pub use product::{Category, CategoryFilter, Product, ProductId};
pub use products::{PRODUCTS, find_product};
