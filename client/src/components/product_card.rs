//! Catalog grid card for a single product.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::Product;
use crate::components::icon::{Icon, IconKind};
use crate::components::rating_stars::RatingStars;
use crate::state::cart::CartState;
use crate::state::toast::{ToastKind, ToastState, added_to_cart_description};

/// Add `quantity` of `product` to the shared cart and announce it.
///
/// Out-of-stock products are still accepted; the controls that call this are
/// disabled instead.
pub fn add_to_cart_with_toast(
    cart: RwSignal<CartState>,
    toasts: RwSignal<ToastState>,
    product: &Product,
    quantity: u32,
) {
    if quantity == 0 {
        return;
    }
    cart.update(|c| c.add_to_cart(product, quantity));
    toasts.update(|t| {
        t.push(
            ToastKind::Success,
            "Added to cart",
            added_to_cart_description(product.name, quantity),
        );
    });
}

/// Path of the detail view for `product`.
pub fn product_href(product: &Product) -> String {
    format!("/product/{}", product.id)
}

/// Product tile: image, badge, rating, prices, and an add-to-cart button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let href = product_href(&product);
    let on_add = move |_| add_to_cart_with_toast(cart, toasts, &product, 1);
    let add_label = if product.in_stock { "Add to Cart" } else { "Out of Stock" };

    view! {
        <article class="product-card">
            <div class="product-card__media">
                <A href=href.clone()>
                    <img class="product-card__image" src=product.primary_image() alt=product.name loading="lazy"/>
                </A>
                {product.badge.map(|badge| view! { <span class="badge product-card__badge">{badge}</span> })}
                <div class="product-card__quick">
                    <button class="icon-button" title="Add to wishlist">
                        <Icon kind=IconKind::Heart/>
                    </button>
                </div>
                <div class="product-card__overlay">
                    <button class="btn btn--accent btn--block" disabled=!product.in_stock on:click=on_add>
                        <Icon kind=IconKind::Cart/>
                        {add_label}
                    </button>
                </div>
            </div>
            <div class="product-card__body">
                <RatingStars filled=product.filled_stars()/>
                <span class="product-card__rating">{format!("({:.1})", product.rating)}</span>
                <A href=href attr:class="product-card__name">
                    {product.name}
                </A>
                <p class="product-card__category">{product.category.label()}</p>
                <div class="price-row">
                    <span class="price">{product.price.to_string()}</span>
                    <span class="price price--original">{product.original_price.to_string()}</span>
                </div>
            </div>
        </article>
    }
}
