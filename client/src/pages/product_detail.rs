//! Product detail route (`/product/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the route id against the static catalog and renders the gallery,
//! pricing, and purchase controls. The pending quantity here is local to the
//! page and only reaches the cart through `add_to_cart`.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::catalog::product::parse_product_id;
use crate::catalog::{Product, find_product};
use crate::components::icon::{Icon, IconKind};
use crate::components::product_card::add_to_cart_with_toast;
use crate::components::rating_stars::RatingStars;
use crate::pages::not_found::NotFoundPage;
use crate::state::cart::CartState;
use crate::state::toast::ToastState;
use crate::util::carousel::Carousel;

/// Look up the product named by a raw route parameter.
fn resolve_product(raw_id: Option<&str>) -> Option<&'static Product> {
    raw_id.and_then(parse_product_id).and_then(find_product)
}

/// Pending quantity after pressing "-"; never drops below one.
const fn decrement_pending(quantity: u32) -> u32 {
    if quantity > 1 { quantity - 1 } else { 1 }
}

const fn increment_pending(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

/// Gallery image at `index`, falling back to the primary image.
fn gallery_image(product: &Product, index: usize) -> &'static str {
    product.images.get(index).copied().unwrap_or_else(|| product.primary_image())
}

fn savings_label(product: &Product) -> String {
    format!("Save {}", product.savings())
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product = move || resolve_product(params.with(|p| p.get("id")).as_deref());

    move || match product() {
        Some(product) => view! { <ProductDetail product=*product/> }.into_any(),
        None => view! { <NotFoundPage product=true/> }.into_any(),
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let gallery = RwSignal::new(Carousel::new(product.images.len()));
    let quantity = RwSignal::new(1_u32);
    let zoomed = RwSignal::new(false);

    let current_image = move || gallery_image(&product, gallery.get().index());
    let on_prev = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        gallery.update(Carousel::back);
    };
    let on_next = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        gallery.update(Carousel::forward);
    };
    let on_add = move |_| add_to_cart_with_toast(cart, toasts, &product, quantity.get_untracked());

    let thumbnails = product
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let class = move || if gallery.get().index() == i { "thumb thumb--active" } else { "thumb" };
            view! {
                <button class=class on:click=move |_| gallery.update(|g| g.select(i))>
                    <img src=*src alt=format!("{} {}", product.name, i + 1)/>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let stock = if product.in_stock {
        view! {
            <div class="stock stock--in">
                <Icon kind=IconKind::Check/>
                <span>"In Stock"</span>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="stock stock--out">
                <Icon kind=IconKind::Close/>
                <span>"Out of Stock"</span>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="container detail">
            <a class="detail__back" href="/#products">
                <Icon kind=IconKind::ArrowLeft/>
                "Back to Products"
            </a>

            <div class="detail__grid">
                <div class="gallery">
                    <div class="gallery__main" on:click=move |_| zoomed.set(true)>
                        <img class="gallery__image" src=current_image alt=product.name/>
                        <button class="gallery__nav gallery__nav--prev" on:click=on_prev aria-label="Previous image">
                            <Icon kind=IconKind::ChevronLeft/>
                        </button>
                        <button class="gallery__nav gallery__nav--next" on:click=on_next aria-label="Next image">
                            <Icon kind=IconKind::ChevronRight/>
                        </button>
                        {product.badge.map(|badge| view! { <span class="badge gallery__badge">{badge}</span> })}
                    </div>
                    <div class="gallery__thumbs">{thumbnails}</div>
                </div>

                <div class="detail__info">
                    <div class="detail__meta">
                        <span class="pill pill--muted">{product.brand}</span>
                        <RatingStars filled=product.filled_stars()/>
                        <span class="muted">{format!("({:.1})", product.rating)}</span>
                    </div>
                    <h1 class="detail__title">{product.name}</h1>
                    <div class="price-row price-row--large">
                        <span class="price">{product.price.to_string()}</span>
                        <span class="price price--original">{product.original_price.to_string()}</span>
                        <span class="pill pill--success">{savings_label(&product)}</span>
                    </div>
                    {stock}
                    <p class="detail__description">{product.description}</p>

                    <h3 class="detail__subheading">"Key Features"</h3>
                    <ul class="feature-list">
                        {product
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li class="feature-list__item">
                                        <span class="feature-list__check">
                                            <Icon kind=IconKind::Check/>
                                        </span>
                                        <span>{*feature}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>

                    <div class="purchase">
                        <div class="stepper stepper--large">
                            <button class="stepper__button" on:click=move |_| quantity.update(|q| *q = decrement_pending(*q))>
                                <Icon kind=IconKind::Minus/>
                            </button>
                            <span class="stepper__value">{move || quantity.get()}</span>
                            <button class="stepper__button" on:click=move |_| quantity.update(|q| *q = increment_pending(*q))>
                                <Icon kind=IconKind::Plus/>
                            </button>
                        </div>
                        <button class="btn btn--accent btn--lg purchase__add" disabled=!product.in_stock on:click=on_add>
                            <Icon kind=IconKind::Cart/>
                            "Add to Cart"
                        </button>
                        <button class="btn btn--outline btn--lg" title="Add to wishlist">
                            <Icon kind=IconKind::Heart/>
                        </button>
                        <button class="btn btn--outline btn--lg" title="Share">
                            <Icon kind=IconKind::Share/>
                        </button>
                    </div>

                    <a class="btn btn--primary btn--lg btn--block" href="/#contact">
                        <Icon kind=IconKind::Phone/>
                        "Contact for Inquiry"
                    </a>
                </div>
            </div>

            <section class="specs">
                <h2 class="specs__title">"Technical Specifications"</h2>
                <div class="card specs__table">
                    {product
                        .specifications
                        .iter()
                        .map(|spec| {
                            view! {
                                <div class="specs__row">
                                    <span class="specs__label">{spec.label}</span>
                                    <span class="specs__value">{spec.value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <Show when=move || zoomed.get()>
                <div class="zoom" on:click=move |_| zoomed.set(false)>
                    <img class="zoom__image" src=current_image alt=product.name/>
                    <button class="icon-button zoom__close" aria-label="Close zoom">
                        <Icon kind=IconKind::Close/>
                    </button>
                </div>
            </Show>
        </div>
    }
}
