//! Slide-in cart panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the shared `CartState`: one row per line in insertion order, the
//! item count, and the subtotal. Every control maps directly to a cart
//! operation; the panel keeps no state of its own.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::{Icon, IconKind};
use crate::state::cart::{CartLine, CartState};

#[component]
pub fn CartSidebar() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let is_open = move || cart.get().panel_open();
    let close = move |_| cart.update(|c| c.set_panel_open(false));
    let total_items = move || cart.get().total_items();
    let has_lines = move || !cart.get().is_empty();
    let subtotal = move || cart.get().total_price().fixed();

    view! {
        <Show when=is_open>
            <div class="cart-backdrop" on:click=close></div>
            <aside class="cart-sidebar" aria-label="Shopping cart">
                <header class="cart-sidebar__header">
                    <div class="cart-sidebar__title">
                        <Icon kind=IconKind::Bag class="accent"/>
                        <h2>"Your Cart"</h2>
                        <span class="pill">{total_items}</span>
                    </div>
                    <button class="icon-button" on:click=close title="Close cart">
                        <Icon kind=IconKind::Close/>
                    </button>
                </header>

                <div class="cart-sidebar__body">
                    {move || {
                        let state = cart.get();
                        if state.is_empty() {
                            view! {
                                <div class="cart-empty">
                                    <Icon kind=IconKind::Bag class="cart-empty__icon"/>
                                    <h3>"Your cart is empty"</h3>
                                    <p>"Add some products to get started"</p>
                                    <button class="btn btn--accent" on:click=close>"Continue Shopping"</button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <ul class="cart-lines">
                                    {state.lines().iter().map(|line| view! { <CartLineRow line=*line/> }).collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>

                <Show when=has_lines>
                    <footer class="cart-sidebar__footer">
                        <div class="cart-sidebar__row">
                            <span class="muted">"Subtotal"</span>
                            <span class="cart-sidebar__subtotal">{subtotal}</span>
                        </div>
                        <p class="cart-sidebar__note">"Shipping & taxes calculated at checkout"</p>
                        <button class="btn btn--accent btn--block btn--lg">"Checkout"</button>
                        <button class="btn btn--ghost btn--block" on:click=close>"Continue Shopping"</button>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}

/// One cart line: image, name, brand, unit price, remove, and quantity stepper.
#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let id = line.product.id;
    let quantity = i64::from(line.quantity);

    let on_remove = move |_| cart.update(|c| c.remove_from_cart(id));
    let on_decrement = move |_| cart.update(|c| c.update_quantity(id, quantity - 1));
    let on_increment = move |_| cart.update(|c| c.update_quantity(id, quantity + 1));

    view! {
        <li class="cart-line">
            <div class="cart-line__thumb">
                <img src=line.product.primary_image() alt=line.product.name/>
            </div>
            <div class="cart-line__info">
                <h4 class="cart-line__name">{line.product.name}</h4>
                <p class="muted">{line.product.brand}</p>
                <p class="cart-line__price">{line.product.price.to_string()}</p>
            </div>
            <div class="cart-line__actions">
                <button class="icon-button icon-button--danger" on:click=on_remove title="Remove">
                    <Icon kind=IconKind::Trash/>
                </button>
                <div class="stepper">
                    <button class="stepper__button" on:click=on_decrement title="Decrease quantity">
                        <Icon kind=IconKind::Minus/>
                    </button>
                    <span class="stepper__value">{line.quantity}</span>
                    <button class="stepper__button" on:click=on_increment title="Increase quantity">
                        <Icon kind=IconKind::Plus/>
                    </button>
                </div>
            </div>
        </li>
    }
}
