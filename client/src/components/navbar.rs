//! Fixed top navigation bar with section links and the cart button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only always-visible entry point into the cart panel, so it
//! reads the cart's item count and writes the panel-open flag. It also tracks
//! window scroll to switch from the translucent to the solid style.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::cart::CartState;
use crate::state::ui::{NAV_ITEMS, UiState};
#[cfg(feature = "hydrate")]
use crate::util::browser;

/// Link target for an in-page anchor that also works from other routes.
fn section_href(anchor: &str) -> String {
    format!("/{anchor}")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = browser::scroll_y();
            let scrolled = y > crate::state::ui::NAVBAR_SCROLL_THRESHOLD;
            if ui.with_untracked(|u| u.scrolled) != scrolled {
                ui.update(|u| u.on_scroll(y));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let nav_class = move || {
        if ui.get().scrolled { "navbar navbar--scrolled" } else { "navbar navbar--glass" }
    };
    let total_items = move || cart.get().total_items();
    let open_cart = move |_| cart.update(|c| c.set_panel_open(true));
    let toggle_menu = move |_| ui.update(UiState::toggle_mobile_menu);
    let close_menu = move |_| ui.update(|u| u.mobile_menu_open = false);
    let menu_open = move || ui.get().mobile_menu_open;

    let cart_button = move || {
        view! {
            <button class="icon-button navbar__cart" on:click=open_cart title="Open cart">
                <Icon kind=IconKind::Cart/>
                <span class="navbar__badge">{total_items}</span>
            </button>
        }
    };

    view! {
        <nav class=nav_class>
            <div class="container navbar__inner">
                <a href="/" class="logo">
                    <span class="logo__mark">
                        <Icon kind=IconKind::Zap/>
                    </span>
                    <span class="logo__text">"Electro" <span class="accent">"Zone"</span></span>
                </a>

                <div class="navbar__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, anchor)| view! { <a class="navbar__link" href=section_href(anchor)>{*label}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__actions navbar__actions--desktop">
                    {cart_button()}
                    <a class="btn btn--nav" href=section_href("#products")>"Shop Now"</a>
                </div>

                <div class="navbar__actions navbar__actions--mobile">
                    {cart_button()}
                    <button class="icon-button" on:click=toggle_menu title="Toggle menu">
                        <Show when=menu_open fallback=|| view! { <Icon kind=IconKind::Menu/> }>
                            <Icon kind=IconKind::Close/>
                        </Show>
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="navbar__mobile-menu">
                    <div class="container navbar__mobile-links">
                        {NAV_ITEMS
                            .iter()
                            .map(|(label, anchor)| {
                                view! {
                                    <a class="navbar__mobile-link" href=section_href(anchor) on:click=close_menu>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <a class="btn btn--nav btn--block" href=section_href("#products") on:click=close_menu>
                            "Shop Now"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
