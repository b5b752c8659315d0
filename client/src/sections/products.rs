//! Catalog grid with category filter tabs.

use leptos::prelude::*;

use super::SectionHeader;
use crate::catalog::product::filter_products;
use crate::catalog::{CategoryFilter, PRODUCTS};
use crate::components::product_card::ProductCard;
use crate::state::ui::UiState;

#[component]
pub fn ProductsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.get().catalog_filter;

    let tabs = CategoryFilter::TABS
        .iter()
        .map(|&filter| {
            let class = move || if active() == filter { "filter-tab filter-tab--active" } else { "filter-tab" };
            view! {
                <button class=class on:click=move |_| ui.update(|u| u.catalog_filter = filter)>
                    {filter.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="products" class="section section--tinted">
            <div class="container">
                <SectionHeader
                    eyebrow="Our Products"
                    title="Featured Products"
                    lead="Discover our handpicked selection of premium electronics and home essentials"
                />
                <div class="filter-tabs">{tabs}</div>
                <div class="product-grid">
                    <For
                        each={move || filter_products(&PRODUCTS, active()).into_iter().copied().collect::<Vec<_>>()}
                        key=|product| product.id
                        children={|product| view! { <ProductCard product=product/> }}
                    />
                </div>
            </div>
        </section>
    }
}
