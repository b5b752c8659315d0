//! Category cards that preselect the catalog filter.

use leptos::prelude::*;

use super::SectionHeader;
use crate::catalog::showcase::{CATEGORY_CARDS, CategoryCard};
use crate::catalog::{Category, CategoryFilter};
use crate::components::icon::{Icon, IconKind};
use crate::state::ui::UiState;
use crate::util::browser;

const fn category_icon(category: Category) -> IconKind {
    match category {
        Category::Electronics => IconKind::Tv,
        Category::Mobiles => IconKind::Smartphone,
        Category::HomeAppliances => IconKind::House,
        Category::Furniture => IconKind::Armchair,
    }
}

#[component]
pub fn CategoriesSection() -> impl IntoView {
    view! {
        <section id="categories" class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Browse Categories"
                    title="Shop by Category"
                    lead="Explore our wide range of products across different categories"
                />
                <div class="category-grid">
                    {CATEGORY_CARDS.iter().map(|card| view! { <CategoryTile card=*card/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryTile(card: CategoryCard) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_select = move |_| {
        ui.update(|u| u.catalog_filter = CategoryFilter::Only(card.category));
        browser::scroll_to_section("products");
    };

    view! {
        <button class=format!("category-card category-card--{}", card.tint) on:click=on_select>
            <div class="category-card__glow"></div>
            <div class="category-card__icon">
                <Icon kind=category_icon(card.category) class="accent"/>
            </div>
            <h3 class="category-card__name">{card.category.label()}</h3>
            <p class="category-card__description">{card.description}</p>
            <div class="category-card__footer">
                <span class="muted">{format!("{} Products", card.product_count)}</span>
                <Icon kind=IconKind::ArrowRight class="category-card__arrow"/>
            </div>
        </button>
    }
}
