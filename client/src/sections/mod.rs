//! Landing-page sections, rendered top to bottom by the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section owns one anchor id (`#home`, `#categories`, ...) targeted by
//! the navbar and footer links.

mod brands;
mod categories;
mod contact;
mod hero;
mod products;
mod testimonials;

pub use brands::BrandsSection;
pub use categories::CategoriesSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use products::ProductsSection;
pub use testimonials::TestimonialsSection;

use leptos::prelude::*;

/// Eyebrow pill, title, and lead paragraph shared by every section.
#[component]
fn SectionHeader(eyebrow: &'static str, title: &'static str, lead: &'static str, #[prop(optional)] dark: bool) -> impl IntoView {
    let class = if dark { "section-header section-header--dark" } else { "section-header" };
    view! {
        <div class=class>
            <span class="section-eyebrow">{eyebrow}</span>
            <h2 class="section-title">{title}</h2>
            <p class="section-description">{lead}</p>
        </div>
    }
}
