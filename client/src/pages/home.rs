//! Landing page: every storefront section in scroll order.

use leptos::prelude::*;

use crate::sections::{
    BrandsSection, CategoriesSection, ContactSection, HeroSection, ProductsSection, TestimonialsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection/>
        <CategoriesSection/>
        <ProductsSection/>
        <BrandsSection/>
        <TestimonialsSection/>
        <ContactSection/>
    }
}
