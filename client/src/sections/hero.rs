//! Full-height hero with the headline and calls to action.

use leptos::prelude::*;

use crate::catalog::showcase::HERO_FEATURES;
use crate::components::icon::{Icon, IconKind};
use crate::util::browser;

const HERO_IMAGE: &str = "/assets/hero-electronics.svg";

/// Badge glyph for each entry of `HERO_FEATURES`, in order.
const FEATURE_ICONS: [IconKind; 3] = [IconKind::Shield, IconKind::Truck, IconKind::Award];

#[component]
pub fn HeroSection() -> impl IntoView {
    let explore = move |_| browser::scroll_to_section("products");
    let contact = move |_| browser::scroll_to_section("contact");

    view! {
        <section id="home" class="hero">
            <div class="hero__glow hero__glow--left"></div>
            <div class="hero__glow hero__glow--right"></div>
            <div class="container hero__grid">
                <div class="hero__copy">
                    <div class="hero__eyebrow">
                        <span class="pulse-dot"></span>
                        <span>"New Collection 2026"</span>
                    </div>
                    <h1 class="hero__title">
                        "Your One-Stop Shop for " <span class="text-gradient">"Electronics"</span>
                        " & Home Appliances"
                    </h1>
                    <p class="hero__lead">
                        "Discover premium quality electronics from top brands at unbeatable prices. "
                        "Enjoy warranty, fast delivery, and exceptional customer service."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--hero btn--xl" on:click=explore>
                            "Explore Products"
                            <Icon kind=IconKind::ArrowRight/>
                        </button>
                        <button class="btn btn--hero-outline btn--xl" on:click=contact>"Contact Us"</button>
                    </div>
                    <div class="hero__features">
                        {HERO_FEATURES
                            .iter()
                            .zip(FEATURE_ICONS)
                            .map(|(text, kind)| {
                                view! {
                                    <div class="hero__feature">
                                        <Icon kind=kind class="accent"/>
                                        <span>{*text}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="hero__visual">
                    <img class="hero__image" src=HERO_IMAGE alt="Premium Electronics Collection"/>
                    <div class="floating-card floating-card--left">
                        <div class="floating-card__icon">
                            <Icon kind=IconKind::Truck class="accent"/>
                        </div>
                        <div>
                            <p class="floating-card__title">"Fast Shipping"</p>
                            <p class="muted">"Nationwide"</p>
                        </div>
                    </div>
                    <div class="floating-card floating-card--right">
                        <p class="floating-card__figure">"500+"</p>
                        <p class="muted">"Products"</p>
                    </div>
                </div>
            </div>
            <div class="scroll-indicator">
                <div class="scroll-indicator__dot"></div>
            </div>
        </section>
    }
}
