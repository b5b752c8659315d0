//! Scrolling brand strip and store statistics.

use leptos::prelude::*;

use super::SectionHeader;
use crate::catalog::showcase::{BRANDS, STORE_STATS};

#[component]
pub fn BrandsSection() -> impl IntoView {
    // Rendered twice so the CSS marquee loops without a gap.
    let logos = BRANDS
        .iter()
        .chain(BRANDS.iter())
        .map(|brand| {
            view! {
                <div class="brand-strip__item">
                    <img class="brand-strip__logo" src=brand.logo alt=brand.name loading="lazy"/>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="brands" class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Trusted Brands"
                    title="We Partner With The Best"
                    lead="Shop authentic products from world-renowned brands"
                />
                <div class="brand-strip">
                    <div class="brand-strip__fade brand-strip__fade--left"></div>
                    <div class="brand-strip__fade brand-strip__fade--right"></div>
                    <div class="brand-strip__track">{logos}</div>
                </div>
                <div class="stats-grid">
                    {STORE_STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat">
                                    <div class="stat__value">{*value}</div>
                                    <div class="stat__label">{*label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
