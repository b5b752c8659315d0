//! Site footer.

use leptos::prelude::*;

use crate::catalog::Category;
use crate::catalog::showcase::CONTACT_INFO;
use crate::components::icon::{Icon, IconKind};
use crate::util::browser;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Home", "/#home"),
    ("Products", "/#products"),
    ("Testimonials", "/#testimonials"),
    ("Contact", "/#contact"),
];

const SUPPORT_LINKS: [&str; 4] = ["Warranty", "Shipping Info", "Returns", "Privacy Policy"];

#[component]
pub fn Footer() -> impl IntoView {
    let year = browser::current_year();
    let on_back_to_top = move |_| browser::scroll_to_top();

    // First line of each contact card except opening hours.
    let contact_lines = CONTACT_INFO
        .iter()
        .filter(|info| info.icon != IconKind::Clock)
        .map(|info| {
            view! {
                <li class="footer__contact">
                    <Icon kind=info.icon/>
                    <span>{info.details[0]}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <a href="/#home" class="logo logo--large">
                        <span class="logo__mark">
                            <Icon kind=IconKind::Zap/>
                        </span>
                        <span class="logo__text">"Electro" <span class="accent">"Zone"</span></span>
                    </a>
                    <p class="footer__blurb">
                        "Your trusted destination for premium electronics and home appliances. "
                        "Quality products, competitive prices, and exceptional service since 2010."
                    </p>
                    <ul class="footer__list">{contact_lines}</ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Categories"</h4>
                    <ul class="footer__list">
                        {Category::ALL
                            .iter()
                            .map(|category| view! { <li><a href="/#categories">{category.label()}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Support"</h4>
                    <ul class="footer__list">
                        {SUPPORT_LINKS
                            .iter()
                            .map(|label| view! { <li><a href="/#contact">{*label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <div class="footer__bottom">
                <div class="container footer__bottom-inner">
                    <p class="footer__copyright">{format!("\u{a9} {year} ElectroZone. All rights reserved.")}</p>
                    <button class="icon-button icon-button--accent" on:click=on_back_to_top title="Back to top">
                        <Icon kind=IconKind::ArrowUp/>
                    </button>
                </div>
            </div>
        </footer>
    }
}
