//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{cart_sidebar::CartSidebar, footer::Footer, navbar::Navbar, toaster::Toaster};
use crate::pages::{home::HomePage, not_found::NotFoundPage, product_detail::ProductDetailPage};
use crate::state::{cart::CartState, contact::ContactState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single cart instance for this session and provides it, along
/// with the other shared state, to every page and component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let contact = RwSignal::new(ContactState::default());

    provide_context(cart);
    provide_context(ui);
    provide_context(toasts);
    provide_context(contact);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="ElectroZone | Electronics & Home Appliances"/>
        <Meta name="description" content="Premium electronics, mobiles, home appliances and furniture from top brands."/>

        <Router>
            <Navbar/>
            <CartSidebar/>
            <Toaster/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
