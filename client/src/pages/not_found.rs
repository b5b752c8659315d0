//! Fallback view for unknown routes and unknown product ids.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};

/// "Not found" screen. During SSR the response status is set to 404.
#[component]
pub fn NotFoundPage(#[prop(optional)] product: bool) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    let title = if product { "Product Not Found" } else { "Page Not Found" };

    view! {
        <div class="not-found">
            <h1 class="not-found__title">{title}</h1>
            <p class="muted">"The page you are looking for does not exist or has been moved."</p>
            <a class="btn btn--accent" href="/#products">
                <Icon kind=IconKind::ArrowLeft/>
                "Back to Products"
            </a>
        </div>
    }
}
