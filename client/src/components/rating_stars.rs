//! Five-star rating display.

use leptos::prelude::*;

use crate::catalog::product::MAX_STARS;
use crate::components::icon::{Icon, IconKind};

/// Renders `filled` solid stars followed by outlined stars up to five.
#[component]
pub fn RatingStars(filled: usize, #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "stars stars--lg" } else { "stars" };
    view! {
        <div class=size aria-label=format!("{filled} out of {MAX_STARS} stars")>
            {(0..MAX_STARS)
                .map(|i| {
                    let class = if i < filled { "star star--filled" } else { "star" };
                    view! { <Icon kind=IconKind::Star class=class/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
