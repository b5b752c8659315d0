//! Window scrolling, timers, and clock access.
//!
//! Every helper has a browser path (feature `hydrate`) and a server/test
//! fallback, so components can call them unconditionally during SSR.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current vertical scroll offset of the window in pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Scroll the element with `id` into view. Smoothness comes from CSS.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Resolve after `ms` milliseconds in the browser; immediately elsewhere.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Calendar year for the footer copyright line.
pub fn current_year() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        i64::from(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        i64::from(time::OffsetDateTime::now_utc().year())
    }
}
