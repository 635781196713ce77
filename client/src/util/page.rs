//! Browser page helpers: scroll position and the calendar year.
//!
//! Browser values need a browser environment. SSR paths return `0.0` for the
//! scroll offset and the UTC year from the `time` crate.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Vertical scroll offset after which the header gains a shadow.
pub const SCROLL_SHADOW_PX: f64 = 50.0;

/// Whether a page scrolled to `offset` should show the header shadow.
#[must_use]
pub fn scrolled_past_threshold(offset: f64) -> bool {
    offset > SCROLL_SHADOW_PX
}

/// Current vertical scroll offset of the window, `0.0` outside the browser.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Calendar year used in the footer. Local time in the browser, UTC on the
/// server.
pub fn current_year() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        year_of(time::OffsetDateTime::now_utc())
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn year_of(ts: time::OffsetDateTime) -> u32 {
    u32::try_from(ts.year()).unwrap_or(0)
}
