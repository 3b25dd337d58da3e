//! Window scroll position tracking.
//!
//! Requires a browser environment; elsewhere the offset reads as `0.0` and
//! no listener is installed.

/// Current vertical scroll offset of the window in logical pixels.
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

/// Call `on_offset` with the vertical offset on every window scroll event.
///
/// The listener is removed when the calling component's owner is cleaned up.
pub fn on_window_scroll<F>(on_offset: F)
where
    F: Fn(f64) + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let handle = leptos::prelude::window_event_listener(leptos::ev::scroll, move |_| on_offset(scroll_y()));
        leptos::prelude::on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_offset;
    }
}
