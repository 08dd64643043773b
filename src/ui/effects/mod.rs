//! Ambient visual effects driven by window scroll and pointer events
//!
//! Each effect subscribes to the window when its component mounts and removes
//! the listener in `on_cleanup`. On the server nothing is subscribed and the
//! initial state is rendered.

mod background;
mod pointer_glow;
mod scroll_progress;

pub use background::BackgroundDecor;
pub use pointer_glow::PointerGlow;
pub use scroll_progress::ScrollProgress;

#[cfg(not(feature = "ssr"))]
use leptos::prelude::*;

/// Current vertical scroll offset of the window in px
#[cfg(not(feature = "ssr"))]
pub(crate) fn window_scroll_top() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scroll offset, full document height and viewport height, in px
#[cfg(not(feature = "ssr"))]
pub(crate) fn document_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = f64::from(window.document()?.document_element()?.scroll_height());
    Some((scroll_top, scroll_height, viewport_height))
}

/// Call `on_scroll` with the scroll offset once after mount and on every
/// window scroll until the calling component is torn down.
#[cfg(not(feature = "ssr"))]
pub(crate) fn use_window_scroll(on_scroll: impl Fn(f64) + Clone + 'static) {
    use leptos::ev::scroll;

    let initial = on_scroll.clone();
    Effect::new(move |_| initial(window_scroll_top()));

    let handle = window_event_listener(scroll, move |_| on_scroll(window_scroll_top()));
    on_cleanup(move || handle.remove());
}
