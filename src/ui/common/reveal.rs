//! Scroll-triggered reveal wrapper
//!
//! Renders its children offset and transparent, then eases them into place the
//! first time enough of the wrapper is visible. The latch in
//! [`RevealLatch`](crate::core::motion::RevealLatch) guarantees the transition
//! plays once; the observer is disconnected right after, and on teardown if
//! the element never became visible.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::motion::{REVEAL_THRESHOLD, reveal_style, stagger_delay_ms};

/// Stylesheet that shows reveal content when scripts never run
pub const NO_SCRIPT_CSS: &str =
    "[data-reveal]{opacity:1!important;transform:none!important;transition:none!important}";

#[component]
pub fn Reveal(
    /// Position in a staggered group; 0 for standalone elements
    #[prop(default = 0)]
    index: usize,
    /// Visible fraction needed to trigger
    #[prop(default = REVEAL_THRESHOLD)]
    threshold: f64,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<Div>::new();
    let delay = stagger_delay_ms(index);

    #[cfg(not(feature = "ssr"))]
    observe_once(node_ref, revealed, threshold);

    #[cfg(feature = "ssr")]
    let _ = threshold;

    view! {
        <div
            node_ref=node_ref
            class=class
            data-reveal=move || if revealed.get() { "shown" } else { "hidden" }
            style=move || reveal_style(revealed.get(), delay)
        >
            {children()}
        </div>
    }
}

/// `<noscript>` override for the document head. Reveal content is rendered
/// hidden and only the client bundle shows it.
#[component]
pub fn RevealFallback() -> impl IntoView {
    view! {
        <noscript>
            <style>{NO_SCRIPT_CSS}</style>
        </noscript>
    }
}

#[cfg(not(feature = "ssr"))]
fn observe_once(node_ref: NodeRef<Div>, revealed: RwSignal<bool>, threshold: f64) {
    use crate::core::motion::RevealLatch;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::JsValue;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    // Owns the observer and its callback so both live exactly as long as the
    // component.
    let slot = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if revealed.get_untracked() || slot.with_value(|slot| slot.is_some()) {
            return;
        }

        let mut latch = RevealLatch::new(threshold);
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        revealed.set(true);
                        observer.disconnect();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                slot.set_value(Some((observer, callback)));
            }
            Err(err) => {
                leptos::logging::warn!("IntersectionObserver unavailable, revealing now: {:?}", err);
                revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|slot| {
            if let Some((observer, _callback)) = slot.take() {
                observer.disconnect();
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_renders_hidden_before_hydration() {
        let html = render_html(|| view! { <Reveal>"Hello"</Reveal> });
        assert!(html.contains("data-reveal=\"hidden\""));
        assert!(html.contains("opacity: 0"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_fallback_shows_hidden_content() {
        let html = render_html(|| view! { <RevealFallback /> });
        assert!(html.starts_with("<noscript><style>"));
        assert!(html.contains("[data-reveal]{opacity:1!important"));
        assert!(html.contains("transform:none!important"));
    }

    #[test]
    fn test_stagger_delay_in_style() {
        let html = render_html(|| view! { <Reveal index=2>"Card"</Reveal> });
        assert!(html.contains("160ms"));
    }
}
