use leptos::prelude::*;

use crate::core::motion::progress_width;

/// Thin bar across the top of the viewport showing how far the reader has
/// scrolled through the page
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{resize, scroll};

        let on_scroll = window_event_listener(scroll, move |_| update_progress(progress));
        let on_resize = window_event_listener(resize, move |_| update_progress(progress));
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });

        observe_document_height(progress);
    }

    view! {
        <div class="fixed inset-x-0 top-0 z-[60] h-0.5 bg-white/5" aria-hidden="true">
            <div
                class="h-full bg-gradient-to-r from-neutral-500 via-neutral-200 to-white"
                data-progress=move || progress_width(progress.get())
                style=move || format!("width: {};", progress_width(progress.get()))
            ></div>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn update_progress(progress: RwSignal<f64>) {
    use super::document_metrics;
    use crate::core::motion::scroll_progress;

    if let Some((top, height, viewport)) = document_metrics() {
        progress.set(scroll_progress(top, height, viewport));
    }
}

/// Recompute when the page grows or shrinks without scrolling (an FAQ answer
/// or the mobile menu opening). The first observation also sets the initial
/// value after mount.
#[cfg(not(feature = "ssr"))]
fn observe_document_height(progress: RwSignal<f64>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::ResizeObserver;

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, ResizeObserver)>;

    let slot = StoredValue::new_local(None::<(ResizeObserver, ObserverCallback)>);

    Effect::new(move |_| {
        update_progress(progress);

        if slot.with_value(|slot| slot.is_some()) {
            return;
        }
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };

        let callback: ObserverCallback =
            Closure::new(move |_: js_sys::Array, _: ResizeObserver| update_progress(progress));
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&body);
                slot.set_value(Some((observer, callback)));
            }
            Err(err) => {
                leptos::logging::warn!("ResizeObserver unavailable: {:?}", err);
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
    fn test_starts_empty() {
        let html = render_html(|| view! { <ScrollProgress /> });
        assert!(html.contains("width: 0%;"));
        assert!(html.contains("aria-hidden=\"true\""));
    }
}
