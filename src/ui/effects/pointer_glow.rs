use leptos::prelude::*;

use crate::core::motion::GlowPosition;

/// Soft radial highlight that follows the pointer across the whole page
#[component]
pub fn PointerGlow() -> impl IntoView {
    let position = RwSignal::new(GlowPosition::default());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::pointermove;

        let handle = window_event_listener(pointermove, move |ev| {
            position.set(GlowPosition::from_pointer(ev.client_x(), ev.client_y()));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="pointer-events-none fixed inset-0 z-30 hidden md:block"
            aria-hidden="true"
            style=move || format!("background: {};", position.get().background())
        ></div>
    }
}
