use leptos::prelude::*;

/// Fixed decoration layer behind the page: dotted grid plus two blurred
/// blobs that drift with a parallax offset as the page scrolls
#[component]
pub fn BackgroundDecor() -> impl IntoView {
    let offset = RwSignal::new(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use super::use_window_scroll;
        use crate::core::motion::parallax_offset;

        use_window_scroll(move |top| offset.set(parallax_offset(top)));
    }

    view! {
        <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden bg-black" aria-hidden="true">
            // Dotted grid
            <div class="absolute inset-0 opacity-[0.15] [background-image:radial-gradient(circle,#525252_1px,transparent_1px)] [background-size:28px_28px]"></div>

            <div
                class="absolute inset-0 will-change-transform"
                style=move || format!("transform: translate3d(0, {:.1}px, 0);", -offset.get())
            >
                <div class="absolute -top-40 left-1/4 h-[32rem] w-[32rem] rounded-full bg-white/[0.04] blur-3xl"></div>
                <div class="absolute top-[60vh] -right-32 h-[28rem] w-[28rem] rounded-full bg-neutral-500/[0.06] blur-3xl"></div>
            </div>

            // Fade the grid out toward the bottom of the viewport
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-black/40 to-black"></div>
        </div>
    }
}
