use leptos::prelude::*;

/// Frosted card with a highlight that fades in on hover
#[component]
pub fn GlassCard(
    /// Brighter border for featured cards
    #[prop(default = false)]
    highlighted: bool,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let border = if highlighted {
        "border-white/40 shadow-[0_0_60px_rgba(255,255,255,0.08)]"
    } else {
        "border-white/10 hover:border-white/20"
    };

    view! {
        <div class=format!(
            "group relative h-full overflow-hidden rounded-2xl border bg-white/[0.03] p-6 backdrop-blur-md transition-colors duration-300 {} {}",
            border, class
        )>
            // Hover highlight
            <div
                class="pointer-events-none absolute inset-0 opacity-0 transition-opacity duration-500 group-hover:opacity-100
                       bg-gradient-to-br from-white/10 via-transparent to-transparent"
                aria-hidden="true"
            ></div>
            <div class="relative h-full">{children()}</div>
        </div>
    }
}
