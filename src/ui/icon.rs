use leptos::prelude::*;

pub use crate::core::icons;

/// Inline stroke icon (24x24 grid, inherits `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
        >
            <path d=icon_path(name) />
        </svg>
    }
}

/// SVG path data for an icon name. Unknown names fall back to a dot.
pub fn icon_path(name: &str) -> &'static str {
    match name {
        icons::ZAP => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
        icons::SPARKLES => {
            "M12 3l1.9 5.8L20 10.7l-5 3.6 1.9 5.8L12 16.5l-4.9 3.6L9 14.3l-5-3.6 6.1-1.9L12 3z"
        }
        icons::SEARCH => "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zm10 2-4.35-4.35",
        icons::MESSAGE => {
            "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"
        }
        icons::PEN_TOOL => {
            "M12 19l7-7 3 3-7 7-3-3zM18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5zM2 2l7.586 7.586M13 11a2 2 0 1 1-4 0 2 2 0 0 1 4 0z"
        }
        icons::CODE => "M16 18l6-6-6-6M8 6l-6 6 6 6",
        icons::SEND => "M22 2 11 13M22 2l-7 20-4-9-9-4 20-7z",
        icons::CHECK => "M20 6 9 17l-5-5",
        icons::ARROW_RIGHT => "M5 12h14M12 5l7 7-7 7",
        icons::CHEVRON_DOWN => "m6 9 6 6 6-6",
        icons::MAIL => {
            "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6"
        }
        icons::MENU => "M3 12h18M3 6h18M3 18h18",
        icons::X => "M18 6 6 18M6 6l12 12",
        _ => "M12 12h.01",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_path() {
        let fallback = icon_path("not-an-icon");
        for name in icons::ALL {
            assert_ne!(icon_path(name), fallback, "no path for icon '{}'", name);
        }
    }
}
