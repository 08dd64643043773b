pub mod common;
pub mod effects;
pub mod icon;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
pub use pages::LandingPage;

/// Render a view to its server-side HTML inside a fresh reactive owner
#[cfg(test)]
pub(crate) fn render_html<V: leptos::prelude::IntoView + 'static>(
    view: impl FnOnce() -> V,
) -> String {
    use leptos::prelude::Owner;
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| view().into_view().to_html())
}

/// Assert every needle appears in `html`, each after the previous one.
/// Needles are plain text and get the same escaping the renderer applies.
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_in_order<'a>(html: &str, needles: impl IntoIterator<Item = &'a str>) {
    let mut from = 0;
    for needle in needles {
        let escaped = needle
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        match html[from..].find(&escaped) {
            Some(at) => from += at + escaped.len(),
            None => panic!("`{}` missing or out of order in rendered html", needle),
        }
    }
}
