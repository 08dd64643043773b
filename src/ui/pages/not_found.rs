use leptos::prelude::*;

use crate::core::BRAND;
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// 404 page for paths outside the landing page
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main
            data-page="not-found"
            class="min-h-screen flex flex-col items-center justify-center px-4 text-center"
        >
            <a href="/" class="mb-12 text-lg font-bold tracking-tight text-white">{BRAND}</a>
            <p class="text-8xl font-bold tracking-tight text-white/10">"404"</p>
            <h1 class="mt-4 text-3xl font-bold tracking-tight text-white">"Page not found"</h1>
            <p class="mt-4 max-w-md text-neutral-400">
                "There's nothing at this address. Everything lives on the home page."
            </p>
            <div class="mt-10">
                <Button variant=ButtonVariant::Solid href="/">
                    "Back to home"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </Button>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_links_back_home_without_page_sections() {
        let html = render_html(|| view! { <NotFoundPage /> });

        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("id=\"home\""));
        assert!(!html.contains("data-reveal"));
    }
}
