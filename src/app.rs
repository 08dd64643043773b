use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::ui::common::RevealFallback;
use crate::ui::pages::{LandingPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#000000"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <RevealFallback/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="text-neutral-100 antialiased selection:bg-white selection:text-black">
                <App/>
            </body>
        </html>
    }
}

/// Document for paths that match neither the page nor a static file.
///
/// Rendered without hydration scripts: there is nothing interactive on it and
/// the client bundle only knows how to hydrate `App`.
pub fn not_found_shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="robots" content="noindex"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <link rel="stylesheet" href=stylesheet/>
                <title>"Page not found"</title>
            </head>
            <body class="bg-black text-neutral-100 antialiased">
                <NotFoundPage/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/mckenzie-dev.css"/>

        <LandingPage />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_app_mounts_landing_page() {
        let html = render_html(|| view! { <App /> });

        assert!(html.contains("id=\"home\""));
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("<footer"));
    }
}
