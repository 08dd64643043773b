//! HTTP host for the site

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, not_found_shell, shell};
use crate::core::SiteMeta;

/// Build the application router.
///
/// `/` renders the page with `site` in context, `/pkg` serves the compiled
/// bundle, anything else is a file from the site root or the 404 page.
pub fn router(leptos_options: LeptosOptions, site: SiteMeta) -> Router {
    // No router in the app: the single page is served at "/"
    let routes = generate_route_list(App);

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!(
        "{}/{}",
        leptos_options.site_root, leptos_options.site_pkg_dir
    ))
    .precompressed_br()
    .precompressed_gzip();

    Router::new()
        .nest_service(&format!("/{}", leptos_options.site_pkg_dir), pkg_service)
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(site.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Everything else in the site root (favicon, robots.txt) or a 404
        .fallback(leptos_axum::file_and_error_handler(not_found_shell))
        .with_state(leptos_options)
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn options() -> LeptosOptions {
        LeptosOptions::builder().output_name("mckenzie-dev").build()
    }

    async fn get(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_page_carries_canonical_url() {
        let site = SiteMeta {
            canonical_url: Some("https://mckenzie.dev/".to_string()),
        };
        let (status, html) = get(router(options(), site), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("rel=\"canonical\""));
        assert!(html.contains("href=\"https://mckenzie.dev/\""));
        assert!(html.contains("property=\"og:url\""));
        assert!(html.contains("content=\"https://mckenzie.dev/\""));
        assert!(html.contains("id=\"home\""));
    }

    #[tokio::test]
    async fn test_page_without_site_url_has_no_canonical() {
        let (status, html) = get(router(options(), SiteMeta::default()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("rel=\"canonical\""));
        assert!(!html.contains("og:url"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_a_distinct_404() {
        let site = SiteMeta {
            canonical_url: Some("https://mckenzie.dev/".to_string()),
        };
        let (status, html) = get(router(options(), site), "/no-such-page").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page not found"));
        assert!(html.contains("data-page=\"not-found\""));
        assert!(!html.contains("id=\"home\""));
        assert!(!html.contains("rel=\"canonical\""));
        assert!(!html.contains("/pkg/mckenzie-dev.js"));
    }

    #[tokio::test]
    async fn test_page_readable_without_javascript() {
        let (_, html) = get(router(options(), SiteMeta::default()), "/").await;

        let noscript = html.find("<noscript>").expect("no <noscript> fallback");
        let head_end = html.find("</head>").unwrap();
        assert!(noscript < head_end);
        assert!(html[noscript..head_end].contains("[data-reveal]"));
    }
}
