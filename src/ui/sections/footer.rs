use chrono::Datelike;
use leptos::prelude::*;

use crate::core::{BRAND, Section};

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-white/10 px-4 sm:px-6 lg:px-8 py-12">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-6">
                <a href=Section::Home.href() class="text-base font-bold tracking-tight text-white">
                    {BRAND}
                </a>
                <nav class="flex flex-wrap items-center justify-center gap-6">
                    {Section::NAV.iter().map(|section| view! {
                        <a href=section.href() class="text-sm text-neutral-500 hover:text-white transition-colors">
                            {section.label()}
                        </a>
                    }).collect_view()}
                </nav>
                <p class="text-sm text-neutral-600">{copyright(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Mckenzie Dev. All rights reserved.");
    }

    #[test]
    fn test_renders_current_year() {
        let html = render_html(|| view! { <Footer /> });
        let year = chrono::Utc::now().year();
        assert!(html.contains(&copyright(year)));
    }
}
