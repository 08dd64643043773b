use leptos::prelude::*;

use crate::core::{BRAND, Section};
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// Header classes for the top-of-page and scrolled states
pub fn nav_classes(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed inset-x-0 top-0 z-50 transition-colors duration-300 bg-black/80 backdrop-blur-md border-b border-white/10"
    } else {
        "fixed inset-x-0 top-0 z-50 transition-colors duration-300 bg-transparent border-b border-transparent"
    }
}

/// Fixed top navigation; turns solid once the page scrolls past the threshold
#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::motion::nav_is_scrolled;
        use crate::ui::effects::use_window_scroll;

        use_window_scroll(move |top| {
            let next = nav_is_scrolled(top);
            if scrolled.get_untracked() != next {
                scrolled.set(next);
            }
        });
    }

    view! {
        <header
            class=move || nav_classes(scrolled.get())
            data-state=move || if scrolled.get() { "scrolled" } else { "top" }
        >
            <nav class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <a href=Section::Home.href() class="text-lg font-bold tracking-tight text-white hover:opacity-80 transition-opacity">
                        {BRAND}
                    </a>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-8">
                        {Section::NAV.iter().map(|section| view! {
                            <a
                                href=section.href()
                                class="text-sm font-medium text-neutral-400 hover:text-white transition-colors"
                            >
                                {section.label()}
                            </a>
                        }).collect_view()}
                        <Button variant=ButtonVariant::Outline href=Section::Contact.href() class="px-5 py-2">
                            "Let’s Talk"
                        </Button>
                    </div>

                    // Mobile menu button
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg text-neutral-300 hover:bg-white/10 transition-colors"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !menu_open.get()
                    class:max-h-96=move || menu_open.get()
                >
                    <div class="flex flex-col gap-1 py-4 border-t border-white/10 bg-black/90">
                        {Section::NAV.iter().map(|section| view! {
                            <a
                                href=section.href()
                                class="block px-4 py-2 text-sm font-medium text-neutral-300 hover:text-white hover:bg-white/5 rounded-lg transition-colors"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {section.label()}
                            </a>
                        }).collect_view()}
                        <a
                            href=Section::Contact.href()
                            class="block px-4 py-2 text-sm font-semibold text-white"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Let’s Talk"
                        </a>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::nav_is_scrolled;
    use crate::ui::render_html;

    #[test]
    fn test_styles_follow_threshold() {
        assert_eq!(nav_classes(nav_is_scrolled(0.0)), nav_classes(false));
        assert_eq!(nav_classes(nav_is_scrolled(13.0)), nav_classes(true));
        assert!(nav_classes(false).contains("bg-transparent"));
        assert!(nav_classes(true).contains("backdrop-blur-md"));
    }

    #[test]
    fn test_renders_top_state_with_nav_links() {
        let html = render_html(|| view! { <Navbar /> });

        assert!(html.contains("data-state=\"top\""));
        for section in Section::NAV {
            assert!(html.contains(&format!("href=\"{}\"", section.href())));
        }
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains(BRAND));
    }
}
