use leptos::prelude::*;

use crate::core::{FAQ, FaqEntry, Section};
use crate::ui::common::{PageSection, Reveal};
use crate::ui::icon::{Icon, icons};

/// FAQ section component
#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <PageSection
            section=Section::Faq
            eyebrow="FAQ"
            title="Frequently Asked Questions"
            subtitle="Got questions? Here are the ones I hear most."
        >
            <div class="max-w-3xl mx-auto space-y-4">
                <For
                    each=move || FAQ.iter().enumerate()
                    key=|(_, entry)| entry.question
                    children=move |(index, entry)| view! { <FaqItem index=index entry=entry /> }
                />
            </div>
        </PageSection>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(index: usize, entry: &'static FaqEntry) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <Reveal index=index>
            <div
                data-item="faq"
                class="rounded-2xl border border-white/10 bg-white/[0.03] overflow-hidden transition-colors hover:border-white/20"
            >
                <button
                    type="button"
                    class="w-full px-6 py-5 flex items-center justify-between gap-4 text-left"
                    on:click=move |_| set_is_open.update(|v| *v = !*v)
                    aria-expanded=move || is_open.get().to_string()
                >
                    <span class="font-semibold text-white">{entry.question}</span>
                    <div
                        class="flex items-center justify-center w-5 h-5 text-neutral-500 flex-shrink-0 transition-transform duration-300"
                        class=("rotate-180", move || is_open.get())
                    >
                        <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                    </div>
                </button>
                <div
                    class="overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !is_open.get()
                    class:max-h-96=move || is_open.get()
                >
                    <p class="px-6 pb-5 text-neutral-400 leading-relaxed">{entry.answer}</p>
                </div>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{assert_in_order, render_html};

    #[test]
    fn test_one_item_per_entry_in_order() {
        let html = render_html(|| view! { <FaqSection /> });

        assert_eq!(html.matches("data-item=\"faq\"").count(), FAQ.len());
        assert_in_order(&html, FAQ.iter().map(|entry| entry.question));
    }

    #[test]
    fn test_answers_start_collapsed() {
        let html = render_html(|| view! { <FaqSection /> });

        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("aria-expanded=\"true\""));
        // Collapsed answers are still in the markup for crawlers
        assert_in_order(&html, FAQ.iter().map(|entry| entry.answer));
    }
}
