use leptos::prelude::*;

use crate::core::{PORTFOLIO, PortfolioItem, Section};
use crate::ui::common::{GlassCard, PageSection, Reveal};
use crate::ui::icon::{Icon, icons};

/// Portfolio samples, one card per [`PortfolioItem`]
#[component]
pub fn WorkSection() -> impl IntoView {
    view! {
        <PageSection
            section=Section::Work
            eyebrow="Portfolio"
            title="Selected Work"
            subtitle="A few recent builds for local businesses."
        >
            <div class="grid gap-6 md:grid-cols-3">
                <For
                    each=move || PORTFOLIO.iter().enumerate()
                    key=|(_, item)| item.title
                    children=move |(index, item)| view! { <PortfolioCard index=index item=item /> }
                />
            </div>
        </PageSection>
    }
}

#[component]
fn PortfolioCard(index: usize, item: &'static PortfolioItem) -> impl IntoView {
    view! {
        <Reveal index=index>
            <article data-item="portfolio">
                <GlassCard>
                    // Preview placeholder
                    <div class="mb-6 aspect-[16/10] rounded-xl border border-white/10 bg-gradient-to-br from-neutral-800 to-neutral-950
                                transition-transform duration-500 group-hover:scale-[1.02]"></div>
                    <span class="inline-block rounded-full border border-white/10 px-3 py-1 text-xs text-neutral-400">
                        {item.tag}
                    </span>
                    <h3 class="mt-4 text-xl font-semibold text-white">{item.title}</h3>
                    <p class="mt-2 text-sm text-neutral-400 leading-relaxed">{item.description}</p>
                    <span class="mt-4 inline-flex items-center gap-1 text-sm text-neutral-500 transition-colors group-hover:text-white">
                        "Case study"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </span>
                </GlassCard>
            </article>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{assert_in_order, render_html};

    #[test]
    fn test_one_card_per_item_in_order() {
        let html = render_html(|| view! { <WorkSection /> });

        assert_eq!(html.matches("data-item=\"portfolio\"").count(), PORTFOLIO.len());
        assert_in_order(&html, PORTFOLIO.iter().map(|item| item.title));
        assert!(html.contains("id=\"work\""));
    }
}
