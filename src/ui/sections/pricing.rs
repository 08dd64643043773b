use leptos::prelude::*;

use crate::core::{PRICING, PricingTier, Section};
use crate::ui::common::{Button, ButtonVariant, GlassCard, PageSection, Reveal};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <PageSection
            section=Section::Pricing
            eyebrow="Pricing"
            title="Simple, flat pricing"
            subtitle="Every project starts with a free homepage mockup. You only pay once you like what you see."
        >
            <div class="grid gap-6 md:grid-cols-3 items-stretch max-w-5xl mx-auto">
                <For
                    each=move || PRICING.iter().enumerate()
                    key=|(_, tier)| tier.name
                    children=move |(index, tier)| view! { <PricingCard index=index tier=tier /> }
                />
            </div>
        </PageSection>
    }
}

#[component]
fn PricingCard(index: usize, tier: &'static PricingTier) -> impl IntoView {
    let variant = if tier.popular {
        ButtonVariant::Solid
    } else {
        ButtonVariant::Outline
    };

    view! {
        <Reveal index=index class="h-full">
            <article data-item="pricing" class="relative h-full">
                {tier.popular.then(|| view! {
                    <div class="absolute -top-3 left-1/2 z-10 -translate-x-1/2 rounded-full bg-white px-4 py-1 text-xs font-semibold text-black">
                        "Most popular"
                    </div>
                })}
                <GlassCard highlighted=tier.popular class="p-8">
                    <div class="flex h-full flex-col">
                        <h3 class="text-lg font-semibold text-white">{tier.name}</h3>
                        <p class="mt-4 text-4xl font-bold tracking-tight text-white">{tier.price}</p>
                        <p class="mt-3 text-sm text-neutral-400 leading-relaxed">{tier.blurb}</p>

                        <ul class="mt-8 mb-8 space-y-3 flex-1">
                            {tier.features.iter().map(|feature| view! {
                                <li class="flex items-start gap-3 text-sm text-neutral-300">
                                    <Icon name=icons::CHECK class="mt-0.5 w-4 h-4 flex-shrink-0 text-emerald-400" />
                                    <span>{*feature}</span>
                                </li>
                            }).collect_view()}
                        </ul>

                        <Button variant=variant href=Section::Contact.href() full_width=true>
                            "Get started"
                        </Button>
                    </div>
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
    fn test_one_card_per_tier_in_order() {
        let html = render_html(|| view! { <PricingSection /> });

        assert_eq!(html.matches("data-item=\"pricing\"").count(), PRICING.len());
        assert_in_order(&html, PRICING.iter().map(|tier| tier.name));
    }

    #[test]
    fn test_only_popular_tier_has_badge() {
        let html = render_html(|| view! { <PricingSection /> });

        let popular = PRICING.iter().filter(|tier| tier.popular).count();
        assert_eq!(html.matches("Most popular").count(), popular);
    }
}
