use leptos::prelude::*;

use crate::core::{SERVICES, Section, ServiceOffering};
use crate::ui::common::{GlassCard, PageSection, Reveal};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <PageSection
            section=Section::Services
            eyebrow="Services"
            title="Everything a small-business site needs"
            subtitle="Fast pages, motion with a purpose, and the SEO groundwork done properly."
        >
            <div class="grid gap-6 md:grid-cols-3">
                <For
                    each=move || SERVICES.iter().enumerate()
                    key=|(_, service)| service.title
                    children=move |(index, service)| view! { <ServiceCard index=index service=service /> }
                />
            </div>
        </PageSection>
    }
}

#[component]
fn ServiceCard(index: usize, service: &'static ServiceOffering) -> impl IntoView {
    view! {
        <Reveal index=index>
            <article data-item="service" class="h-full">
                <GlassCard>
                    <div class="mb-5 flex h-12 w-12 items-center justify-center rounded-xl border border-white/10 bg-white/5 text-white">
                        <Icon name=service.icon class="w-6 h-6" />
                    </div>
                    <h3 class="text-lg font-semibold text-white">{service.title}</h3>
                    <p class="mt-2 text-sm text-neutral-400 leading-relaxed">{service.description}</p>
                    <ul class="mt-5 space-y-2">
                        {service.features.iter().map(|feature| view! {
                            <li class="flex items-start gap-2 text-sm text-neutral-300">
                                <Icon name=icons::CHECK class="mt-0.5 w-4 h-4 flex-shrink-0 text-emerald-400" />
                                <span>{*feature}</span>
                            </li>
                        }).collect_view()}
                    </ul>
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
    fn test_one_card_per_service_in_order() {
        let html = render_html(|| view! { <ServicesSection /> });

        assert_eq!(html.matches("data-item=\"service\"").count(), SERVICES.len());
        assert_in_order(&html, SERVICES.iter().map(|service| service.title));
    }

    #[test]
    fn test_feature_bullets_rendered() {
        let html = render_html(|| view! { <ServicesSection /> });

        for service in SERVICES {
            assert_in_order(&html, service.features.iter().copied());
        }
    }
}
