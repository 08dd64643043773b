//! Landing page component
//!
//! The whole site is this one page:
//! - SEO meta tags and JSON-LD structured data
//! - Ambient effects (background decoration, scroll progress, pointer glow)
//! - Navbar, then Hero, Work, Services, Process, Pricing, FAQ and Contact
//!   sections in anchor order
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde_json::{Value, json};

use crate::core::{BRAND, FAQ, PRICING, SERVICES, SiteMeta};
use crate::ui::effects::{BackgroundDecor, PointerGlow, ScrollProgress};
use crate::ui::sections::{
    ContactSection, FaqSection, Footer, Hero, Navbar, PricingSection, ProcessSection,
    ServicesSection, WorkSection,
};

const DESCRIPTION: &str = "Modern, fast, black-aesthetic websites for small businesses. \
    Static sites with subtle motion, SEO basics done right, and a free homepage mockup.";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <BackgroundDecor />
        <ScrollProgress />
        <PointerGlow />

        <Navbar />
        <main class="relative z-10">
            <Hero />
            <WorkSection />
            <ServicesSection />
            <ProcessSection />
            <PricingSection />
            <FaqSection />
            <ContactSection />
        </main>
        <Footer />
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} | Fast static websites for small businesses", BRAND);
    // Only the host knows its public origin; shared so hydration renders the
    // same head tags as the server did
    let canonical =
        SharedValue::new(|| use_context::<SiteMeta>().and_then(|site| site.canonical_url))
            .into_inner();

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=DESCRIPTION />
        {canonical.map(|url| view! {
            <Link rel="canonical" href=url.clone() />
            <Meta property="og:url" content=url />
        })}

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=DESCRIPTION />

        <script type="application/ld+json" inner_html=business_structured_data().to_string()></script>
        <script type="application/ld+json" inner_html=faq_structured_data().to_string()></script>
    }
}

/// schema.org `ProfessionalService` with the services and pricing tiers
pub fn business_structured_data() -> Value {
    let offers: Vec<Value> = PRICING
        .iter()
        .map(|tier| {
            json!({
                "@type": "Offer",
                "name": tier.name,
                "description": tier.blurb,
                "priceSpecification": {
                    "@type": "PriceSpecification",
                    "description": tier.price,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": BRAND,
        "description": DESCRIPTION,
        "knowsAbout": SERVICES.iter().map(|service| service.title).collect::<Vec<_>>(),
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Website packages",
            "itemListElement": offers,
        },
    })
}

/// schema.org `FAQPage` built from the FAQ entries
pub fn faq_structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": FAQ
            .iter()
            .map(|entry| json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": { "@type": "Answer", "text": entry.answer },
            }))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Section;
    use crate::ui::{assert_in_order, render_html};

    #[test]
    fn test_business_data_lists_every_tier() {
        let data = business_structured_data();
        let offers = data["hasOfferCatalog"]["itemListElement"].as_array().unwrap();

        assert_eq!(data["@type"], "ProfessionalService");
        assert_eq!(data["name"], BRAND);
        assert_eq!(offers.len(), PRICING.len());
        for (offer, tier) in offers.iter().zip(PRICING) {
            assert_eq!(offer["name"], tier.name);
        }
        assert_eq!(data["knowsAbout"].as_array().unwrap().len(), SERVICES.len());
    }

    #[test]
    fn test_faq_data_matches_entries() {
        let data = faq_structured_data();
        let questions = data["mainEntity"].as_array().unwrap();

        assert_eq!(questions.len(), FAQ.len());
        assert_eq!(questions[0]["name"], FAQ[0].question);
        assert_eq!(questions[0]["acceptedAnswer"]["text"], FAQ[0].answer);
    }

    #[test]
    fn test_sections_stack_in_anchor_order() {
        let html = render_html(|| {
            leptos_meta::provide_meta_context();
            view! { <LandingPage /> }
        });

        let anchors: Vec<String> = Section::ALL
            .iter()
            .map(|section| format!("id=\"{}\"", section.anchor()))
            .collect();
        assert_in_order(&html, anchors.iter().map(String::as_str));
    }
}
