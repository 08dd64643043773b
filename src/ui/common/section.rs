use leptos::prelude::*;

use crate::core::Section;
use crate::ui::common::Reveal;

/// Page region with consistent width and padding, addressable by its anchor
#[component]
pub fn PageSection(
    /// Which section this is; sets the element id for in-page links
    section: Section,
    /// Small uppercase label above the title
    #[prop(optional)]
    eyebrow: Option<&'static str>,
    #[prop(optional)]
    title: Option<&'static str>,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Additional CSS classes for the outer element
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let has_header = eyebrow.is_some() || title.is_some() || subtitle.is_some();

    view! {
        <section
            id=section.anchor()
            class=format!("relative scroll-mt-20 px-4 sm:px-6 lg:px-8 py-24 {}", class)
        >
            <div class="max-w-6xl mx-auto">
                {has_header.then(|| view! {
                    <Reveal class="text-center max-w-2xl mx-auto mb-14">
                        {eyebrow.map(|eyebrow| view! {
                            <p class="text-xs font-semibold uppercase tracking-[0.3em] text-neutral-500 mb-3">
                                {eyebrow}
                            </p>
                        })}
                        {title.map(|title| view! {
                            <h2 class="text-3xl sm:text-4xl font-bold tracking-tight text-white">
                                {title}
                            </h2>
                        })}
                        {subtitle.map(|subtitle| view! {
                            <p class="mt-4 text-lg text-neutral-400 leading-relaxed">{subtitle}</p>
                        })}
                    </Reveal>
                })}
                {children()}
            </div>
        </section>
    }
}
