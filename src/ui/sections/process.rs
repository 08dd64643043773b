use leptos::prelude::*;

use crate::core::{PROCESS, ProcessStep, Section};
use crate::ui::common::{PageSection, Reveal};
use crate::ui::icon::Icon;

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <PageSection
            section=Section::Process
            eyebrow="Process"
            title="From first call to launch"
            subtitle="A short, predictable path with a free mockup before you commit."
        >
            <div class="relative">
                // Connector line behind the step badges
                <div class="absolute left-0 right-0 top-6 hidden h-px bg-gradient-to-r from-transparent via-white/15 to-transparent md:block" aria-hidden="true"></div>
                <ol class="relative grid gap-8 md:grid-cols-4">
                    <For
                        each=move || PROCESS.iter().enumerate()
                        key=|(_, step)| step.title
                        children=move |(index, step)| view! { <StepItem index=index step=step /> }
                    />
                </ol>
            </div>
        </PageSection>
    }
}

/// Two-digit step label, e.g. "01"
fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[component]
fn StepItem(index: usize, step: &'static ProcessStep) -> impl IntoView {
    view! {
        <li data-item="process" class="relative">
            <Reveal index=index class="text-center md:text-left">
                <div class="relative mx-auto md:mx-0 flex h-12 w-12 items-center justify-center rounded-full border border-white/15 bg-black text-white">
                    <Icon name=step.icon class="w-5 h-5" />
                </div>
                <p class="mt-5 text-xs font-semibold tracking-[0.3em] text-neutral-500">{step_number(index)}</p>
                <h3 class="mt-2 text-lg font-semibold text-white">{step.title}</h3>
                <p class="mt-2 text-sm text-neutral-400 leading-relaxed">{step.description}</p>
            </Reveal>
        </li>
    }
}
