use leptos::prelude::*;

use crate::core::Section;
use crate::ui::common::{Button, ButtonVariant, Reveal};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=Section::Home.anchor()
            class="relative min-h-screen flex items-center justify-center px-4 pt-16"
        >
            <div class="max-w-4xl mx-auto text-center">
                <Reveal index=0>
                    <p class="inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-4 py-1.5
                              text-xs font-medium uppercase tracking-[0.25em] text-neutral-400 mb-8">
                        <span class="h-1.5 w-1.5 rounded-full bg-emerald-400 animate-pulse"></span>
                        "Booking new projects"
                    </p>
                </Reveal>

                <Reveal index=1>
                    <h1 class="text-4xl sm:text-6xl lg:text-7xl font-bold tracking-tight text-white leading-[1.05]">
                        "Modern, fast, black-aesthetic sites that convert."
                    </h1>
                </Reveal>

                <Reveal index=2>
                    <p class="mt-8 text-lg sm:text-xl text-neutral-400 max-w-2xl mx-auto leading-relaxed">
                        "I build silky-smooth static websites for small businesses: clean code, subtle motion, and zero CMS headaches."
                    </p>
                </Reveal>

                <Reveal index=3 class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Button variant=ButtonVariant::Solid href=Section::Contact.href()>
                        "Start a project"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </Button>
                    <Button variant=ButtonVariant::Outline href=Section::Work.href()>
                        "See work"
                    </Button>
                </Reveal>
            </div>

            // Scroll hint
            <a
                href=Section::Work.href()
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-neutral-600 hover:text-neutral-300 animate-bounce transition-colors"
                aria-label="Scroll to selected work"
            >
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
            </a>
        </section>
    }
}
