//! Contact form posted natively to the hosting platform's form service
//!
//! Nothing here sends a request: the browser submits the form and the form
//! service answers with its own confirmation page.

use leptos::prelude::*;

use crate::core::contact::{NAME_PATTERN, fields};
use crate::core::{CONTACT_FORM_NAME, Section};
use crate::ui::common::{Button, ButtonVariant, GlassCard, PageSection, Reveal};
use crate::ui::icon::{Icon, icons};

const INPUT_CLASSES: &str = "w-full rounded-xl border border-white/10 bg-black/60 px-4 py-3 text-white \
    placeholder-neutral-500 transition-colors focus:border-white/40 focus:outline-none \
    focus:ring-2 focus:ring-white/10 invalid:[&:not(:placeholder-shown)]:border-red-500/60";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <PageSection
            section=Section::Contact
            eyebrow="Contact"
            title="Let’s Build Your Site"
            subtitle="Tell me about your business and I’ll reply with a free homepage mockup."
        >
            <Reveal class="max-w-2xl mx-auto">
                <GlassCard class="p-8">
                    <form
                        name=CONTACT_FORM_NAME
                        method="POST"
                        data-netlify="true"
                        netlify-honeypot=fields::HONEYPOT
                        class="space-y-4"
                        on:submit=check_before_submit
                    >
                        <input type="hidden" name=fields::FORM_NAME value=CONTACT_FORM_NAME />
                        <p class="hidden" aria-hidden="true">
                            <label>
                                "Leave this empty: "
                                <input name=fields::HONEYPOT tabindex="-1" autocomplete="off" />
                            </label>
                        </p>

                        <label class="block">
                            <span class="sr-only">"Your Name"</span>
                            <input
                                type="text"
                                name=fields::NAME
                                required=true
                                pattern=NAME_PATTERN
                                title="Please tell me your name"
                                autocomplete="name"
                                placeholder="Your Name"
                                class=INPUT_CLASSES
                                on:input=clear_custom_validity
                            />
                        </label>

                        <label class="block">
                            <span class="sr-only">"Your Email"</span>
                            <input
                                type="email"
                                name=fields::EMAIL
                                required=true
                                autocomplete="email"
                                placeholder="Your Email"
                                class=INPUT_CLASSES
                                on:input=clear_custom_validity
                            />
                        </label>

                        <label class="block">
                            <span class="sr-only">"Project details"</span>
                            <textarea
                                name=fields::MESSAGE
                                rows="5"
                                placeholder="Project details"
                                class=format!("{} resize-none", INPUT_CLASSES)
                            ></textarea>
                        </label>

                        <Button variant=ButtonVariant::Solid button_type="submit" full_width=true>
                            <Icon name=icons::MAIL class="w-4 h-4" />
                            "Send Message"
                        </Button>
                    </form>
                </GlassCard>
            </Reveal>
        </PageSection>
    }
}

/// Runs only after the inputs' own constraints passed. Anything the shared
/// rules still reject is reported on its field with the browser's validity
/// message, and the post is cancelled.
#[cfg(not(feature = "ssr"))]
fn check_before_submit(ev: leptos::ev::SubmitEvent) {
    use crate::core::ContactSubmission;
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, HtmlFormElement, HtmlInputElement};

    let Some(form) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Ok(data) = FormData::new_with_form(&form) else {
        return;
    };
    let value = |field: &str| data.get(field).as_string().unwrap_or_default();

    let submission = ContactSubmission::new(
        value(fields::NAME),
        value(fields::EMAIL),
        value(fields::MESSAGE),
    );
    if let Err(err) = submission.validate() {
        ev.prevent_default();
        let input = form
            .query_selector(&format!("[name=\"{}\"]", err.field()))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        match input {
            Some(input) => {
                input.set_custom_validity(&err.to_string());
                input.report_validity();
            }
            None => leptos::logging::warn!("contact form not submitted: {}", err),
        }
    }
}

#[cfg(feature = "ssr")]
fn check_before_submit(_ev: leptos::ev::SubmitEvent) {}

/// A custom validity message sticks until cleared; drop it once the visitor edits
#[cfg(not(feature = "ssr"))]
fn clear_custom_validity(ev: leptos::ev::Event) {
    use wasm_bindgen::JsCast;

    if let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_custom_validity("");
    }
}

#[cfg(feature = "ssr")]
fn clear_custom_validity(_ev: leptos::ev::Event) {}
