use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => {
                "bg-white text-black shadow-[0_0_30px_rgba(255,255,255,0.15)] hover:bg-neutral-200"
            }
            ButtonVariant::Outline => {
                "border border-white/20 text-white hover:border-white/60 hover:bg-white/5"
            }
            ButtonVariant::Ghost => "text-neutral-300 hover:text-white hover:bg-white/5",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-full px-6 py-3 \
    text-sm font-semibold transition-all duration-300 hover:-translate-y-0.5 \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-white/40";

/// Full class list for a button
pub fn button_classes(variant: ButtonVariant, full_width: bool, extra: &str) -> String {
    let mut classes = format!("{} {}", BASE_CLASSES, variant.class());
    if full_width {
        classes.push_str(" w-full");
    }
    if !extra.is_empty() {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

/// Button that renders as a link when given a target, otherwise as a control
#[component]
pub fn Button(
    /// Visual style
    #[prop(default = ButtonVariant::Solid)]
    variant: ButtonVariant,
    /// Anchor or URL to navigate to; renders an `<a>` when set
    #[prop(optional)]
    href: Option<&'static str>,
    /// `type` attribute when rendered as a `<button>`
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler for the `<button>` form
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Stretch to the container width
    #[prop(default = false)]
    full_width: bool,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, full_width, class);

    match href {
        Some(href) => view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type=button_type
                class=classes
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_variant_classes_differ() {
        let solid = button_classes(ButtonVariant::Solid, false, "");
        let outline = button_classes(ButtonVariant::Outline, false, "");
        let ghost = button_classes(ButtonVariant::Ghost, false, "");

        assert!(solid.contains("bg-white"));
        assert!(outline.contains("border-white/20"));
        assert!(ghost.contains("text-neutral-300"));
        assert!(!ghost.contains("border"));
    }

    #[test]
    fn test_extra_classes_appended() {
        let classes = button_classes(ButtonVariant::Outline, true, "mt-4");
        assert!(classes.ends_with(" w-full mt-4"));
    }

    #[test]
    fn test_renders_link_with_target() {
        let html = render_html(|| {
            view! {
                <Button variant=ButtonVariant::Outline href="#work">"See work"</Button>
            }
        });
        assert!(html.contains("<a"));
        assert!(html.contains("href=\"#work\""));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_renders_control_without_target() {
        let html = render_html(|| {
            view! {
                <Button variant=ButtonVariant::Ghost button_type="submit">"Send"</Button>
            }
        });
        assert!(html.contains("<button"));
        assert!(html.contains("type=\"submit\""));
        assert!(!html.contains("<a"));
    }
}
