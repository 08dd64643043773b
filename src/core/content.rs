//! Static content registry for the landing page
//!
//! Every record here is hand-authored and compiled into the binary. Lists are
//! rendered in declaration order, so the order of each slice is the order on
//! the page.

use serde::Serialize;

use super::icons;

/// Brand name shown in the navbar, footer and page title
pub const BRAND: &str = "Mckenzie Dev";

/// Name the hosting platform uses to route contact form submissions
pub const CONTACT_FORM_NAME: &str = "contact";

/// Addressable regions of the page, in top-to-bottom order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Work,
    Services,
    Process,
    Pricing,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Work,
        Section::Services,
        Section::Process,
        Section::Pricing,
        Section::Faq,
        Section::Contact,
    ];

    /// Sections linked from the navbar (home is the logo, contact is the CTA)
    pub const NAV: [Section; 5] = [
        Section::Work,
        Section::Services,
        Section::Process,
        Section::Pricing,
        Section::Faq,
    ];

    /// Element id used as the in-page anchor target
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::Services => "services",
            Section::Process => "process",
            Section::Pricing => "pricing",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Work => "#work",
            Section::Services => "#services",
            Section::Process => "#process",
            Section::Pricing => "#pricing",
            Section::Faq => "#faq",
            Section::Contact => "#contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Work => "Work",
            Section::Services => "Services",
            Section::Process => "Process",
            Section::Pricing => "Pricing",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ServiceOffering {
    /// Icon name from [`icons`]
    #[serde(skip)]
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProcessStep {
    #[serde(skip)]
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    /// Display price, e.g. "$1,200"
    pub price: &'static str,
    pub blurb: &'static str,
    /// Highlighted as the recommended plan
    pub popular: bool,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Halo Auto Detailing",
        tag: "Landing page",
        description: "Conversion-focused landing page with sticky pricing and instant contact.",
    },
    PortfolioItem {
        title: "Mountain Cafe",
        tag: "Menu & gallery",
        description: "Menu + gallery with lightweight animations and offline-friendly caching.",
    },
    PortfolioItem {
        title: "Craft Studio",
        tag: "Portfolio",
        description: "Grid portfolio with hover reveals and case study pages.",
    },
];

pub static SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        icon: icons::ZAP,
        title: "Static sites that fly",
        description: "Zero bloat, instant loads, and search-friendly markup.",
        features: &[
            "Hand-written, framework-light pages",
            "Sub-second loads on mobile",
            "Hosting and SSL set up for you",
        ],
    },
    ServiceOffering {
        icon: icons::SPARKLES,
        title: "Motion that guides",
        description: "Micro-interactions to focus user attention.",
        features: &[
            "Scroll-triggered reveals",
            "Hover states that invite clicks",
            "Respectful of reduced-motion settings",
        ],
    },
    ServiceOffering {
        icon: icons::SEARCH,
        title: "SEO basics done right",
        description: "Meta, schema, and performance budgets baked in.",
        features: &[
            "Titles, descriptions and social cards",
            "Structured data for local search",
            "Core Web Vitals checked before launch",
        ],
    },
];

pub static PROCESS: &[ProcessStep] = &[
    ProcessStep {
        icon: icons::MESSAGE,
        title: "Discovery call",
        description: "We talk through your business, your customers and what the site needs to do.",
    },
    ProcessStep {
        icon: icons::PEN_TOOL,
        title: "Free mockup",
        description: "You get a homepage mockup in your brand colors before paying anything.",
    },
    ProcessStep {
        icon: icons::CODE,
        title: "Build",
        description: "I build the full site with clean code, subtle motion and fast pages.",
    },
    ProcessStep {
        icon: icons::SEND,
        title: "Launch",
        description: "Your site goes live on a fast static host with forms and analytics wired up.",
    },
];

pub static PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$600",
        blurb: "A single landing page that turns visitors into calls.",
        popular: false,
        features: &[
            "One-page site",
            "Contact form",
            "Mobile-first layout",
            "Basic SEO setup",
        ],
    },
    PricingTier {
        name: "Business",
        price: "$1,200",
        blurb: "A multi-section site for growing local businesses.",
        popular: true,
        features: &[
            "Up to 5 pages",
            "Scroll animations",
            "Gallery or menu section",
            "Structured data for local search",
            "30 days of tweaks",
        ],
    },
    PricingTier {
        name: "Custom",
        price: "Let's talk",
        blurb: "Bigger builds, integrations or ongoing care.",
        popular: false,
        features: &[
            "Custom page count",
            "Booking or shop integrations",
            "Monthly care plan available",
        ],
    },
];

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a site take?",
        answer: "Most landing pages are live within one to two weeks of the discovery call. Larger sites take three to four weeks.",
    },
    FaqEntry {
        question: "Do I need a CMS?",
        answer: "Usually not. Static sites have nothing to patch or break. When you need a change, send me a message and it is done.",
    },
    FaqEntry {
        question: "Where is my site hosted?",
        answer: "On a fast static host with a global CDN and free SSL. Hosting for small sites typically costs nothing.",
    },
    FaqEntry {
        question: "What do I need to provide?",
        answer: "Your logo, a few photos and a rough idea of what you offer. I can help write the copy.",
    },
    FaqEntry {
        question: "How does payment work?",
        answer: "Half up front after you approve the mockup, half at launch. No payment is needed for the mockup itself.",
    },
];
