//! Page sections, top to bottom

mod contact;
mod faq;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod process;
mod services;
mod work;

pub use contact::ContactSection;
pub use faq::FaqSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing::PricingSection;
pub use process::ProcessSection;
pub use services::ServicesSection;
pub use work::WorkSection;
