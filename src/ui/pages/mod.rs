//! Application pages
//!
//! The site is a single landing page; everything else is an anchor on it.
//! Unknown paths get the 404 page.

mod landing;
mod not_found;

pub use landing::{LandingPage, business_structured_data, faq_structured_data};
pub use not_found::NotFoundPage;
