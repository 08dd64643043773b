//! Static content and pure derivations for the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod icons;
pub mod motion;
pub mod site;

pub use contact::{ContactError, ContactSubmission};
pub use content::*;
pub use site::SiteMeta;
