//! Presentational primitives shared by the page sections

pub mod button;
pub mod glass_card;
pub mod reveal;
pub mod section;

pub use button::{Button, ButtonVariant, button_classes};
pub use glass_card::GlassCard;
pub use reveal::{Reveal, RevealFallback};
pub use section::PageSection;
