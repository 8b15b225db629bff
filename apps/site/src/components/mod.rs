// Presentational components for the About section.

pub mod about;
pub mod insight_roll;

// Re-export the public API consumed by page code.
pub use about::{about_layout, about_layout_with, ABOUT_INSIGHTS};
pub use insight_roll::{InsightDisplay, InsightRoll};
