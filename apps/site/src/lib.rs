//! Blogkinng — the About-section slice of a personal blog site.
//!
//! Two independent units:
//! - [`components::about_layout`] — wraps arbitrary page content in the About
//!   container, always preceded by the rotating insight strip.
//! - [`metadata::site_metadata`] — the process-wide site metadata record read
//!   by downstream consumers (page titles, social links, theme default).
//!
//! The units share no state: the layout composer never reads the metadata
//! record, and the record is immutable after first access.

pub mod components;
pub mod metadata;

// Re-export the public API consumed by page code.
pub use components::{about_layout, about_layout_with, InsightDisplay, InsightRoll, ABOUT_INSIGHTS};
pub use metadata::{site_metadata, SiteMetadata, Theme};
