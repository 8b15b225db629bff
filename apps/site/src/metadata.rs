//! Site-wide metadata record.
//!
//! A single source of truth for the descriptive and identifying information
//! the rest of the site reads: page titles, canonical URL, social sharing
//! assets, author contact/social links, locale, and the default theme.
//!
//! The record is built once at first access and never mutated afterwards, so
//! it may be read concurrently from any number of consumers without
//! synchronization. Values are stored exactly as written — URLs are not
//! parsed and the email address is not validated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Theme preference
// ────────────────────────────────────────────────────────────────────────────

/// Default color scheme for the site.
///
/// Serializes to the lowercase strings `"system"`, `"dark"`, `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the visitor's OS preference.
    #[default]
    System,
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metadata record
// ────────────────────────────────────────────────────────────────────────────

/// The site metadata record — 17 required fields, all string-valued on the
/// wire.
///
/// Serialized key names match the site's original metadata file, including
/// the one irregular capitalized key (`Instagram`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteMetadata {
    pub title: String,
    pub author: String,
    pub header_title: String,
    pub description: String,
    /// BCP 47-ish language tag, stored as given.
    pub language: String,
    pub theme: Theme,
    /// Canonical site URL, stored as given (not parsed or normalized).
    pub site_url: String,
    /// Path to the site logo under the public asset root.
    pub site_logo: String,
    /// Path to the social preview banner under the public asset root.
    pub social_banner: String,
    pub email: String,
    pub github: String,
    pub twitter: String,
    pub facebook: String,
    pub youtube: String,
    pub linkedin: String,
    #[serde(rename = "Instagram")]
    pub instagram: String,
    pub locale: String,
}

impl SiteMetadata {
    /// Serializes the record to its JSON key-value form.
    ///
    /// Round trip is identity: `from_json(&to_json()?)` reproduces an equal
    /// record, since no field contains nested structure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record from its JSON key-value form.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Ordered `(platform, url)` pairs for the author's social profiles,
    /// in the order the footer renders them.
    pub fn social_links(&self) -> [(&'static str, &str); 6] {
        [
            ("github", self.github.as_str()),
            ("twitter", self.twitter.as_str()),
            ("facebook", self.facebook.as_str()),
            ("youtube", self.youtube.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Process-wide record
// ────────────────────────────────────────────────────────────────────────────

static SITE_METADATA: LazyLock<SiteMetadata> = LazyLock::new(|| SiteMetadata {
    title: "Blogkinng".to_string(),
    author: "Prince Kumar".to_string(),
    header_title: "Blogkinng".to_string(),
    description: "Prince Yadav Blog Site".to_string(),
    language: "en-us".to_string(),
    theme: Theme::System,
    site_url: "https://blog.sammkinng.in".to_string(),
    site_logo: "/logo.png".to_string(),
    social_banner: "/social-banner.png".to_string(),
    email: "fm568pk@gmail.com".to_string(),
    github: "https://github.com/sammkinng".to_string(),
    twitter: "https://twitter.com/Kinngsamm".to_string(),
    facebook: "https://facebook.com".to_string(),
    youtube: "https://youtube.com".to_string(),
    linkedin: "https://www.linkedin.com/in/sammkinng/".to_string(),
    instagram: "https://www.Instagram.com/sammkinng/".to_string(),
    locale: "en-US".to_string(),
});

/// Returns the process-wide site metadata record.
///
/// Initialized on first access, read-only thereafter.
pub fn site_metadata() -> &'static SiteMetadata {
    &SITE_METADATA
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
