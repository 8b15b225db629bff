//! About-section layout composer.
//!
//! Wraps whatever page content the router hands us in a centered column,
//! always preceded by the rotating insight strip. The composer is pure: it
//! reads no external state and cannot fail for any input, including none.

use maud::{html, Markup};
use tracing::debug;

use crate::components::insight_roll::{InsightDisplay, InsightRoll};

/// The achievement highlights shown in the About strip.
///
/// Hard-coded placeholder content — updating it is a source edit, not
/// configuration. Order is the display order.
pub const ABOUT_INSIGHTS: [&str; 5] = [
    "5+ Projects Completed",
    "1+ Years of Freelancing",
    "99% Client Satisfaction",
    "400+ Subscribers",
    "Authored 10+ Blogs on Coderlegion",
];

/// Composes the About layout with the default [`InsightRoll`] display.
pub fn about_layout(children: Option<Markup>) -> Markup {
    about_layout_with(&InsightRoll, children)
}

/// Composes the About layout with a caller-supplied insight display.
///
/// The display always receives exactly [`ABOUT_INSIGHTS`], in order, and its
/// output always precedes the children. `None` children yields the insight
/// strip alone.
pub fn about_layout_with(display: &impl InsightDisplay, children: Option<Markup>) -> Markup {
    debug!(
        insights = ABOUT_INSIGHTS.len(),
        has_children = children.is_some(),
        "rendering about layout"
    );
    html! {
        main class="w-full flex flex-col items-center justify-between" {
            (display.render(&ABOUT_INSIGHTS))
            @if let Some(children) = children {
                (children)
            }
        }
    }
}
