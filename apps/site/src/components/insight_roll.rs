//! Rotating insight strip.
//!
//! The About layout depends on an insight display without knowing how it is
//! drawn. [`InsightDisplay`] is that seam; [`InsightRoll`] is the default
//! marquee implementation. Animation timing lives in the stylesheet
//! (`animate-roll`) — this module only emits the markup.

use maud::{html, Markup};

/// A renderer for an ordered sequence of insight strings.
///
/// Implementations must render every insight exactly once per pass, in input
/// order. An empty slice produces an empty (but valid) strip.
pub trait InsightDisplay {
    fn render(&self, insights: &[&str]) -> Markup;
}

/// Default insight display: a full-width horizontally scrolling marquee.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightRoll;

impl InsightDisplay for InsightRoll {
    fn render(&self, insights: &[&str]) -> Markup {
        html! {
            div class="w-full bg-accent dark:bg-accentDark text-light dark:text-dark whitespace-nowrap overflow-hidden" {
                div class="animate-roll w-full py-2 flex items-center justify-center capitalize font-semibold tracking-wider text-sm sm:text-base" {
                    @for insight in insights {
                        div { (insight) span class="px-4" { "|" } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_insight_in_order() {
        let insights = ["first thing", "second thing", "third thing"];
        let html = InsightRoll.render(&insights).into_string();
        let positions: Vec<usize> = insights
            .iter()
            .map(|i| html.find(i).unwrap_or_else(|| panic!("missing insight: {i}")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "insights must appear in input order: {positions:?}"
        );
    }

    #[test]
    fn test_each_insight_appears_exactly_once() {
        let insights = ["400+ Subscribers"];
        let html = InsightRoll.render(&insights).into_string();
        assert_eq!(html.matches("400+ Subscribers").count(), 1);
    }

    #[test]
    fn test_empty_slice_renders_empty_strip() {
        let html = InsightRoll.render(&[]).into_string();
        assert!(html.contains("animate-roll"), "strip container still present");
        assert_eq!(html.matches("px-4").count(), 0, "no separators without insights");
    }

    #[test]
    fn test_text_content_is_escaped() {
        let html = InsightRoll.render(&["<b>bold</b> claim"]).into_string();
        assert!(!html.contains("<b>"), "insight text must not inject markup");
        assert!(html.contains("&lt;b&gt;"));
    }
}
