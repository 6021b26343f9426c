//! # Portfolio Frontend
//!
//! Server-rendered projects page. Rendering is a single synchronous pass over
//! an immutable catalogue, so concurrent renders need no coordination and
//! repeated renders are byte-identical.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod components;

use leptos::prelude::*;
use portfolio_domain::{CATALOGUE, ProjectEntry};

use components::*;

/// Intro paragraph under the page heading
pub const PAGE_INTRO: &str = "I’ve worked on tons of little projects over the years but these are the ones that I’m most proud of. Many of them are open-source, so if you see something that piques your interest, check out the code and contribute if you have ideas for how it can be improved.";

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Comment node the renderer emits to delimit hydratable ranges. The page is
/// never hydrated, and escaped text can never produce it.
const HYDRATION_MARKER: &str = "<!>";

/// Page body: heading, intro and the card grid
#[component]
pub fn ProjectsPage(entries: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <SimpleLayout title=PAGE_DESCRIPTION intro=PAGE_INTRO>
            <ProjectList entries=entries />
        </SimpleLayout>
    }
}

/// Full `<html>` document for the projects page
#[component]
pub fn ProjectsDocument(entries: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <html lang="en" class="h-full antialiased">
            <ProjectsHead />
            <body class="flex h-full bg-zinc-50 dark:bg-black">
                <main class="flex w-full flex-col">
                    <ProjectsPage entries=entries />
                </main>
            </body>
        </html>
    }
}

/// Render the projects page for the built-in catalogue.
#[must_use]
pub fn render_projects_page() -> String {
    render_projects_page_with(CATALOGUE)
}

/// Render the projects page template over `entries`.
#[must_use]
pub fn render_projects_page_with(entries: &'static [ProjectEntry]) -> String {
    let body = view! { <ProjectsDocument entries=entries /> }
        .to_html()
        .replace(HYDRATION_MARKER, "");
    tracing::debug!(cards = entries.len(), bytes = body.len(), "Rendered projects page");

    let mut html = String::with_capacity(DOCTYPE.len() + body.len());
    html.push_str(DOCTYPE);
    html.push_str(&body);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_domain::{Logo, ProjectLink};

    static ESCAPED: &[ProjectEntry] = &[ProjectEntry {
        name: "<script>alert(1)</script>",
        description: "Fish & chips",
        link: ProjectLink::new("https://example.com/?a=1&b=\"2\"", "example.com"),
        logo: Logo::Figma,
    }];

    /// Text as the renderer escapes it.
    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    /// Split the rendered document into one slice per card.
    fn cards(html: &str) -> Vec<&str> {
        html.split("<li ").skip(1).collect()
    }

    /// Text of the `<span class="ml-2">` caption inside a card.
    fn caption(card: &str) -> &str {
        let start = card.find(r#"<span class="ml-2">"#).unwrap() + r#"<span class="ml-2">"#.len();
        let len = card[start..].find("</span>").unwrap();
        &card[start..start + len]
    }

    #[test]
    fn test_one_card_per_entry() {
        let html = render_projects_page();
        assert_eq!(cards(&html).len(), CATALOGUE.len());
        assert_eq!(cards(&html).len(), 17);
    }

    #[test]
    fn test_cards_follow_catalogue_order() {
        let html = render_projects_page();
        let ashley = html.find("Ashley Homestore theme").unwrap();
        let dufrese = html.find("Dufrese theme").unwrap();
        assert!(ashley < dufrese);

        for (card, entry) in cards(&html).iter().zip(CATALOGUE) {
            assert!(card.contains(&escaped(entry.name)), "card out of order: {}", entry.name);
            assert!(card.contains(entry.logo.src()));
        }
    }

    #[test]
    fn test_card_without_public_link() {
        let html = render_projects_page();
        let kiosk = cards(&html)
            .into_iter()
            .find(|card| card.contains("Kiosk Chrome App"))
            .unwrap();

        assert!(kiosk.contains(r#"href="""#));
        assert!(kiosk.contains("This was a Chrome App in Kiosk mode"));
        assert_eq!(caption(kiosk).trim(), "not public");
    }

    #[test]
    fn test_empty_label_renders_empty_caption() {
        let html = render_projects_page();
        let toranj = cards(&html)
            .into_iter()
            .find(|card| card.contains("Toranj WordPress theme"))
            .unwrap();

        assert_eq!(caption(toranj), "");
        assert!(!html.contains("undefined"));

        let empty_captions = cards(&html)
            .into_iter()
            .filter(|card| caption(card).is_empty())
            .count();
        let empty_labels = CATALOGUE.iter().filter(|e| e.link.label.is_empty()).count();
        assert_eq!(empty_captions, empty_labels);
    }

    #[test]
    fn test_head_metadata() {
        let html = render_projects_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Projects - Alireza Jahandideh</title>"));
        assert!(html.contains(r#"name="description""#));
        assert!(html.contains(PAGE_DESCRIPTION));
        assert!(html.contains("<h1"));
        assert!(html.contains("open-source"));
    }

    #[test]
    fn test_title_independent_of_catalogue() {
        let empty = render_projects_page_with(&[]);
        assert!(empty.contains("<title>Projects - Alireza Jahandideh</title>"));
        assert!(cards(&empty).is_empty());

        let custom = render_projects_page_with(ESCAPED);
        assert!(custom.contains("<title>Projects - Alireza Jahandideh</title>"));
        assert_eq!(cards(&custom).len(), 1);
    }

    #[test]
    fn test_no_hydration_markers() {
        let html = render_projects_page();
        assert!(!html.contains("<!>"));
        assert!(html.contains("</li></ul>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render_projects_page(), render_projects_page());
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_projects_page_with(ESCAPED);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script"));
        assert!(html.contains("Fish &amp; chips"));

        let builtin = render_projects_page();
        assert!(builtin.contains("Satchel &amp; Page Shopify theme"));
        assert!(!builtin.contains(r#"plugin""#));
    }
}
