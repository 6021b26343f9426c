//! # Portfolio Domain Model
//!
//! The project catalogue shown on the portfolio "Projects" page. The records
//! are a process-wide constant: built in at compile time, never mutated, and
//! shared by the renderer, the HTTP service and the static export.

use serde::Serialize;
use serde::ser::Serializer;

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Outbound link of a project card.
///
/// An empty `href` means the project has no public link; the card still
/// renders, with an inert anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl ProjectLink {
    #[must_use]
    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Directory, relative to the asset root, holding the logo images.
pub const LOGO_DIR: &str = "images/logos";

/// Bundled logo images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logo {
    AshleyHomestore,
    Dufresne,
    Shopify,
    Memi,
    Chrome,
    Nimiq,
    Dynamic,
    Figma,
    Owwwlab,
    Wordpress,
}

impl Logo {
    pub const ALL: [Self; 10] = [
        Self::AshleyHomestore,
        Self::Dufresne,
        Self::Shopify,
        Self::Memi,
        Self::Chrome,
        Self::Nimiq,
        Self::Dynamic,
        Self::Figma,
        Self::Owwwlab,
        Self::Wordpress,
    ];

    /// File name under [`LOGO_DIR`].
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::AshleyHomestore => "ash.png",
            Self::Dufresne => "dufresne.png",
            Self::Shopify => "shopify.svg",
            Self::Memi => "memi.png",
            Self::Chrome => "chrome.svg",
            Self::Nimiq => "nimiq.svg",
            Self::Dynamic => "dynamic.svg",
            Self::Figma => "figma.svg",
            Self::Owwwlab => "owwwlab.svg",
            Self::Wordpress => "wordpress.svg",
        }
    }

    /// Public URL path the image is served from.
    #[must_use]
    pub const fn src(&self) -> &'static str {
        match self {
            Self::AshleyHomestore => "/images/logos/ash.png",
            Self::Dufresne => "/images/logos/dufresne.png",
            Self::Shopify => "/images/logos/shopify.svg",
            Self::Memi => "/images/logos/memi.png",
            Self::Chrome => "/images/logos/chrome.svg",
            Self::Nimiq => "/images/logos/nimiq.svg",
            Self::Dynamic => "/images/logos/dynamic.svg",
            Self::Figma => "/images/logos/figma.svg",
            Self::Owwwlab => "/images/logos/owwwlab.svg",
            Self::Wordpress => "/images/logos/wordpress.svg",
        }
    }
}

impl Serialize for Logo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.src())
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A single catalogue record, rendered as one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectEntry {
    /// Display name, unique within the catalogue
    pub name: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
    pub logo: Logo,
}

// =============================================================================
// CATALOGUE
// =============================================================================

/// The projects, in display order.
pub static CATALOGUE: &[ProjectEntry] = &[
    ProjectEntry {
        name: "Ashley Homestore theme",
        description: "I built a Vue.js theme for Ashley Homestore’s website. I used TailwindCSS to build the theme and it was a great experience.",
        link: ProjectLink::new("https://ashleyhomestore.ca/", "ashleyhomestore.ca"),
        logo: Logo::AshleyHomestore,
    },
    ProjectEntry {
        name: "Dufrese theme",
        description: "I built a Vue.js theme for Dufrese’s website. This is the same theme that is on Ashley Homestore’s website.",
        link: ProjectLink::new("https://dufresne.ca/", "dufresne.ca"),
        logo: Logo::Dufresne,
    },
    ProjectEntry {
        name: "Satchel & Page Shopify theme",
        description: "I build this Shopify theme while working at FuleMade. Build from scatach on Shopify v2.0 and this time I used Svelte.js! to build web-components",
        link: ProjectLink::new("https://www.satchel-page.com/", "satchel-page.com"),
        logo: Logo::Shopify,
    },
    ProjectEntry {
        name: "Kiosk Chrome App",
        description: "This was a Chrome App in Kiosk mode that is used on physical scores across Canada. I build it using Nuxt.js PWA and TailwindCSS and GraphQL backend.",
        link: ProjectLink::new("", "not public"),
        logo: Logo::Chrome,
    },
    ProjectEntry {
        name: "Memi web app",
        description: "I was the frontend lead on this project and built the web app for Memi using Nuxt.js and TailwindCSS.",
        link: ProjectLink::new(
            "https://www.linkedin.com/company/verified-by-memi/",
            "linkedin.com",
        ),
        logo: Logo::Memi,
    },
    ProjectEntry {
        name: "Nimiq Miner",
        description: "A cryptocurrency miner for the Nimiq blockchain. I helped developing the parallel programing logic and all the frontend for it.",
        link: ProjectLink::new("https://github.com/NoncerPro", "github.com"),
        logo: Logo::Nimiq,
    },
    ProjectEntry {
        name: "Dynamic Miner and pool",
        description: "I was part of the project that for the first time implemented a GPU miner for Argon2d algorithm. We also created a pool for it so that miners can mine together.",
        link: ProjectLink::new("", "retired"),
        logo: Logo::Dynamic,
    },
    ProjectEntry {
        name: "Figma Squircle plugin",
        description: "A Figma plugin that creates a squircle shape. I build it using Figma’s API and Vue.js.",
        link: ProjectLink::new(
            "https://github.com/Youhan/figma-Squircle-plugin\"",
            "github.com",
        ),
        logo: Logo::Figma,
    },
    ProjectEntry {
        name: "Toranj HTML template",
        description: "A HTML template for photographers. Built in 2015. Won a Awwwards.",
        link: ProjectLink::new("https://github.com/Youhan/toranj-html-template", "github.com"),
        logo: Logo::Owwwlab,
    },
    ProjectEntry {
        name: "Toranj WordPress theme",
        description: "The WordPress version of Toranj's HTML template.",
        link: ProjectLink::new("", ""),
        logo: Logo::Wordpress,
    },
    ProjectEntry {
        name: "Faculty HTML template",
        description: "A HTML template for universities. Built in 2014.",
        link: ProjectLink::new("https://github.com/Youhan/faculty-html-theme", "github.com"),
        logo: Logo::Owwwlab,
    },
    ProjectEntry {
        name: "Faculty WordPress theme",
        description: "The WordPress version of Faculty's HTML template.",
        link: ProjectLink::new("", ""),
        logo: Logo::Wordpress,
    },
    ProjectEntry {
        name: "Choas HTML template",
        description: "A massive set of templates for academic websites. Built in 2017.",
        link: ProjectLink::new("https://github.com/Youhan/chaos-html", "github.com"),
        logo: Logo::Owwwlab,
    },
    ProjectEntry {
        name: "Vida HTML template",
        description: "An unconventional one page template at the time with horizontal scrolling and sliding. Built in 2013.",
        link: ProjectLink::new("https://github.com/Youhan/vida-html-template", "github.com"),
        logo: Logo::Owwwlab,
    },
    ProjectEntry {
        name: "Eram WordPress theme",
        description: "A WordPress theme for photographers.",
        link: ProjectLink::new("", "github.com"),
        logo: Logo::Wordpress,
    },
    ProjectEntry {
        name: "Hubble WordPress theme",
        description: "A personal WordPress theme for academic people.",
        link: ProjectLink::new("", "github.com"),
        logo: Logo::Wordpress,
    },
    ProjectEntry {
        name: "Hilbert WordPress template",
        description: "A WordPress template for academic people.",
        link: ProjectLink::new("", "github.com"),
        logo: Logo::Wordpress,
    },
];

/// The catalogue in display order.
#[must_use]
pub fn catalogue() -> &'static [ProjectEntry] {
    CATALOGUE
}

/// Look up an entry by its display name.
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static ProjectEntry> {
    CATALOGUE.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_size_and_order() {
        assert_eq!(catalogue().len(), 17);
        assert_eq!(CATALOGUE[0].name, "Ashley Homestore theme");
        assert_eq!(CATALOGUE[1].name, "Dufrese theme");
        assert_eq!(CATALOGUE[16].name, "Hilbert WordPress template");
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CATALOGUE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), CATALOGUE.len());
    }

    #[test]
    fn test_find_by_name() {
        let kiosk = find_by_name("Kiosk Chrome App").unwrap();
        assert_eq!(kiosk.link.href, "");
        assert_eq!(kiosk.link.label, "not public");

        let toranj = find_by_name("Toranj WordPress theme").unwrap();
        assert_eq!(toranj.link, ProjectLink::new("", ""));

        assert!(find_by_name("Nonexistent").is_none());
    }

    #[test]
    fn test_logo_paths() {
        for logo in Logo::ALL {
            let src = logo.src();
            assert!(src.starts_with(&format!("/{LOGO_DIR}/")));
            assert!(src.ends_with(logo.file_name()));
        }
    }

    #[test]
    fn test_entry_serializes_logo_as_path() {
        let value = serde_json::to_value(CATALOGUE[3]).unwrap();
        assert_eq!(value["name"], "Kiosk Chrome App");
        assert_eq!(value["link"]["href"], "");
        assert_eq!(value["link"]["label"], "not public");
        assert_eq!(value["logo"], "/images/logos/chrome.svg");
    }
}
