//! # Document Head
//!
//! Title and description metadata for the projects page.

use leptos::prelude::*;

/// Document title, fixed regardless of catalogue contents
pub const PAGE_TITLE: &str = "Projects - Alireza Jahandideh";

/// Meta description, also used as the page heading
pub const PAGE_DESCRIPTION: &str = "Things I’ve made trying to put my dent in the universe.";

#[component]
pub fn ProjectsHead() -> impl IntoView {
    view! {
        <head>
            <meta charset="utf-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{PAGE_TITLE}</title>
            <meta name="description" content=PAGE_DESCRIPTION />
        </head>
    }
}
