//! # Card Primitives
//!
//! Building blocks shared by every card: the overlay link and the body text.

use leptos::prelude::*;

/// Card title link.
///
/// The hover overlay and the stretched span make the whole card clickable.
/// An empty `href` yields an inert anchor.
#[component]
pub fn CardLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="absolute -inset-x-4 -inset-y-6 z-0 scale-95 bg-zinc-50 opacity-0 transition group-hover:scale-100 group-hover:opacity-100 sm:-inset-x-6 sm:rounded-2xl dark:bg-zinc-800/50"></div>
        <a href=href>
            <span class="absolute -inset-x-4 -inset-y-6 z-20 sm:-inset-x-6 sm:rounded-2xl"></span>
            <span class="relative z-10">{children()}</span>
        </a>
    }
}

#[component]
pub fn CardDescription(text: &'static str) -> impl IntoView {
    view! {
        <p class="relative z-10 mt-2 text-sm text-zinc-600 dark:text-zinc-400">{text}</p>
    }
}
