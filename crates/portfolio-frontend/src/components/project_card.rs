//! # Project Card Component
//!
//! One card per catalogue entry, laid out in a responsive grid.

use leptos::prelude::*;
use portfolio_domain::ProjectEntry;

use super::{CardDescription, CardLink, LinkIcon};

/// Card grid, one `<li>` per entry in catalogue order
#[component]
pub fn ProjectList(entries: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <ul role="list" class="grid grid-cols-1 gap-x-12 gap-y-16 sm:grid-cols-2 lg:grid-cols-3">
            {entries
                .iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </ul>
    }
}

/// Single project card: logo badge, linked name, description, caption
///
/// An empty label writes no text node, leaving the caption span empty.
#[component]
pub fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <li class="group relative flex flex-col items-start">
            <div class="relative z-10 flex h-12 w-12 items-center justify-center rounded-full bg-zinc-800 shadow-md shadow-zinc-800/5 ring-1 ring-zinc-900/5 dark:border dark:border-zinc-700/50 dark:bg-zinc-800 dark:ring-0">
                <img src={project.logo.src()} alt="" class="h-8 w-8" />
            </div>
            <h2 class="mt-6 text-base font-semibold text-zinc-800 dark:text-zinc-100">
                <CardLink href={project.link.href}>{project.name}</CardLink>
            </h2>
            <CardDescription text={project.description} />
            <p class="relative z-10 mt-6 flex text-sm font-medium text-zinc-400 transition group-hover:text-teal-500 dark:text-zinc-200">
                <LinkIcon />
                <span class="ml-2">{(!project.link.label.is_empty()).then_some(project.link.label)}</span>
            </p>
        </li>
    }
}
