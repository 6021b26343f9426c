//! # Static Export
//!
//! Writes the rendered site to a directory so it can be served by any static
//! file host.

use std::fs;
use std::path::{Path, PathBuf};

use portfolio_domain::CATALOGUE;
use portfolio_frontend::render_projects_page;

use crate::error::SiteResult;

/// Files produced by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub page: PathBuf,
    pub catalogue: PathBuf,
    pub cards: usize,
}

/// Render the projects page and the catalogue JSON into `out_dir`.
///
/// Produces `projects/index.html` and `api/projects.json`, creating parent
/// directories as needed and overwriting earlier output.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub fn export_site(out_dir: &Path, pretty: bool) -> SiteResult<ExportSummary> {
    let page = out_dir.join("projects").join("index.html");
    let catalogue = out_dir.join("api").join("projects.json");

    write_file(&page, render_projects_page().as_bytes())?;

    let json = if pretty {
        serde_json::to_vec_pretty(CATALOGUE)?
    } else {
        serde_json::to_vec(CATALOGUE)?
    };
    write_file(&catalogue, &json)?;

    tracing::info!(
        page = %page.display(),
        catalogue = %catalogue.display(),
        cards = CATALOGUE.len(),
        "Site exported"
    );

    Ok(ExportSummary {
        page,
        catalogue,
        cards: CATALOGUE.len(),
    })
}

fn write_file(path: &Path, contents: &[u8]) -> SiteResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
