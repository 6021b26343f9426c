//! Portfolio static export CLI
//!
//! Renders the projects page and catalogue JSON into a directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_server::export_site;

#[derive(Parser, Debug)]
#[command(name = "portfolio-export")]
#[command(about = "Export the portfolio projects page as static files")]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// Pretty-print the catalogue JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("portfolio_server=info".parse()?))
        .init();

    let args = Args::parse();

    info!("Exporting site to {}", args.out_dir.display());

    let summary = export_site(&args.out_dir, args.pretty)
        .with_context(|| format!("failed to export to {}", args.out_dir.display()))?;

    info!(
        "Wrote {} cards to {} and {}",
        summary.cards,
        summary.page.display(),
        summary.catalogue.display()
    );
    Ok(())
}
