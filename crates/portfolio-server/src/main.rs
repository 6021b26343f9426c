//! # Portfolio Site Server
//!
//! Binary entry point for the HTTP service.

use portfolio_server::{Config, build_router, init_tracing, missing_logos};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        version = portfolio_server::VERSION,
        assets = %config.assets_dir.display(),
        "Starting portfolio site"
    );

    for logo in missing_logos(&config.assets_dir) {
        tracing::warn!(
            file = logo.file_name(),
            src = logo.src(),
            "Logo asset missing, card image will not load"
        );
    }

    let app = build_router(&config);

    let addr = config.server_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Projects page available at http://{}/projects", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
