mod cli;
mod server;

use std::sync::Arc;

use clap::Parser;
use eyre::{eyre, WrapErr};

use paygate_core::{BlockonomicsClient, PaymentProvider};

/// Optional dotenv-style file read from the working directory at startup.
const ENV_FILE: &str = "app.env";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Values already present in the environment win over the file.
    let env_file_loaded = dotenvy::from_filename(ENV_FILE).is_ok();

    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    if env_file_loaded {
        tracing::info!(path = ENV_FILE, "loaded environment file");
    }

    let config = args.provider_config();
    tracing::info!(
        provider = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        rps = ?config.requests_per_second,
        "configuring provider client"
    );
    let provider: Arc<dyn PaymentProvider> =
        Arc::new(BlockonomicsClient::new(config).context("configure provider client")?);

    let cors_origin = args
        .cors_origin
        .as_deref()
        .map(|origin| {
            origin
                .parse::<axum::http::HeaderValue>()
                .map_err(|e| eyre!("invalid --cors-origin `{origin}`: {e}"))
        })
        .transpose()?;

    let router = server::build_router(server::AppState { provider }, cors_origin);

    let listener = tokio::net::TcpListener::bind(&args.server_address)
        .await
        .wrap_err_with(|| format!("bind TCP listener on {}", args.server_address))?;

    tracing::info!("listening on {}", args.server_address);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("run HTTP server")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
