//! Metadata service binary: serves `GET /api/metadata?url=...`.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use sitepeek::server::{router, AppState};
use sitepeek::Options;

#[derive(Parser)]
#[command(name = "sitepeek-server", about = "HTTP metadata extraction service")]
struct Cli {
    /// Port to listen on (falls back to the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    /// Reject invalid TLS certificates instead of the default laxity
    #[arg(long)]
    strict_tls: bool,

    /// Include diagnostic traces in error responses
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let port = cli
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(3001);

    let options = Options {
        timeout: Duration::from_millis(cli.timeout_ms),
        accept_invalid_certs: !cli.strict_tls,
        ..Options::default()
    };

    let state = Arc::new(AppState {
        options,
        dev: cli.dev,
    });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    info!(port, "metadata server running");
    axum::serve(listener, app).await?;

    Ok(())
}
