//! One-shot CLI: extract a single target and print the JSON record.

use std::time::Duration;

use clap::Parser;

use sitepeek::Options;

#[derive(Parser)]
#[command(name = "sitepeek", about = "Extract page metadata as JSON")]
struct Cli {
    /// Host or URL to inspect (e.g. example.com)
    target: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    /// Reject invalid TLS certificates instead of the default laxity
    #[arg(long)]
    strict_tls: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let options = Options {
        timeout: Duration::from_millis(cli.timeout_ms),
        accept_invalid_certs: !cli.strict_tls,
        ..Options::default()
    };

    let metadata = sitepeek::extract_with_options(&cli.target, &options).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&metadata)?
    } else {
        serde_json::to_string(&metadata)?
    };

    println!("{json}");
    Ok(())
}
