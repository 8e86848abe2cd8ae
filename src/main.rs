use anyhow::Context;
use clap::Parser;
use newsdesk::{api, config, logging, service::BriefingService};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve news items, summaries, and quiz questions over HTTP.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Port to listen on (overrides `PORT`).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    config::init_config().context("Failed to load config from environment")?;
    let config = config::get_config();
    logging::init_tracing(config.debug);
    tracing::debug!(
        server_port = config.server_port,
        generation_backend = ?config.generation_backend,
        news_source = ?config.news_source,
        cors_origins = ?config.cors_origins,
        "Loaded configuration"
    );

    let service = BriefingService::new(config).context("Failed to initialize briefing service")?;
    let app = api::create_router(Arc::new(service), &config.cors_origins);

    let port = cli.port.unwrap_or(config.server_port);
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    tracing::info!("Listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
