use anyhow::Context;
use avalon_server::config::ServerConfig;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,avalon_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env()?;
    config.validate()?;
    tracing::debug!(?config, "loaded configuration");

    let app = avalon_server::app(&config);
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!(
        "Serving {} on port {} ({:?})",
        config.dist_dir.display(),
        config.port,
        config.environment
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
