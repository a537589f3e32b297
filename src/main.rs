use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use view_tracker::config::load_albums;
use view_tracker::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let albums = match &config.albums_path {
        Some(path) => {
            let bytes = fs::read(path).await?;
            load_albums(Some(bytes.as_slice()))?
        }
        None => load_albums(None)?,
    };
    info!(
        "history at {}, week anchored on {}, {} albums",
        config.history_path.display(),
        config.anchor,
        albums.len()
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState::new(config, albums));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
