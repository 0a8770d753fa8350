use std::sync::Arc;

use clap::Parser;
use moviehub::config::ServerConfig;
use moviehub::http::MoviesServer;
use moviehub::{telemetry, MoviesStore};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_filter);

    let store = Arc::new(MoviesStore::new());
    let server = MoviesServer::start(store, config.bind_addr()).await?;

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");
    server.stop().await
}
