//! Cards microservice entrypoint.

use anyhow::Result;
use std::net::SocketAddr;

use microbank_cards::config::AppConfig;
use microbank_cards::routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let app = routes::create_router();

    let addr: SocketAddr = config.bind_address().parse()?;
    log::info!("🚀 Cards service starting at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
