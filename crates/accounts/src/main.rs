//! Accounts microservice entrypoint.

use anyhow::Result;
use std::net::SocketAddr;

use microbank_accounts::config::AppConfig;
use microbank_accounts::repository;
use microbank_accounts::routes;
use microbank_accounts::service::AccountsService;
use microbank_accounts::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let pool = repository::init_database(&config.database_url).await?;
    let service = AccountsService::new(pool, &config.audit_actor);
    let app = routes::create_router(AppState::new(service, &config));

    let addr: SocketAddr = config.bind_address().parse()?;
    log::info!("🚀 Accounts service starting at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
