//! Main entry point for the voting application server.

use std::net::SocketAddr;

use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dapp_votes_app::{server, session, AppConfig, AppError, Dependencies};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dapp_votes_app=info,dapp_votes_chain=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::load();
    let port = config.port;
    let deps = Dependencies::new(config)?;

    // Best effort; a node without accounts still serves the read routes.
    let _ = deps.service.check_wallet().await;

    let _session = session::watch(
        deps.provider.clone(),
        deps.service.clone(),
        deps.store.clone(),
    );

    info!("Starting dapp-votes server");
    let app = server::create_app(deps.server_state());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    server::run_server(app, addr).await
}
