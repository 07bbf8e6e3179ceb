//! HTTP server exposing the page routes and the form-handling endpoints.
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::AppError;
use self::state::ServerState;

/// Creates the application router with all routes and middleware.
pub fn create_app(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/elections", get(handlers::elections))
        .route("/results", get(handlers::results))
        .route("/candidates", get(handlers::candidates))
        .route("/polls", post(handlers::create_poll))
        .route(
            "/polls/:id",
            get(handlers::poll_detail)
                .put(handlers::update_poll)
                .delete(handlers::delete_poll),
        )
        .route("/polls/:id/contest", post(handlers::contest))
        .route("/polls/:id/vote", post(handlers::vote))
        .route("/wallet", get(handlers::wallet).post(handlers::connect_wallet))
        .route("/networks", get(handlers::networks))
        .route("/networks/:name/switch", post(handlers::switch_network))
        .route(
            "/profile/:address",
            get(handlers::profile).put(handlers::save_profile),
        )
        .route("/profile/:address/kyc", post(handlers::start_kyc))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the server on the given address.
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
