//! HTTP request handlers.
//!
//! Every chain or validation failure is translated into a non-crashing JSON
//! status body; the service has already pushed the user-facing notice.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::candidates::available_candidates;
use crate::errors::{AppError, ProfileError};
use crate::server::state::ServerState;
use crate::utils::now_ms;
use crate::views;
use dapp_votes_chain::ChainError;
use dapp_votes_shared::types::PollParams;

#[derive(Deserialize)]
pub struct ContestRequest {
    pub name: String,
    pub image: String,
}

#[derive(Deserialize)]
pub struct VoteRequest {
    pub cid: u64,
}

#[derive(Deserialize)]
pub struct ProfileRequest {
    pub first_name: String,
    pub last_name: String,
}

fn error_response(error: AppError) -> Response {
    let status = match &error {
        AppError::Validation(_) | AppError::Profile(ProfileError::Validation(_)) => {
            StatusCode::BAD_REQUEST
        }
        AppError::Chain(ChainError::WalletUnavailable(_)) => StatusCode::BAD_REQUEST,
        AppError::Chain(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(json!({ "status": "error", "message": error.to_string() })),
    )
        .into_response()
}

fn ok(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "dapp-votes server is running")
}

pub async fn home(State(state): State<ServerState>) -> Response {
    Json(views::home_view(&state.store)).into_response()
}

pub async fn elections(State(state): State<ServerState>) -> Response {
    match state.service.load_polls().await {
        Ok(_) => Json(views::election_view(&state.store)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn results(State(state): State<ServerState>) -> Response {
    match state.service.load_results().await {
        Ok(data) => Json(views::results_view(&data)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn candidates() -> Response {
    Json(available_candidates()).into_response()
}

pub async fn poll_detail(State(state): State<ServerState>, Path(id): Path<u64>) -> Response {
    let poll = match state.service.load_poll(id).await {
        Ok(poll) => poll,
        Err(error) => return error_response(error),
    };
    match state.service.load_contestants(id).await {
        Ok(contestants) => {
            Json(views::poll_detail_view(&poll, &contestants, now_ms())).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub async fn create_poll(
    State(state): State<ServerState>,
    Json(params): Json<PollParams>,
) -> Response {
    match state.service.create_poll(&params).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "status": "success", "polls": state.store.polls().len() })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn update_poll(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(params): Json<PollParams>,
) -> Response {
    match state.service.update_poll(id, &params).await {
        Ok(()) => ok(json!({ "status": "success" })),
        Err(error) => error_response(error),
    }
}

pub async fn delete_poll(State(state): State<ServerState>, Path(id): Path<u64>) -> Response {
    match state.service.delete_poll(id).await {
        Ok(()) => ok(json!({ "status": "success" })),
        Err(error) => error_response(error),
    }
}

pub async fn contest(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(request): Json<ContestRequest>,
) -> Response {
    match state.service.contest(id, &request.name, &request.image).await {
        Ok(()) => ok(json!({ "status": "success" })),
        Err(error) => error_response(error),
    }
}

pub async fn vote(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(request): Json<VoteRequest>,
) -> Response {
    match state.service.vote(id, request.cid).await {
        Ok(()) => ok(json!({ "status": "success" })),
        Err(error) => error_response(error),
    }
}

pub async fn wallet(State(state): State<ServerState>) -> Response {
    ok(json!({
        "wallet": state.store.wallet(),
        "connected": state.store.is_connected(),
    }))
}

pub async fn connect_wallet(State(state): State<ServerState>) -> Response {
    match state.service.connect_wallet().await {
        Ok(()) => ok(json!({
            "status": "success",
            "wallet": state.store.wallet(),
        })),
        Err(error) => error_response(error),
    }
}

pub async fn networks(State(state): State<ServerState>) -> Response {
    let current = match state.provider.chain_id().await {
        Ok(chain_id) => state.registry.name_for_chain(chain_id),
        Err(_) => "unknown",
    };
    let networks: Vec<Value> = state
        .registry
        .iter()
        .map(|(key, config)| {
            json!({
                "key": key,
                "name": config.name,
                "chain_id": config.chain_id,
                "block_explorer": config.block_explorer,
            })
        })
        .collect();
    ok(json!({ "current": current, "networks": networks }))
}

pub async fn switch_network(State(state): State<ServerState>, Path(name): Path<String>) -> Response {
    match state
        .registry
        .switch_to(state.provider.as_ref(), &name)
        .await
    {
        Ok(()) => ok(json!({ "status": "success", "network": name })),
        Err(error) => error_response(AppError::Chain(error)),
    }
}

pub async fn profile(State(state): State<ServerState>, Path(address): Path<String>) -> Response {
    match state.profiles.load_or_default(&address).await {
        Ok(profile) => Json(profile).into_response(),
        Err(error) => error_response(AppError::Profile(error)),
    }
}

pub async fn save_profile(
    State(state): State<ServerState>,
    Path(address): Path<String>,
    Json(request): Json<ProfileRequest>,
) -> Response {
    match state
        .profiles
        .save_profile(&address, &request.first_name, &request.last_name)
        .await
    {
        Ok(profile) => Json(profile).into_response(),
        Err(error) => error_response(AppError::Profile(error)),
    }
}

pub async fn start_kyc(State(state): State<ServerState>, Path(address): Path<String>) -> Response {
    match state.profiles.start_kyc(&address).await {
        Ok(profile) => Json(profile).into_response(),
        Err(error) => error_response(AppError::Profile(error)),
    }
}
