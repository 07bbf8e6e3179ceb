//! End-to-end tests for the page routes against a mock wallet provider.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use alloy::hex::FromHex;
use alloy::primitives::U256;
use alloy::sol_types::{SolCall, SolValue};
use dapp_votes_app::notifier::{Notifier, TracingNotifier};
use dapp_votes_app::profile::{AutoApproveVerification, MemoryProfileStore, ProfileService};
use dapp_votes_app::server::state::ServerState;
use dapp_votes_app::server::create_app;
use dapp_votes_app::service::VotingService;
use dapp_votes_app::state::AppStore;
use dapp_votes_chain::abi::{getContestantsCall, getPollCall, getPollsCall, ContestantStruct, PollStruct};
use dapp_votes_chain::{Address, MockWalletProvider, NetworkRegistry, VotesContract, WalletProvider};

fn account() -> Address {
    Address::from_hex("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap()
}

fn raw_poll(id: u64, votes: u64) -> PollStruct {
    PollStruct {
        id: U256::from(id),
        image: "ipfs://poll".to_string(),
        title: "Presidencia".to_string(),
        description: "Elección presidencial de Honduras".to_string(),
        votes: U256::from(votes),
        contestants: U256::from(1),
        deleted: false,
        director: account(),
        startsAt: U256::from(1_764_547_200_000u64),
        endsAt: U256::from(1_764_633_600_000u64),
        timestamp: U256::from(1_764_000_000_000u64),
        voters: vec![],
        avatars: vec![],
    }
}

fn raw_contestant(id: u64, votes: u64) -> ContestantStruct {
    ContestantStruct {
        id: U256::from(id),
        image: "ipfs://candidate".to_string(),
        name: "Nasry Asfura".to_string(),
        voter: account(),
        votes: U256::from(votes),
        voters: vec![],
    }
}

fn app_with(provider: Arc<MockWalletProvider>) -> (axum::Router, Arc<AppStore>) {
    let store = Arc::new(AppStore::new());
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let dyn_provider: Arc<dyn WalletProvider> = provider;
    let contract = VotesContract::new(dyn_provider.clone(), Address::ZERO)
        .with_poll_interval(Duration::from_millis(1));
    let service = Arc::new(VotingService::new(
        dyn_provider.clone(),
        contract,
        store.clone(),
        notifier.clone(),
    ));
    let profiles = Arc::new(ProfileService::new(
        Arc::new(MemoryProfileStore::new()),
        Arc::new(AutoApproveVerification::new(Duration::ZERO)),
        notifier,
    ));
    let state = ServerState {
        service,
        profiles,
        store: store.clone(),
        registry: Arc::new(NetworkRegistry::from_env()),
        provider: dyn_provider,
    };
    (create_app(state), store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (app, _) = app_with(Arc::new(MockWalletProvider::new()));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn elections_page_serves_the_listing() {
    let provider = Arc::new(MockWalletProvider::new().with_call_response(
        getPollsCall::SELECTOR,
        vec![raw_poll(1, 2)].abi_encode(),
    ));
    let (app, store) = app_with(provider);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/elections")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Elecciones 2025");
    assert_eq!(body["polls"][0]["id"], 1);
    assert_eq!(store.polls().len(), 1);
}

#[tokio::test]
async fn results_page_computes_standings() {
    let provider = Arc::new(
        MockWalletProvider::new()
            .with_call_response(getPollsCall::SELECTOR, vec![raw_poll(1, 2)].abi_encode())
            .with_call_response(
                getContestantsCall::SELECTOR,
                vec![raw_contestant(1, 2)].abi_encode(),
            ),
    );
    let (app, _) = app_with(provider);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/results")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let standing = &body["polls"][0]["standings"][0];
    assert_eq!(standing["percentage"], "100.0");
    assert_eq!(standing["winning"], true);
    assert_eq!(standing["image"], "/images/NASRY_ASFURA.jpg");
}

#[tokio::test]
async fn poll_detail_includes_the_window() {
    let provider = Arc::new(
        MockWalletProvider::new()
            .with_call_response(getPollCall::SELECTOR, raw_poll(1, 0).abi_encode())
            .with_call_response(getContestantsCall::SELECTOR, Vec::<ContestantStruct>::new().abi_encode()),
    );
    let (app, _) = app_with(provider);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/polls/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["poll"]["id"], 1);
    assert!(body["window"].is_string());
}

#[tokio::test]
async fn create_poll_rejects_incomplete_forms() {
    let provider = Arc::new(MockWalletProvider::new().with_accounts(vec![account()]));
    let (app, _) = app_with(provider.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/polls",
            json!({
                "image": "",
                "title": "Presidencia",
                "description": "d",
                "starts_at": 1,
                "ends_at": 2,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    // The form never reached the chain.
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn vote_requires_a_connected_wallet() {
    let provider = Arc::new(MockWalletProvider::new().with_accounts(vec![account()]));
    let (app, _) = app_with(provider);

    let response = app
        .oneshot(json_request("POST", "/polls/1/vote", json!({ "cid": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Conecta tu billetera"));
}

#[tokio::test]
async fn wallet_connect_then_vote_succeeds() {
    let provider = Arc::new(
        MockWalletProvider::new()
            .with_accounts(vec![account()])
            .with_call_response(getPollCall::SELECTOR, raw_poll(1, 1).abi_encode())
            .with_call_response(
                getContestantsCall::SELECTOR,
                vec![raw_contestant(1, 1)].abi_encode(),
            ),
    );
    let (app, store) = app_with(provider.clone());

    let response = app
        .clone()
        .oneshot(json_request("POST", "/wallet", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(store.is_connected());

    let response = app
        .oneshot(json_request("POST", "/polls/1/vote", json!({ "cid": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.sent_transactions().len(), 1);
    assert_eq!(store.contestants().len(), 1);
}

#[tokio::test]
async fn profile_flow_reaches_verified() {
    let (app, _) = app_with(Arc::new(MockWalletProvider::new()));
    let address = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/profile/{address}"),
            json!({ "first_name": "Ana", "last_name": "Mejía" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/profile/{address}/kyc"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["kyc_status"], "verified");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/profile/{address}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["kyc_status"], "verified");
    assert_eq!(body["first_name"], "Ana");
}

#[tokio::test]
async fn networks_report_the_current_chain() {
    let provider = Arc::new(MockWalletProvider::new().with_chain_id(8453));
    let (app, _) = app_with(provider);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/networks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["current"], "base");
    assert_eq!(body["networks"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn switching_to_an_unadded_network_adds_it() {
    let provider = Arc::new(MockWalletProvider::new());
    let (app, _) = app_with(provider.clone());

    let response = app
        .oneshot(json_request("POST", "/networks/sepolia/switch", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.added_chains(), vec![11155111]);
}
