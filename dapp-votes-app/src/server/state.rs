//! Shared state handed to the request handlers.

use std::sync::Arc;

use crate::profile::ProfileService;
use crate::service::VotingService;
use crate::state::AppStore;
use dapp_votes_chain::{NetworkRegistry, WalletProvider};

#[derive(Clone)]
pub struct ServerState {
    pub service: Arc<VotingService>,
    pub profiles: Arc<ProfileService>,
    pub store: Arc<AppStore>,
    pub registry: Arc<NetworkRegistry>,
    pub provider: Arc<dyn WalletProvider>,
}
