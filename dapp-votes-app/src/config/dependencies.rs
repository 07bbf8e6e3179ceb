//! Dependency initialization and wiring for the voting application.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::notifier::{Notifier, TracingNotifier};
use crate::profile::{AutoApproveVerification, FileProfileStore, ProfileService};
use crate::server::state::ServerState;
use crate::service::VotingService;
use crate::state::AppStore;
use dapp_votes_chain::{HttpWalletProvider, NetworkRegistry, VotesContract, WalletProvider};

/// Holds the wired components of the application.
pub struct Dependencies {
    pub config: AppConfig,
    pub provider: Arc<dyn WalletProvider>,
    pub registry: Arc<NetworkRegistry>,
    pub store: Arc<AppStore>,
    pub service: Arc<VotingService>,
    pub profiles: Arc<ProfileService>,
}

impl Dependencies {
    /// Wires up the provider, contract client, store, and services for the
    /// configured network.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on success or an `AppError` when the
    /// selected network has no contract address configured.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let registry = Arc::new(NetworkRegistry::from_env());
        let network = registry.get(&config.network).clone();
        let rpc_url = config
            .rpc_url
            .clone()
            .unwrap_or_else(|| network.rpc_url.clone());
        let contract_address = network.contract_address.ok_or_else(|| {
            AppError::Config(format!(
                "no contract address configured for network {}",
                network.name
            ))
        })?;
        info!(network = %network.name, rpc = %rpc_url, contract = %contract_address, "binding to network");

        let provider: Arc<dyn WalletProvider> = Arc::new(HttpWalletProvider::new(&rpc_url));
        let store = Arc::new(AppStore::new());
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        let contract = VotesContract::new(provider.clone(), contract_address);
        let service = Arc::new(VotingService::new(
            provider.clone(),
            contract,
            store.clone(),
            notifier.clone(),
        ));

        let profiles = Arc::new(ProfileService::new(
            Arc::new(FileProfileStore::new(&config.profile_dir)),
            Arc::new(AutoApproveVerification::new(config.kyc_delay)),
            notifier,
        ));

        Ok(Self {
            config,
            provider,
            registry,
            store,
            service,
            profiles,
        })
    }

    pub fn server_state(&self) -> ServerState {
        ServerState {
            service: self.service.clone(),
            profiles: self.profiles.clone(),
            store: self.store.clone(),
            registry: self.registry.clone(),
            provider: self.provider.clone(),
        }
    }
}
