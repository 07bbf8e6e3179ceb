//! Wallet session watcher.
//!
//! Owns the provider event subscription so the rest of the application
//! never installs listeners it cannot remove. Account changes update the
//! session and drop the current user; chain changes reset chain-derived
//! state and trigger a full poll refresh rather than reconciling anything
//! in flight.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::service::VotingService;
use crate::state::AppStore;
use dapp_votes_chain::{ProviderEvent, WalletProvider};

/// Handle to a running session watcher. Dropping it (or calling
/// [`SessionHandle::unsubscribe`]) stops the watcher.
pub struct SessionHandle {
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub fn unsubscribe(self) {}
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Subscribes to the provider's events and applies them to the store.
pub fn watch(
    provider: Arc<dyn WalletProvider>,
    service: Arc<VotingService>,
    store: Arc<AppStore>,
) -> SessionHandle {
    let mut events = provider.subscribe();
    let task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ProviderEvent::AccountsChanged(accounts)) => {
                    match accounts.first() {
                        Some(account) => store.set_wallet(&format!("{account:#x}")),
                        None => store.set_wallet(""),
                    }
                    store.set_current_user(None);
                    info!(connected = store.is_connected(), "wallet accounts changed");
                }
                Ok(ProviderEvent::ChainChanged(chain_id)) => {
                    info!(chain_id, "chain changed, resetting state");
                    store.reset();
                    // Errors are already surfaced through the notifier.
                    let _ = service.load_polls().await;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "session watcher lagged behind provider events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
    SessionHandle { task }
}
