//! The voting service: typed operations against the contract with
//! confirm-then-refetch semantics and store updates.
//!
//! Failure policy: every chain failure is reported through the notifier
//! and returned as an error; there is no retry, a failed transaction
//! requires explicit re-initiation. Validation failures never reach the
//! network layer.

use std::sync::Arc;

use tracing::{error, warn};

use crate::errors::AppError;
use crate::notifier::{Notice, Notifier};
use crate::state::AppStore;
use dapp_votes_chain::{
    normalize_contestants, normalize_poll, normalize_polls, Address, ChainError, VotesContract,
    WalletProvider,
};
use dapp_votes_shared::types::{Contestant, Poll, PollParams};

const PENDING_TEXT: &str = "Approve transaction...";
const ERROR_TEXT: &str = "Encountered error 🤯";
const INSTALL_TEXT: &str = "Please install Metamask";
const NO_ACCOUNTS_TEXT: &str = "Please connect wallet, no accounts found.";
const CONNECT_FIRST_TEXT: &str = "¡Conecta tu billetera primero!";

pub struct VotingService {
    provider: Arc<dyn WalletProvider>,
    contract: VotesContract,
    store: Arc<AppStore>,
    notifier: Arc<dyn Notifier>,
}

impl VotingService {
    pub fn new(
        provider: Arc<dyn WalletProvider>,
        contract: VotesContract,
        store: Arc<AppStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            contract,
            store,
            notifier,
        }
    }

    /// Requests wallet access and records the active account in the store.
    pub async fn connect_wallet(&self) -> Result<(), AppError> {
        let accounts = self
            .provider
            .request_accounts()
            .await
            .map_err(|e| self.report_chain(e))?;
        self.apply_accounts(&accounts);
        Ok(())
    }

    /// Reads the wallet's current accounts and records the active one.
    pub async fn check_wallet(&self) -> Result<(), AppError> {
        let accounts = self
            .provider
            .accounts()
            .await
            .map_err(|e| self.report_chain(e))?;
        self.apply_accounts(&accounts);
        Ok(())
    }

    fn apply_accounts(&self, accounts: &[Address]) {
        match accounts.first() {
            Some(account) => self.store.set_wallet(&format!("{account:#x}")),
            None => {
                self.store.set_wallet("");
                self.notifier
                    .notify(Notice::Error(NO_ACCOUNTS_TEXT.to_string()));
            }
        }
    }

    /// Creates a poll, waits for one confirmation, then refreshes the poll
    /// listing in the store.
    ///
    /// # Arguments
    ///
    /// * `params` - The poll fields; all text fields and both window bounds
    ///   are required.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or an `AppError` when validation or the
    /// chain operation fails.
    pub async fn create_poll(&self, params: &PollParams) -> Result<(), AppError> {
        self.validate_params(params)?;
        self.notifier.notify(Notice::Pending(PENDING_TEXT.to_string()));

        self.contract
            .create_poll(params)
            .await
            .map_err(|e| self.report_chain(e))?;
        self.refresh_polls().await?;
        self.notifier
            .notify(Notice::Success("Poll created successfully 👌".to_string()));
        Ok(())
    }

    /// Updates a poll, waits for one confirmation, then refreshes that poll
    /// in the store.
    pub async fn update_poll(&self, id: u64, params: &PollParams) -> Result<(), AppError> {
        self.validate_params(params)?;
        self.notifier.notify(Notice::Pending(PENDING_TEXT.to_string()));

        self.contract
            .update_poll(id, params)
            .await
            .map_err(|e| self.report_chain(e))?;
        self.refresh_poll(id).await?;
        self.notifier
            .notify(Notice::Success("Poll updated successfully 👌".to_string()));
        Ok(())
    }

    /// Deletes a poll and waits for one confirmation. Nothing is refetched;
    /// deleted polls drop out of listings on the next load.
    pub async fn delete_poll(&self, id: u64) -> Result<(), AppError> {
        self.notifier.notify(Notice::Pending(PENDING_TEXT.to_string()));
        self.contract
            .delete_poll(id)
            .await
            .map_err(|e| self.report_chain(e))?;
        self.notifier
            .notify(Notice::Success("Poll deleted successfully 👌".to_string()));
        Ok(())
    }

    /// Registers a contestant in a poll, then refreshes the poll and its
    /// contestants.
    pub async fn contest(&self, id: u64, name: &str, image: &str) -> Result<(), AppError> {
        self.require_wallet()?;
        if name.trim().is_empty() || image.trim().is_empty() {
            return Err(self.reject("Nombre e imagen son requeridos"));
        }
        self.notifier.notify(Notice::Pending(PENDING_TEXT.to_string()));

        self.contract
            .contest(id, name, image)
            .await
            .map_err(|e| self.report_chain(e))?;
        self.refresh_poll_and_contestants(id).await?;
        self.notifier
            .notify(Notice::Success("Contest entered successfully 👌".to_string()));
        Ok(())
    }

    /// Casts a vote for contestant `cid` in poll `id`, then refreshes the
    /// poll and its contestants.
    pub async fn vote(&self, id: u64, cid: u64) -> Result<(), AppError> {
        self.require_wallet()?;
        self.notifier.notify(Notice::Pending(PENDING_TEXT.to_string()));

        self.contract
            .vote(id, cid)
            .await
            .map_err(|e| self.report_chain(e))?;
        self.refresh_poll_and_contestants(id).await?;
        self.notifier
            .notify(Notice::Success("Voted successfully 👌".to_string()));
        Ok(())
    }

    /// Fetches all polls, normalizes them, and caches them in the store.
    pub async fn load_polls(&self) -> Result<Vec<Poll>, AppError> {
        self.refresh_polls().await?;
        Ok(self.store.polls())
    }

    /// Fetches one poll, normalizes it, and caches it in the store.
    pub async fn load_poll(&self, id: u64) -> Result<Poll, AppError> {
        self.refresh_poll(id).await
    }

    /// Fetches a poll's contestants, normalizes them, and caches them.
    pub async fn load_contestants(&self, id: u64) -> Result<Vec<Contestant>, AppError> {
        let raw = self
            .contract
            .get_contestants(id)
            .await
            .map_err(|e| self.report_chain(e))?;
        let contestants = normalize_contestants(raw);
        if let Some(poll) = self.store.poll() {
            if poll.id == id {
                check_vote_sum(&poll, &contestants);
            }
        }
        self.store.set_contestants(contestants.clone());
        Ok(contestants)
    }

    /// Fetches every active poll together with its contestants, for the
    /// live results page.
    pub async fn load_results(&self) -> Result<Vec<(Poll, Vec<Contestant>)>, AppError> {
        let polls = self.load_polls().await?;
        let mut results = Vec::with_capacity(polls.len());
        for poll in polls {
            if poll.deleted {
                continue;
            }
            let raw = self
                .contract
                .get_contestants(poll.id)
                .await
                .map_err(|e| self.report_chain(e))?;
            let contestants = normalize_contestants(raw);
            check_vote_sum(&poll, &contestants);
            results.push((poll, contestants));
        }
        Ok(results)
    }

    fn validate_params(&self, params: &PollParams) -> Result<(), AppError> {
        if params.image.trim().is_empty()
            || params.title.trim().is_empty()
            || params.description.trim().is_empty()
            || params.starts_at == 0
            || params.ends_at == 0
        {
            return Err(self.reject("Todos los campos son requeridos"));
        }
        if params.ends_at <= params.starts_at {
            return Err(self.reject("La fecha de cierre debe ser posterior al inicio"));
        }
        Ok(())
    }

    fn require_wallet(&self) -> Result<(), AppError> {
        if self.store.is_connected() {
            Ok(())
        } else {
            Err(self.reject(CONNECT_FIRST_TEXT))
        }
    }

    fn reject(&self, message: &str) -> AppError {
        self.notifier.notify(Notice::Error(message.to_string()));
        AppError::Validation(message.to_string())
    }

    fn report_chain(&self, error: ChainError) -> AppError {
        let message = match &error {
            ChainError::WalletUnavailable(_) => INSTALL_TEXT,
            _ => ERROR_TEXT,
        };
        error!(%error, "chain operation failed");
        self.notifier.notify(Notice::Error(message.to_string()));
        AppError::Chain(error)
    }

    async fn refresh_polls(&self) -> Result<(), AppError> {
        let raw = self
            .contract
            .get_polls()
            .await
            .map_err(|e| self.report_chain(e))?;
        self.store.set_polls(normalize_polls(raw));
        Ok(())
    }

    async fn refresh_poll(&self, id: u64) -> Result<Poll, AppError> {
        let raw = self
            .contract
            .get_poll(id)
            .await
            .map_err(|e| self.report_chain(e))?;
        let poll = normalize_poll(raw);
        self.store.set_poll(Some(poll.clone()));
        Ok(poll)
    }

    async fn refresh_poll_and_contestants(&self, id: u64) -> Result<(), AppError> {
        let poll = self.refresh_poll(id).await?;
        let raw = self
            .contract
            .get_contestants(id)
            .await
            .map_err(|e| self.report_chain(e))?;
        let contestants = normalize_contestants(raw);
        check_vote_sum(&poll, &contestants);
        self.store.set_contestants(contestants);
        Ok(())
    }
}

/// Compares a poll's vote count with the sum over its contestants. The
/// contract is trusted; a mismatch is only logged.
fn check_vote_sum(poll: &Poll, contestants: &[Contestant]) {
    let sum: u64 = contestants.iter().map(|c| c.votes).sum();
    if sum != poll.votes {
        warn!(
            poll = poll.id,
            poll_votes = poll.votes,
            contestant_votes = sum,
            "poll vote count disagrees with contestant sum"
        );
    }
}
