//! Chain access layer for the voting application.
//!
//! This crate provides:
//! - [`WalletProvider`] trait abstracting the wallet JSON-RPC surface
//! - [`HttpWalletProvider`] production client speaking JSON-RPC 2.0 to a node
//! - [`MockWalletProvider`] mock provider for testing with pre-configured
//!   accounts, call responses, and receipt sequences
//! - [`VotesContract`] typed client for the deployed DappVotes contract
//! - normalization from raw ABI structs into application records
//! - [`NetworkRegistry`] with the supported networks and the switch-or-add
//!   flow
//!
//! ## Usage
//!
//! ```ignore
//! use dapp_votes_chain::{HttpWalletProvider, VotesContract};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(HttpWalletProvider::new("http://127.0.0.1:8545"));
//! let contract = VotesContract::new(provider, address);
//! let polls = dapp_votes_chain::normalize_polls(contract.get_polls().await?);
//! ```

pub mod abi;
mod contract;
mod mock;
mod networks;
mod normalize;
mod provider;

pub use contract::VotesContract;
pub use mock::MockWalletProvider;
pub use networks::{NativeCurrency, NetworkConfig, NetworkRegistry, DEFAULT_NETWORK};
pub use normalize::{normalize_contestants, normalize_poll, normalize_polls};
pub use provider::HttpWalletProvider;

pub use alloy::primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Provider error code for a chain the wallet does not know about yet.
/// Receiving it from `wallet_switchEthereumChain` means the chain must be
/// added first (EIP-3085).
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("wallet unavailable: {0}")]
    WalletUnavailable(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error("abi decode error: {0}")]
    Decode(#[from] alloy::sol_types::Error),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("malformed rpc response: {0}")]
    MalformedResponse(String),
}

impl ChainError {
    /// True when the provider rejected a chain switch because the chain has
    /// not been added to the wallet (code 4902).
    pub fn is_unrecognized_chain(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == UNRECOGNIZED_CHAIN_CODE)
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;

/// Events pushed by a wallet provider.
#[derive(Debug, Clone)]
pub enum ProviderEvent {
    /// The active account set changed; the first entry is the active account.
    AccountsChanged(Vec<Address>),
    /// The active chain changed to the given chain id.
    ChainChanged(u64),
}

/// A mined transaction receipt, reduced to the fields this layer acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
    /// False means the transaction reverted.
    pub status: bool,
}

/// Trait over the wallet/provider JSON-RPC surface.
///
/// This abstracts the injected-wallet interface so the contract client and
/// the application layer can be exercised against [`MockWalletProvider`]
/// without a node.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Requests access to the wallet's accounts (eth_requestAccounts).
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// Returns the accounts currently exposed by the wallet (eth_accounts).
    async fn accounts(&self) -> Result<Vec<Address>>;

    /// Returns the active chain id (eth_chainId).
    async fn chain_id(&self) -> Result<u64>;

    /// Executes a read-only contract call (eth_call).
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;

    /// Submits a transaction signed by `from` (eth_sendTransaction).
    async fn send_transaction(&self, from: Address, to: Address, data: Bytes) -> Result<TxHash>;

    /// Fetches the receipt for `hash`, or `None` while the transaction is
    /// still pending (eth_getTransactionReceipt).
    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TxReceipt>>;

    /// Asks the wallet to switch to `chain_id` (wallet_switchEthereumChain).
    async fn switch_chain(&self, chain_id: u64) -> Result<()>;

    /// Asks the wallet to add `network` (wallet_addEthereumChain).
    async fn add_chain(&self, network: &NetworkConfig) -> Result<()>;

    /// Subscribes to account and chain change events.
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}
