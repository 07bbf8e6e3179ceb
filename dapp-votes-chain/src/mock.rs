//! Mock wallet provider for testing and local development.
//!
//! The mock can be pre-populated with accounts, a chain id, per-selector
//! call responses, and a sequence of receipt lookups. Every request is
//! recorded so tests can assert what did (or did not) reach the provider.
//!
//! # Example
//!
//! ```ignore
//! use dapp_votes_chain::MockWalletProvider;
//!
//! let provider = MockWalletProvider::new()
//!     .with_accounts(vec![account])
//!     .with_chain_id(31337)
//!     .with_call_response(getPollsCall::SELECTOR, encoded);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::RwLock;

use alloy::primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::{
    ChainError, NetworkConfig, ProviderEvent, Result, TxReceipt, WalletProvider,
    UNRECOGNIZED_CHAIN_CODE,
};

/// In-memory wallet provider that returns pre-configured data and records
/// every request by method name.
pub struct MockWalletProvider {
    accounts: RwLock<Vec<Address>>,
    chain_id: RwLock<u64>,
    known_chains: RwLock<HashSet<u64>>,
    call_responses: RwLock<HashMap<[u8; 4], Bytes>>,
    receipts: RwLock<VecDeque<Option<TxReceipt>>>,
    sent: RwLock<Vec<(Address, Bytes)>>,
    requests: RwLock<Vec<String>>,
    next_tx: RwLock<u8>,
    events: broadcast::Sender<ProviderEvent>,
}

impl MockWalletProvider {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            accounts: RwLock::new(Vec::new()),
            chain_id: RwLock::new(31337),
            known_chains: RwLock::new(HashSet::from([31337])),
            call_responses: RwLock::new(HashMap::new()),
            receipts: RwLock::new(VecDeque::new()),
            sent: RwLock::new(Vec::new()),
            requests: RwLock::new(Vec::new()),
            next_tx: RwLock::new(0),
            events,
        }
    }

    pub fn with_accounts(self, accounts: Vec<Address>) -> Self {
        *self.accounts.write().unwrap() = accounts;
        self
    }

    pub fn with_chain_id(self, chain_id: u64) -> Self {
        *self.chain_id.write().unwrap() = chain_id;
        self.known_chains.write().unwrap().insert(chain_id);
        self
    }

    /// Registers the ABI-encoded return data served for calls whose data
    /// starts with `selector`.
    pub fn with_call_response(self, selector: [u8; 4], data: Vec<u8>) -> Self {
        self.call_responses
            .write()
            .unwrap()
            .insert(selector, Bytes::from(data));
        self
    }

    /// Queues the outcome of the next `transaction_receipt` lookup. Queue
    /// `None` first to simulate a pending transaction. When the queue is
    /// empty, lookups resolve to a successful receipt immediately.
    pub fn push_receipt(&self, receipt: Option<TxReceipt>) {
        self.receipts.write().unwrap().push_back(receipt);
    }

    /// Replaces the account set and emits `AccountsChanged`.
    pub fn change_accounts(&self, accounts: Vec<Address>) {
        *self.accounts.write().unwrap() = accounts.clone();
        let _ = self.events.send(ProviderEvent::AccountsChanged(accounts));
    }

    /// Transactions submitted through this provider, in order.
    pub fn sent_transactions(&self) -> Vec<(Address, Bytes)> {
        self.sent.read().unwrap().clone()
    }

    /// Method names of every request made, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }

    /// Chain ids passed to `add_chain`, in order.
    pub fn added_chains(&self) -> Vec<u64> {
        self.requests
            .read()
            .unwrap()
            .iter()
            .filter_map(|r| r.strip_prefix("wallet_addEthereumChain:"))
            .filter_map(|id| id.parse().ok())
            .collect()
    }

    pub fn emit(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }

    fn record(&self, request: String) {
        self.requests.write().unwrap().push(request);
    }
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        self.record("eth_requestAccounts".into());
        Ok(self.accounts.read().unwrap().clone())
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        self.record("eth_accounts".into());
        Ok(self.accounts.read().unwrap().clone())
    }

    async fn chain_id(&self) -> Result<u64> {
        self.record("eth_chainId".into());
        Ok(*self.chain_id.read().unwrap())
    }

    async fn call(&self, _to: Address, data: Bytes) -> Result<Bytes> {
        self.record("eth_call".into());
        let selector: [u8; 4] = data
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .unwrap_or_default();
        self.call_responses
            .read()
            .unwrap()
            .get(&selector)
            .cloned()
            .ok_or(ChainError::Rpc {
                code: -32000,
                message: "execution reverted".to_string(),
            })
    }

    async fn send_transaction(&self, _from: Address, to: Address, data: Bytes) -> Result<TxHash> {
        self.record("eth_sendTransaction".into());
        self.sent.write().unwrap().push((to, data));
        let mut next = self.next_tx.write().unwrap();
        *next += 1;
        Ok(TxHash::with_last_byte(*next))
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TxReceipt>> {
        self.record("eth_getTransactionReceipt".into());
        match self.receipts.write().unwrap().pop_front() {
            Some(queued) => Ok(queued),
            None => Ok(Some(TxReceipt {
                tx_hash: hash,
                block_number: 1,
                status: true,
            })),
        }
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<()> {
        self.record(format!("wallet_switchEthereumChain:{chain_id}"));
        if !self.known_chains.read().unwrap().contains(&chain_id) {
            return Err(ChainError::Rpc {
                code: UNRECOGNIZED_CHAIN_CODE,
                message: format!("Unrecognized chain ID 0x{chain_id:x}"),
            });
        }
        *self.chain_id.write().unwrap() = chain_id;
        let _ = self.events.send(ProviderEvent::ChainChanged(chain_id));
        Ok(())
    }

    async fn add_chain(&self, network: &NetworkConfig) -> Result<()> {
        self.record(format!("wallet_addEthereumChain:{}", network.chain_id));
        self.known_chains.write().unwrap().insert(network.chain_id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}
