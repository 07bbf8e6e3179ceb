//! Typed client for the DappVotes contract.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use alloy::sol_types::SolCall;
use tracing::debug;

use crate::abi::{
    contestCall, createPollCall, deletePollCall, getContestantsCall, getPollCall, getPollsCall,
    updatePollCall, voteCall, ContestantStruct, PollStruct,
};
use crate::{ChainError, Result, TxReceipt, WalletProvider};
use dapp_votes_shared::types::PollParams;

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A signer-bound handle to the deployed contract.
///
/// Write operations submit the transaction from the wallet's first account,
/// then poll for the receipt until one confirmation. There is no retry, no
/// backoff, and no confirmation timeout; a failed transaction requires
/// explicit re-initiation by the caller.
pub struct VotesContract {
    provider: Arc<dyn WalletProvider>,
    address: Address,
    poll_interval: Duration,
}

impl VotesContract {
    pub fn new(provider: Arc<dyn WalletProvider>, address: Address) -> Self {
        Self {
            provider,
            address,
            poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }

    /// Overrides the receipt polling cadence. Tests use a short interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    async fn signer(&self) -> Result<Address> {
        self.provider
            .accounts()
            .await?
            .first()
            .copied()
            .ok_or_else(|| ChainError::WalletUnavailable("no accounts available".to_string()))
    }

    async fn read(&self, data: Vec<u8>) -> Result<alloy::primitives::Bytes> {
        self.provider.call(self.address, data.into()).await
    }

    async fn write(&self, data: Vec<u8>) -> Result<TxReceipt> {
        let from = self.signer().await?;
        let hash = self
            .provider
            .send_transaction(from, self.address, data.into())
            .await?;
        debug!(tx = %hash, "transaction submitted");
        self.confirm(hash).await
    }

    async fn confirm(&self, hash: TxHash) -> Result<TxReceipt> {
        loop {
            if let Some(receipt) = self.provider.transaction_receipt(hash).await? {
                if !receipt.status {
                    return Err(ChainError::Reverted(hash));
                }
                debug!(tx = %hash, block = receipt.block_number, "transaction confirmed");
                return Ok(receipt);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    pub async fn create_poll(&self, params: &PollParams) -> Result<TxReceipt> {
        let call = createPollCall {
            image: params.image.clone(),
            title: params.title.clone(),
            description: params.description.clone(),
            startsAt: U256::from(params.starts_at),
            endsAt: U256::from(params.ends_at),
        };
        self.write(call.abi_encode()).await
    }

    pub async fn update_poll(&self, id: u64, params: &PollParams) -> Result<TxReceipt> {
        let call = updatePollCall {
            id: U256::from(id),
            image: params.image.clone(),
            title: params.title.clone(),
            description: params.description.clone(),
            startsAt: U256::from(params.starts_at),
            endsAt: U256::from(params.ends_at),
        };
        self.write(call.abi_encode()).await
    }

    pub async fn delete_poll(&self, id: u64) -> Result<TxReceipt> {
        self.write(deletePollCall { id: U256::from(id) }.abi_encode())
            .await
    }

    pub async fn contest(&self, id: u64, name: &str, image: &str) -> Result<TxReceipt> {
        let call = contestCall {
            id: U256::from(id),
            name: name.to_string(),
            image: image.to_string(),
        };
        self.write(call.abi_encode()).await
    }

    pub async fn vote(&self, id: u64, cid: u64) -> Result<TxReceipt> {
        let call = voteCall {
            id: U256::from(id),
            cid: U256::from(cid),
        };
        self.write(call.abi_encode()).await
    }

    pub async fn get_poll(&self, id: u64) -> Result<PollStruct> {
        let data = self
            .read(getPollCall { id: U256::from(id) }.abi_encode())
            .await?;
        Ok(getPollCall::abi_decode_returns(&data)?)
    }

    pub async fn get_polls(&self) -> Result<Vec<PollStruct>> {
        let data = self.read(getPollsCall {}.abi_encode()).await?;
        Ok(getPollsCall::abi_decode_returns(&data)?)
    }

    pub async fn get_contestants(&self, id: u64) -> Result<Vec<ContestantStruct>> {
        let data = self
            .read(getContestantsCall { id: U256::from(id) }.abi_encode())
            .await?;
        Ok(getContestantsCall::abi_decode_returns(&data)?)
    }
}
