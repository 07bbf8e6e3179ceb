//! JSON-RPC 2.0 wallet provider backed by reqwest.

use std::sync::atomic::{AtomicU64, Ordering};

use alloy::primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::broadcast;

use crate::{
    ChainError, NetworkConfig, ProviderEvent, Result, TxReceipt, WalletProvider,
};

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RawReceipt {
    #[serde(rename = "transactionHash")]
    transaction_hash: String,
    #[serde(rename = "blockNumber")]
    block_number: String,
    status: String,
}

/// Production wallet provider speaking JSON-RPC 2.0 to a node endpoint.
///
/// Read paths work with no accounts at all (the read-only fallback); write
/// paths rely on accounts the node exposes and has unlocked. An HTTP node
/// pushes no account or chain events, so [`WalletProvider::subscribe`]
/// yields a receiver that never fires.
pub struct HttpWalletProvider {
    url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
    events: broadcast::Sender<ProviderEvent>,
}

impl HttpWalletProvider {
    pub fn new(url: &str) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
            events,
        }
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
            "method": method,
            "params": params,
        });
        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(ChainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        Ok(response.result)
    }
}

fn parse_address(value: &Value) -> Result<Address> {
    let text = value
        .as_str()
        .ok_or_else(|| ChainError::MalformedResponse("address is not a string".into()))?;
    text.parse()
        .map_err(|_| ChainError::InvalidAddress(text.to_string()))
}

fn parse_quantity(text: &str) -> Result<u64> {
    u64::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|_| ChainError::MalformedResponse(format!("bad quantity: {text}")))
}

fn parse_accounts(value: Value) -> Result<Vec<Address>> {
    value
        .as_array()
        .ok_or_else(|| ChainError::MalformedResponse("accounts is not an array".into()))?
        .iter()
        .map(parse_address)
        .collect()
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        // A bare node has no consent prompt to raise; exposing its unlocked
        // accounts is the closest analog of eth_requestAccounts.
        self.accounts().await
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        parse_accounts(self.request("eth_accounts", json!([])).await?)
    }

    async fn chain_id(&self) -> Result<u64> {
        let value = self.request("eth_chainId", json!([])).await?;
        let text = value
            .as_str()
            .ok_or_else(|| ChainError::MalformedResponse("chain id is not a string".into()))?;
        parse_quantity(text)
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let value = self
            .request(
                "eth_call",
                json!([{ "to": format!("{to:#x}"), "data": data.to_string() }, "latest"]),
            )
            .await?;
        let text = value
            .as_str()
            .ok_or_else(|| ChainError::MalformedResponse("call result is not a string".into()))?;
        text.parse()
            .map_err(|_| ChainError::MalformedResponse(format!("bad call result: {text}")))
    }

    async fn send_transaction(&self, from: Address, to: Address, data: Bytes) -> Result<TxHash> {
        let value = self
            .request(
                "eth_sendTransaction",
                json!([{
                    "from": format!("{from:#x}"),
                    "to": format!("{to:#x}"),
                    "data": data.to_string(),
                }]),
            )
            .await?;
        let text = value
            .as_str()
            .ok_or_else(|| ChainError::MalformedResponse("tx hash is not a string".into()))?;
        text.parse()
            .map_err(|_| ChainError::MalformedResponse(format!("bad tx hash: {text}")))
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TxReceipt>> {
        let value = self
            .request("eth_getTransactionReceipt", json!([format!("{hash:#x}")]))
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        let raw: RawReceipt = serde_json::from_value(value)
            .map_err(|e| ChainError::MalformedResponse(format!("bad receipt: {e}")))?;
        Ok(Some(TxReceipt {
            tx_hash: raw
                .transaction_hash
                .parse()
                .map_err(|_| ChainError::MalformedResponse("bad receipt hash".into()))?,
            block_number: parse_quantity(&raw.block_number)?,
            status: parse_quantity(&raw.status)? == 1,
        }))
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<()> {
        self.request(
            "wallet_switchEthereumChain",
            json!([{ "chainId": format!("0x{chain_id:x}") }]),
        )
        .await?;
        Ok(())
    }

    async fn add_chain(&self, network: &NetworkConfig) -> Result<()> {
        self.request(
            "wallet_addEthereumChain",
            json!([{
                "chainId": format!("0x{:x}", network.chain_id),
                "chainName": network.name,
                "nativeCurrency": network.native_currency,
                "rpcUrls": [network.rpc_url],
                "blockExplorerUrls": [network.block_explorer],
            }]),
        )
        .await?;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}
