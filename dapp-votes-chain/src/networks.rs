//! Static registry of the supported networks and the switch-or-add flow.
//!
//! Contract addresses for the public networks come from the environment;
//! only the local hardhat deployment has a fixed address. Chains the
//! registry does not know are labeled "unknown" rather than rejected.

use std::env;

use alloy::primitives::Address;
use serde::Serialize;
use tracing::warn;

use crate::{Result, WalletProvider};

/// Network used when no selection has been made.
pub const DEFAULT_NETWORK: &str = "hardhat";

/// Address the local hardhat node deploys the contract to.
const HARDHAT_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

#[derive(Debug, Clone, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    fn eth() -> Self {
        Self {
            name: "Ethereum".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub block_explorer: String,
    pub native_currency: NativeCurrency,
    pub contract_address: Option<Address>,
}

/// The five supported networks, keyed by short name and ordered as they are
/// presented to the user.
pub struct NetworkRegistry {
    networks: Vec<(&'static str, NetworkConfig)>,
}

fn env_address(key: &str) -> Option<Address> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(address) => Some(address),
        Err(_) => {
            warn!(%key, "ignoring unparseable contract address");
            None
        }
    }
}

impl NetworkRegistry {
    /// Builds the registry, sourcing contract addresses and the Infura
    /// project id from the environment.
    pub fn from_env() -> Self {
        let infura = env::var("INFURA_PROJECT_ID").unwrap_or_default();
        let networks = vec![
            (
                "hardhat",
                NetworkConfig {
                    chain_id: 31337,
                    name: "Hardhat Local".to_string(),
                    rpc_url: "http://127.0.0.1:8545".to_string(),
                    block_explorer: "http://localhost:8545".to_string(),
                    native_currency: NativeCurrency::eth(),
                    contract_address: HARDHAT_CONTRACT.parse().ok(),
                },
            ),
            (
                "base",
                NetworkConfig {
                    chain_id: 8453,
                    name: "Base".to_string(),
                    rpc_url: "https://mainnet.base.org".to_string(),
                    block_explorer: "https://basescan.org".to_string(),
                    native_currency: NativeCurrency::eth(),
                    contract_address: env_address("BASE_CONTRACT_ADDRESS"),
                },
            ),
            (
                "baseSepolia",
                NetworkConfig {
                    chain_id: 84532,
                    name: "Base Sepolia".to_string(),
                    rpc_url: "https://sepolia.base.org".to_string(),
                    block_explorer: "https://sepolia.basescan.org".to_string(),
                    native_currency: NativeCurrency::eth(),
                    contract_address: env_address("BASE_SEPOLIA_CONTRACT_ADDRESS"),
                },
            ),
            (
                "ethereum",
                NetworkConfig {
                    chain_id: 1,
                    name: "Ethereum".to_string(),
                    rpc_url: format!("https://mainnet.infura.io/v3/{infura}"),
                    block_explorer: "https://etherscan.io".to_string(),
                    native_currency: NativeCurrency::eth(),
                    contract_address: env_address("ETH_CONTRACT_ADDRESS"),
                },
            ),
            (
                "sepolia",
                NetworkConfig {
                    chain_id: 11155111,
                    name: "Sepolia".to_string(),
                    rpc_url: format!("https://sepolia.infura.io/v3/{infura}"),
                    block_explorer: "https://sepolia.etherscan.io".to_string(),
                    native_currency: NativeCurrency::eth(),
                    contract_address: env_address("SEPOLIA_CONTRACT_ADDRESS"),
                },
            ),
        ];
        Self { networks }
    }

    /// Network selected by the `DEFAULT_NETWORK` environment variable, or
    /// hardhat.
    pub fn default_network(&self) -> &NetworkConfig {
        let name = env::var("DEFAULT_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string());
        self.get(&name)
    }

    pub fn find(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, config)| config)
    }

    /// Looks up a network by name, falling back to hardhat when the name is
    /// not registered.
    pub fn get(&self, name: &str) -> &NetworkConfig {
        self.find(name).unwrap_or_else(|| {
            warn!(network = name, "network not found, falling back to hardhat");
            &self.networks[0].1
        })
    }

    pub fn by_chain_id(&self, chain_id: u64) -> Option<(&'static str, &NetworkConfig)> {
        self.networks
            .iter()
            .find(|(_, config)| config.chain_id == chain_id)
            .map(|(key, config)| (*key, config))
    }

    /// Short name for `chain_id`, or "unknown" for unregistered chains.
    pub fn name_for_chain(&self, chain_id: u64) -> &'static str {
        self.by_chain_id(chain_id)
            .map(|(key, _)| key)
            .unwrap_or("unknown")
    }

    /// Iterates the registry in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &NetworkConfig)> {
        self.networks.iter().map(|(key, config)| (*key, config))
    }

    /// Asks the wallet to switch to the named network, adding it first when
    /// the wallet reports it does not know the chain (code 4902).
    pub async fn switch_to(&self, provider: &dyn WalletProvider, name: &str) -> Result<()> {
        let config = self.get(name);
        match provider.switch_chain(config.chain_id).await {
            Err(error) if error.is_unrecognized_chain() => provider.add_chain(config).await,
            other => other,
        }
    }
}
