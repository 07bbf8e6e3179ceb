//! Configuration for the voting application.
//! Defines the environment-driven settings and the dependency wiring.
mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use dapp_votes_chain::DEFAULT_NETWORK;

/// Application settings sourced from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Registry key of the network to bind to.
    pub network: String,
    /// Overrides the network's RPC URL when set.
    pub rpc_url: Option<String>,
    pub port: u16,
    pub profile_dir: PathBuf,
    /// Delay the placeholder KYC verification waits before approving.
    pub kyc_delay: Duration,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            network: env::var("DEFAULT_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string()),
            rpc_url: env::var("RPC_URL").ok(),
            port: try_load("PORT", "8080"),
            profile_dir: env::var("PROFILE_DIR")
                .unwrap_or_else(|_| "profiles".to_string())
                .into(),
            kyc_delay: Duration::from_millis(try_load("KYC_DELAY_MS", "3000")),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .unwrap_or_else(|e| panic!("Invalid {key} value: {e}"))
}
