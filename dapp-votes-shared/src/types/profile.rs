use serde::{Deserialize, Serialize};

/// The verification state of a wallet-bound profile.
///
/// This is a self-reported, client-only status with no cryptographic binding
/// to the wallet.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    NotStarted,
    Pending,
    Verified,
    Rejected,
}

/// A locally persisted profile keyed by wallet address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub kyc_status: KycStatus,
    pub wallet_address: String,
}

impl Profile {
    /// Creates an empty profile for `wallet` with verification not started.
    pub fn new(wallet: &str) -> Self {
        Self {
            wallet_address: wallet.to_string(),
            ..Self::default()
        }
    }

    /// True when both name fields are non-empty after trimming.
    pub fn has_full_name(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }
}
