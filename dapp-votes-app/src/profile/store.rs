//! Persistence for wallet-bound profiles.
//!
//! The production store writes one JSON file per wallet address under a
//! configured directory. There is no schema versioning.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::ProfileError;
use dapp_votes_shared::types::Profile;

/// Interface for loading and saving profiles keyed by wallet address.
#[async_trait]
pub trait ProfileStorage: Send + Sync {
    /// Loads the profile stored for `wallet`, or `None` when absent.
    async fn load(&self, wallet: &str) -> Result<Option<Profile>, ProfileError>;

    /// Persists `profile` under its wallet address.
    async fn save(&self, profile: &Profile) -> Result<(), ProfileError>;
}

/// File-backed profile store, one `profile_<wallet>.json` per address.
pub struct FileProfileStore {
    dir: PathBuf,
}

impl FileProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, wallet: &str) -> PathBuf {
        self.dir.join(format!("profile_{}.json", wallet.to_lowercase()))
    }
}

#[async_trait]
impl ProfileStorage for FileProfileStore {
    async fn load(&self, wallet: &str) -> Result<Option<Profile>, ProfileError> {
        match fs::read_to_string(self.path_for(wallet)) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string_pretty(profile)?;
        fs::write(self.path_for(&profile.wallet_address), contents)?;
        Ok(())
    }
}

/// In-memory profile store for tests.
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStorage for MemoryProfileStore {
    async fn load(&self, wallet: &str) -> Result<Option<Profile>, ProfileError> {
        Ok(self
            .profiles
            .read()
            .unwrap()
            .get(&wallet.to_lowercase())
            .cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.wallet_address.to_lowercase(), profile.clone());
        Ok(())
    }
}
