//! Wallet-bound profiles and the client-only KYC simulation.
//!
//! The status machine runs not_started → pending → verified or rejected.
//! Verification is behind the [`VerifyIdentity`] seam so the bundled
//! auto-approval cannot be mistaken for a real pipeline: it is a stand-in
//! that waits a fixed delay and approves unconditionally, pending
//! integration with an actual identity provider.

mod store;

pub use store::{FileProfileStore, MemoryProfileStore, ProfileStorage};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::errors::ProfileError;
use crate::notifier::{Notice, Notifier};
use dapp_votes_shared::types::{KycStatus, Profile};

/// Strategy deciding the outcome of a KYC attempt for a profile.
#[async_trait]
pub trait VerifyIdentity: Send + Sync {
    async fn verify(&self, profile: &Profile) -> KycStatus;
}

/// Placeholder verification that approves every profile after a fixed
/// delay. Not a real check; swap for an identity-provider-backed
/// implementation before relying on the verified status.
pub struct AutoApproveVerification {
    delay: Duration,
}

impl AutoApproveVerification {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl VerifyIdentity for AutoApproveVerification {
    async fn verify(&self, profile: &Profile) -> KycStatus {
        tokio::time::sleep(self.delay).await;
        info!(wallet = %profile.wallet_address, "auto-approving KYC attempt");
        KycStatus::Verified
    }
}

/// Profile operations: load, edit, and the KYC status machine.
pub struct ProfileService {
    storage: Arc<dyn ProfileStorage>,
    verifier: Arc<dyn VerifyIdentity>,
    notifier: Arc<dyn Notifier>,
}

impl ProfileService {
    pub fn new(
        storage: Arc<dyn ProfileStorage>,
        verifier: Arc<dyn VerifyIdentity>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            storage,
            verifier,
            notifier,
        }
    }

    /// Loads the stored profile for `wallet`, or an empty one.
    pub async fn load_or_default(&self, wallet: &str) -> Result<Profile, ProfileError> {
        Ok(self
            .storage
            .load(wallet)
            .await?
            .unwrap_or_else(|| Profile::new(wallet)))
    }

    /// Updates the name fields of the profile for `wallet`.
    ///
    /// Empty names are rejected before anything is persisted; the KYC status
    /// is preserved across edits.
    pub async fn save_profile(
        &self,
        wallet: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Profile, ProfileError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            let message = "Por favor completa nombre y apellido".to_string();
            self.notifier.notify(Notice::Error(message.clone()));
            return Err(ProfileError::Validation(message));
        }

        let mut profile = self.load_or_default(wallet).await?;
        profile.first_name = first_name.trim().to_string();
        profile.last_name = last_name.trim().to_string();
        self.storage.save(&profile).await?;
        self.notifier
            .notify(Notice::Success("Perfil actualizado exitosamente".to_string()));
        Ok(profile)
    }

    /// Starts a KYC attempt for `wallet` and runs it to completion.
    ///
    /// With empty name fields the attempt is rejected and the stored state
    /// is left untouched. Otherwise the profile moves to pending, the
    /// verification strategy decides the outcome, and the result is
    /// persisted.
    pub async fn start_kyc(&self, wallet: &str) -> Result<Profile, ProfileError> {
        let mut profile = self.load_or_default(wallet).await?;
        if !profile.has_full_name() {
            let message = "Completa tu nombre y apellido antes de iniciar KYC".to_string();
            self.notifier.notify(Notice::Error(message.clone()));
            return Err(ProfileError::Validation(message));
        }

        profile.kyc_status = KycStatus::Pending;
        self.storage.save(&profile).await?;
        self.notifier.notify(Notice::Pending(
            "Proceso KYC iniciado. Verificando documentos...".to_string(),
        ));

        profile.kyc_status = self.verifier.verify(&profile).await;
        self.storage.save(&profile).await?;
        match profile.kyc_status {
            KycStatus::Verified => self
                .notifier
                .notify(Notice::Success("¡KYC completado exitosamente!".to_string())),
            _ => self.notifier.notify(Notice::Error(
                "Verificación rechazada. Contacta soporte.".to_string(),
            )),
        }
        Ok(profile)
    }
}
