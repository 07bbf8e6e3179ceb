//! Central application state store.
//!
//! Holds the wallet session, the current user's profile, the poll and
//! contestant caches, and the modal visibility flags. All access goes
//! through the explicit read/write methods here; nothing else mutates this
//! state.

use std::sync::RwLock;

use serde::Serialize;

use dapp_votes_shared::types::{Contestant, ModalVisibility, Poll, Profile};

/// Modal visibility flags tracked for the UI.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Modals {
    pub create: ModalVisibility,
    pub update: ModalVisibility,
    pub delete: ModalVisibility,
    pub contest: ModalVisibility,
}

/// Which modal a store operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Create,
    Update,
    Delete,
    Contest,
}

#[derive(Debug, Default)]
struct State {
    wallet: String,
    current_user: Option<Profile>,
    polls: Vec<Poll>,
    poll: Option<Poll>,
    contestants: Vec<Contestant>,
    modals: Modals,
}

/// Lock-guarded application state with defined read and write access points.
#[derive(Default)]
pub struct AppStore {
    state: RwLock<State>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active wallet address, lower-cased. Empty means disconnected.
    pub fn wallet(&self) -> String {
        self.state.read().unwrap().wallet.clone()
    }

    pub fn set_wallet(&self, wallet: &str) {
        self.state.write().unwrap().wallet = wallet.to_lowercase();
    }

    pub fn is_connected(&self) -> bool {
        !self.state.read().unwrap().wallet.is_empty()
    }

    pub fn current_user(&self) -> Option<Profile> {
        self.state.read().unwrap().current_user.clone()
    }

    pub fn set_current_user(&self, user: Option<Profile>) {
        self.state.write().unwrap().current_user = user;
    }

    pub fn polls(&self) -> Vec<Poll> {
        self.state.read().unwrap().polls.clone()
    }

    pub fn set_polls(&self, polls: Vec<Poll>) {
        self.state.write().unwrap().polls = polls;
    }

    pub fn poll(&self) -> Option<Poll> {
        self.state.read().unwrap().poll.clone()
    }

    pub fn set_poll(&self, poll: Option<Poll>) {
        self.state.write().unwrap().poll = poll;
    }

    pub fn contestants(&self) -> Vec<Contestant> {
        self.state.read().unwrap().contestants.clone()
    }

    pub fn set_contestants(&self, contestants: Vec<Contestant>) {
        self.state.write().unwrap().contestants = contestants;
    }

    pub fn modals(&self) -> Modals {
        self.state.read().unwrap().modals
    }

    pub fn open_modal(&self, modal: Modal) {
        self.set_modal(modal, ModalVisibility::Visible);
    }

    pub fn close_modal(&self, modal: Modal) {
        self.set_modal(modal, ModalVisibility::Hidden);
    }

    fn set_modal(&self, modal: Modal, visibility: ModalVisibility) {
        let mut state = self.state.write().unwrap();
        let slot = match modal {
            Modal::Create => &mut state.modals.create,
            Modal::Update => &mut state.modals.update,
            Modal::Delete => &mut state.modals.delete,
            Modal::Contest => &mut state.modals.contest,
        };
        *slot = visibility;
    }

    /// Clears chain-derived state and closes every modal. The wallet session
    /// and current user are untouched; they are not chain-derived.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap();
        state.polls.clear();
        state.poll = None;
        state.contestants.clear();
        state.modals = Modals::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(id: u64) -> Poll {
        Poll {
            id,
            image: String::new(),
            title: "t".into(),
            description: "d".into(),
            votes: 0,
            contestants: 0,
            deleted: false,
            director: "0xabc".into(),
            starts_at: 1,
            ends_at: 2,
            timestamp: 3,
            voters: vec![],
            avatars: vec![],
        }
    }

    #[test]
    fn wallet_is_stored_lowercased() {
        let store = AppStore::new();
        assert!(!store.is_connected());
        store.set_wallet("0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        assert_eq!(store.wallet(), "0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
        assert!(store.is_connected());
        store.set_wallet("");
        assert!(!store.is_connected());
    }

    #[test]
    fn modals_toggle_independently() {
        let store = AppStore::new();
        store.open_modal(Modal::Contest);
        assert!(store.modals().contest.is_visible());
        assert!(!store.modals().create.is_visible());
        store.close_modal(Modal::Contest);
        assert!(!store.modals().contest.is_visible());
    }

    #[test]
    fn reset_clears_chain_state_but_keeps_session() {
        let store = AppStore::new();
        store.set_wallet("0xabc");
        store.set_polls(vec![poll(1)]);
        store.set_poll(Some(poll(1)));
        store.open_modal(Modal::Create);

        store.reset();

        assert!(store.polls().is_empty());
        assert!(store.poll().is_none());
        assert!(!store.modals().create.is_visible());
        assert_eq!(store.wallet(), "0xabc");
    }
}
