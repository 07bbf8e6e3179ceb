mod contestant;
mod modal;
mod poll;
mod profile;

pub use contestant::Contestant;
pub use modal::ModalVisibility;
pub use poll::{Poll, PollParams, PollWindow};
pub use profile::{KycStatus, Profile};
