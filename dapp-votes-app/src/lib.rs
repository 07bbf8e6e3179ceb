//! Dapp Votes Application
//!
//! This crate provides the application layer of the voting system: the
//! central state store, the voting service with its confirm-then-refetch
//! write semantics, the profile/KYC simulation, the wallet session watcher,
//! view composition for the page routes, and the HTTP server.

pub mod candidates;
pub mod config;
pub mod errors;
pub mod notifier;
pub mod profile;
pub mod server;
pub mod service;
pub mod session;
pub mod state;
pub mod utils;
pub mod views;

pub use config::{AppConfig, Dependencies};
pub use errors::{AppError, ProfileError};
