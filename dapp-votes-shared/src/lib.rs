//! # Dapp Votes Shared
//! This crate defines shared data structures and types used across the voting
//! application. It includes common definitions for polls, contestants, poll
//! write parameters, and wallet-bound profiles.
pub mod types;
