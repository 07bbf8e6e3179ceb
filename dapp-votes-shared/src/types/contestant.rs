use serde::{Deserialize, Serialize};

/// Represents a normalized contestant within a poll.
///
/// `voter` is the address that registered the contestant; `voters` lists the
/// addresses that voted for them. Both are lower-cased hex strings. A voter
/// appears in at most one contestant's list per poll; that invariant is
/// enforced by the contract, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contestant {
    pub id: u64,
    pub image: String,
    pub name: String,
    pub voter: String,
    pub votes: u64,
    pub voters: Vec<String>,
}
