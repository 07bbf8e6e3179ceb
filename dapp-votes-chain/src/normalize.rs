//! Conversion from raw ABI structs into normalized application records.
//!
//! Director and voter addresses are lower-cased so the rest of the
//! application can compare them case-insensitively. Avatars pass through
//! exactly as the contract returned them. Display order is imposed here:
//! polls by descending creation timestamp, contestants by descending vote
//! count. Both sorts are stable, so ties keep the contract return order.

use crate::abi::{ContestantStruct, PollStruct};
use alloy::primitives::Address;
use dapp_votes_shared::types::{Contestant, Poll};

fn lower(address: &Address) -> String {
    format!("{address:#x}")
}

/// Normalizes one raw poll without imposing any ordering.
pub fn normalize_poll(raw: PollStruct) -> Poll {
    Poll {
        id: raw.id.saturating_to(),
        image: raw.image,
        title: raw.title,
        description: raw.description,
        votes: raw.votes.saturating_to(),
        contestants: raw.contestants.saturating_to(),
        deleted: raw.deleted,
        director: lower(&raw.director),
        starts_at: raw.startsAt.saturating_to(),
        ends_at: raw.endsAt.saturating_to(),
        timestamp: raw.timestamp.saturating_to(),
        voters: raw.voters.iter().map(lower).collect(),
        avatars: raw.avatars.iter().map(|a| a.to_string()).collect(),
    }
}

/// Normalizes raw polls and sorts them by descending creation timestamp.
pub fn normalize_polls(raw: Vec<PollStruct>) -> Vec<Poll> {
    let mut polls: Vec<Poll> = raw.into_iter().map(normalize_poll).collect();
    polls.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    polls
}

/// Normalizes raw contestants and sorts them by descending vote count.
pub fn normalize_contestants(raw: Vec<ContestantStruct>) -> Vec<Contestant> {
    let mut contestants: Vec<Contestant> = raw
        .into_iter()
        .map(|c| Contestant {
            id: c.id.saturating_to(),
            image: c.image,
            name: c.name,
            voter: lower(&c.voter),
            votes: c.votes.saturating_to(),
            voters: c.voters.iter().map(lower).collect(),
        })
        .collect();
    contestants.sort_by(|a, b| b.votes.cmp(&a.votes));
    contestants
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::hex::FromHex;
    use alloy::primitives::U256;

    fn director() -> Address {
        Address::from_hex("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap()
    }

    fn voter() -> Address {
        Address::from_hex("0x894A1A70311Cd19A3Ef33A38b18EAb618394D6DD").unwrap()
    }

    fn raw_poll(id: u64, timestamp: u64) -> PollStruct {
        PollStruct {
            id: U256::from(id),
            image: "https://example.org/poll.png".to_string(),
            title: "Elecciones Generales".to_string(),
            description: "Presidencia de Honduras".to_string(),
            votes: U256::from(3),
            contestants: U256::from(2),
            deleted: false,
            director: director(),
            startsAt: U256::from(1_764_547_200_000u64),
            endsAt: U256::from(1_764_633_600_000u64),
            timestamp: U256::from(timestamp),
            voters: vec![voter()],
            avatars: vec![voter()],
        }
    }

    fn raw_contestant(id: u64, votes: u64) -> ContestantStruct {
        ContestantStruct {
            id: U256::from(id),
            image: "https://example.org/candidate.png".to_string(),
            name: "Nasry Asfura".to_string(),
            voter: voter(),
            votes: U256::from(votes),
            voters: vec![director(), voter()],
        }
    }

    #[test]
    fn polls_sort_by_descending_timestamp() {
        let polls = normalize_polls(vec![raw_poll(1, 100), raw_poll(2, 300), raw_poll(3, 200)]);
        let ids: Vec<u64> = polls.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn poll_timestamp_ties_keep_return_order() {
        let polls = normalize_polls(vec![raw_poll(7, 100), raw_poll(8, 100), raw_poll(9, 100)]);
        let ids: Vec<u64> = polls.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn contestants_sort_by_descending_votes() {
        let contestants = normalize_contestants(vec![
            raw_contestant(1, 2),
            raw_contestant(2, 9),
            raw_contestant(3, 5),
        ]);
        let ids: Vec<u64> = contestants.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn contestant_vote_ties_keep_return_order() {
        let contestants = normalize_contestants(vec![
            raw_contestant(4, 5),
            raw_contestant(5, 5),
        ]);
        let ids: Vec<u64> = contestants.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn addresses_are_lowercased_regardless_of_input_casing() {
        let poll = normalize_poll(raw_poll(1, 1));
        assert_eq!(poll.director, "0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
        assert_eq!(
            poll.voters,
            vec!["0x894a1a70311cd19a3ef33a38b18eab618394d6dd".to_string()]
        );

        let contestants = normalize_contestants(vec![raw_contestant(1, 1)]);
        assert_eq!(
            contestants[0].voter,
            "0x894a1a70311cd19a3ef33a38b18eab618394d6dd"
        );
        assert!(contestants[0]
            .voters
            .iter()
            .all(|v| *v == v.to_lowercase()));
    }

    #[test]
    fn avatars_pass_through_unlowered() {
        let poll = normalize_poll(raw_poll(1, 1));
        // Avatars keep the checksummed rendering; only director and voter
        // addresses are normalized.
        assert_eq!(poll.avatars.len(), 1);
        assert_ne!(poll.avatars[0], poll.voters[0]);
        assert_eq!(poll.avatars[0].to_lowercase(), poll.voters[0]);
    }

    #[test]
    fn numeric_fields_narrow_to_u64() {
        let poll = normalize_poll(raw_poll(42, 1_700_000_000_000));
        assert_eq!(poll.id, 42);
        assert_eq!(poll.votes, 3);
        assert_eq!(poll.contestants, 2);
        assert_eq!(poll.timestamp, 1_700_000_000_000);
    }
}
