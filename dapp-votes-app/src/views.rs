//! View composition for the page routes.
//!
//! Pure functions from normalized state to the serializable shapes the
//! pages render. No chain access happens here.

use serde::Serialize;

use crate::candidates::get_candidate_image;
use crate::state::{AppStore, Modals};
use crate::utils::{format_date, format_timestamp, truncate};
use dapp_votes_shared::types::{Contestant, Poll, PollWindow};

/// Home page: headline, aggregate figures, and the create-poll modal flag.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: String,
    pub subtitle: String,
    pub total_polls: usize,
    pub total_votes: u64,
    pub wallet: String,
    pub modals: Modals,
}

pub fn home_view(store: &AppStore) -> HomeView {
    let polls = store.polls();
    let active: Vec<&Poll> = polls.iter().filter(|p| !p.deleted).collect();
    HomeView {
        title: "HNDapp - Transparencia Electoral Honduras".to_string(),
        subtitle: "Transparencia total: cada voto es verificable en la blockchain.".to_string(),
        total_polls: active.len(),
        total_votes: active.iter().map(|p| p.votes).sum(),
        wallet: store.wallet(),
        modals: store.modals(),
    }
}

/// One card in the election listing.
#[derive(Debug, Serialize)]
pub struct PollCard {
    pub id: u64,
    pub image: String,
    pub title: String,
    pub description: String,
    pub director: String,
    pub starts_at: String,
    pub ends_at: String,
}

#[derive(Debug, Serialize)]
pub struct ElectionView {
    pub title: String,
    pub subtitle: String,
    pub polls: Vec<PollCard>,
}

pub fn election_view(store: &AppStore) -> ElectionView {
    ElectionView {
        title: "Elecciones 2025".to_string(),
        subtitle: "Participa en las elecciones más transparentes de Honduras. Cada voto cuenta y es verificable en la blockchain.".to_string(),
        polls: store
            .polls()
            .iter()
            .filter(|p| !p.deleted)
            .map(poll_card)
            .collect(),
    }
}

fn poll_card(poll: &Poll) -> PollCard {
    PollCard {
        id: poll.id,
        image: poll.image.clone(),
        title: truncate(&poll.title, 30, 0, 33),
        description: truncate(&poll.description, 104, 0, 107),
        director: truncate(&poll.director, 4, 4, 11),
        starts_at: format_date(poll.starts_at),
        ends_at: format_date(poll.ends_at),
    }
}

/// One contestant's row in a live result card.
#[derive(Debug, Serialize)]
pub struct Standing {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub votes: u64,
    pub percentage: String,
    pub winning: bool,
}

#[derive(Debug, Serialize)]
pub struct PollResult {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub total_votes: u64,
    pub contestant_count: u64,
    pub standings: Vec<Standing>,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub title: String,
    pub subtitle: String,
    pub polls: Vec<PollResult>,
}

pub fn results_view(data: &[(Poll, Vec<Contestant>)]) -> ResultsView {
    ResultsView {
        title: "Resultados en Vivo".to_string(),
        subtitle: "Transparencia total: Observa los resultados en tiempo real de las elecciones de Honduras 2025".to_string(),
        polls: data
            .iter()
            .filter(|(poll, _)| !poll.deleted)
            .map(|(poll, contestants)| poll_result(poll, contestants))
            .collect(),
    }
}

/// Builds one result card. Standings are ordered by descending votes; the
/// leader is flagged as winning only when it actually has votes.
pub fn poll_result(poll: &Poll, contestants: &[Contestant]) -> PollResult {
    let total_votes = poll.votes;
    let mut ordered: Vec<&Contestant> = contestants.iter().collect();
    ordered.sort_by(|a, b| b.votes.cmp(&a.votes));

    let standings = ordered
        .iter()
        .enumerate()
        .map(|(position, contestant)| Standing {
            id: contestant.id,
            name: contestant.name.clone(),
            image: get_candidate_image(&contestant.name).to_string(),
            votes: contestant.votes,
            percentage: percentage(contestant.votes, total_votes),
            winning: position == 0 && contestant.votes > 0,
        })
        .collect();

    PollResult {
        id: poll.id,
        title: poll.title.clone(),
        description: poll.description.clone(),
        total_votes,
        contestant_count: poll.contestants,
        standings,
    }
}

fn percentage(votes: u64, total_votes: u64) -> String {
    if total_votes > 0 {
        format!("{:.1}", votes as f64 * 100.0 / total_votes as f64)
    } else {
        "0".to_string()
    }
}

/// Per-poll detail page.
#[derive(Debug, Serialize)]
pub struct PollDetailView {
    pub poll: Poll,
    pub window: PollWindow,
    pub starts_at: String,
    pub ends_at: String,
    /// Window bounds shaped for datetime form inputs, used to prefill the
    /// update form.
    pub starts_at_input: String,
    pub ends_at_input: String,
    pub contestants: Vec<Standing>,
}

pub fn poll_detail_view(poll: &Poll, contestants: &[Contestant], now_ms: u64) -> PollDetailView {
    let result = poll_result(poll, contestants);
    PollDetailView {
        window: poll.window(now_ms),
        starts_at: format_date(poll.starts_at),
        ends_at: format_date(poll.ends_at),
        starts_at_input: format_timestamp(poll.starts_at),
        ends_at_input: format_timestamp(poll.ends_at),
        contestants: result.standings,
        poll: poll.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(id: u64, votes: u64) -> Poll {
        Poll {
            id,
            image: "ipfs://poll".into(),
            title: "Presidencia de la República de Honduras".into(),
            description: "d".into(),
            votes,
            contestants: 2,
            deleted: false,
            director: "0x894a1a70311cd19a3ef33a38b18eab618394d6dd".into(),
            starts_at: 1_764_547_200_000,
            ends_at: 1_764_633_600_000,
            timestamp: 1_764_000_000_000,
            voters: vec![],
            avatars: vec![],
        }
    }

    fn contestant(id: u64, name: &str, votes: u64) -> Contestant {
        Contestant {
            id,
            image: String::new(),
            name: name.into(),
            voter: "0xabc".into(),
            votes,
            voters: vec![],
        }
    }

    #[test]
    fn percentages_have_one_decimal() {
        let result = poll_result(
            &poll(1, 3),
            &[contestant(1, "Nasry Asfura", 2), contestant(2, "Rixi Moncada", 1)],
        );
        assert_eq!(result.standings[0].percentage, "66.7");
        assert_eq!(result.standings[1].percentage, "33.3");
    }

    #[test]
    fn zero_total_votes_yields_percentage_zero() {
        let result = poll_result(&poll(1, 0), &[contestant(1, "Nasry Asfura", 0)]);
        assert_eq!(result.standings[0].percentage, "0");
        assert!(!result.standings[0].winning);
    }

    #[test]
    fn only_the_leader_with_votes_is_winning() {
        let result = poll_result(
            &poll(1, 5),
            &[contestant(1, "Rixi Moncada", 2), contestant(2, "Nasry Asfura", 3)],
        );
        assert_eq!(result.standings[0].id, 2);
        assert!(result.standings[0].winning);
        assert!(!result.standings[1].winning);
    }

    #[test]
    fn standings_resolve_candidate_images() {
        let result = poll_result(
            &poll(1, 1),
            &[contestant(1, "nasry", 1), contestant(2, "Otra Persona", 0)],
        );
        assert_eq!(result.standings[0].image, "/images/NASRY_ASFURA.jpg");
        assert_eq!(result.standings[1].image, "/assets/images/question.jpeg");
    }

    #[test]
    fn election_view_excludes_deleted_polls_and_truncates() {
        let store = AppStore::new();
        let mut deleted = poll(2, 0);
        deleted.deleted = true;
        store.set_polls(vec![poll(1, 0), deleted]);

        let view = election_view(&store);
        assert_eq!(view.polls.len(), 1);
        assert_eq!(view.polls[0].director, "0x89...d6dd");
        assert_eq!(view.polls[0].title.chars().count(), 33);
        assert_eq!(view.polls[0].starts_at, "Mon, Dec 1, 2025");
    }

    #[test]
    fn results_view_excludes_deleted_polls() {
        let mut deleted = poll(2, 0);
        deleted.deleted = true;
        let view = results_view(&[
            (poll(1, 0), vec![]),
            (deleted, vec![]),
        ]);
        assert_eq!(view.polls.len(), 1);
    }

    #[test]
    fn detail_view_derives_the_window() {
        let subject = poll(1, 0);
        let before = subject.starts_at - 1;
        let during = subject.starts_at + 1;
        let after = subject.ends_at + 1;
        assert_eq!(
            poll_detail_view(&subject, &[], before).window,
            PollWindow::Upcoming
        );
        assert_eq!(
            poll_detail_view(&subject, &[], during).window,
            PollWindow::Open
        );
        assert_eq!(
            poll_detail_view(&subject, &[], after).window,
            PollWindow::Closed
        );
    }

    #[test]
    fn home_view_totals_active_polls() {
        let store = AppStore::new();
        let mut deleted = poll(3, 9);
        deleted.deleted = true;
        store.set_polls(vec![poll(1, 2), poll(2, 3), deleted]);
        store.set_wallet("0xABC");

        let view = home_view(&store);
        assert_eq!(view.total_polls, 2);
        assert_eq!(view.total_votes, 5);
        assert_eq!(view.wallet, "0xabc");
    }
}
