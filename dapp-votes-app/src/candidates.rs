//! Candidate image mapping for the results and contest views.

use serde::Serialize;

const NASRY_IMAGE: &str = "/images/NASRY_ASFURA.jpg";
const RIXI_IMAGE: &str = "/images/RIXI_MONCADA.jpg";
const FALLBACK_IMAGE: &str = "/assets/images/question.jpeg";

/// A candidate offered by the contest form.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: &'static str,
    pub image: &'static str,
}

/// Resolves a contestant name to its fixed image path. Matching is
/// case-insensitive and trim-tolerant; unrecognized names resolve to the
/// fallback image.
pub fn get_candidate_image(candidate_name: &str) -> &'static str {
    let normalized = candidate_name.to_lowercase();
    let normalized = normalized.trim();

    if normalized.contains("nasry") || normalized.contains("asfura") {
        return NASRY_IMAGE;
    }
    if normalized.contains("rixi") || normalized.contains("moncada") {
        return RIXI_IMAGE;
    }
    FALLBACK_IMAGE
}

pub fn available_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: "Nasry Asfura",
            image: NASRY_IMAGE,
        },
        Candidate {
            name: "Rixi Moncada",
            image: RIXI_IMAGE,
        },
    ]
}
