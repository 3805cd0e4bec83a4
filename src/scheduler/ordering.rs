//! Mentor ordering for a single call request.
//!
//! Eligible mentors (matching call type) are tried least-loaded first. Ties
//! between equal loads are settled by a [`TieBreaker`].

use serde::{Deserialize, Serialize};

use crate::models::{CallType, Mentor};

/// How equal-load mentors are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// The mentor declared earliest in the input list wins (stable sort).
    #[default]
    DeclarationOrder,
    /// Deterministic by mentor ID (lexicographic).
    ById,
}

/// Returns indices of mentors offering `call_type`, in the order they should
/// be tried: ascending load, ties settled by `tie_breaker`.
pub fn rank_mentors(mentors: &[Mentor], call_type: CallType, tie_breaker: TieBreaker) -> Vec<usize> {
    let mut eligible: Vec<usize> = mentors
        .iter()
        .enumerate()
        .filter(|(_, m)| m.call_type == call_type)
        .map(|(i, _)| i)
        .collect();

    match tie_breaker {
        // sort_by_key is stable, so input order survives among equal loads
        TieBreaker::DeclarationOrder => eligible.sort_by_key(|&i| mentors[i].load),
        TieBreaker::ById => eligible.sort_by(|&a, &b| {
            mentors[a]
                .load
                .cmp(&mentors[b].load)
                .then_with(|| mentors[a].id.cmp(&mentors[b].id))
        }),
    }

    eligible
}
