//! Rank resolution and grade aggregation
//!
//! The grade of a run is the sum, over every fault with ground truth, of the
//! reward earned by the best-ranked correct entry in that fault's submission
//! list. The reward schedule is the caller-supplied grade gradient, indexed
//! by rank; its length is the scoring cutoff.

use std::collections::BTreeMap;

use crate::fault::{Answer, FaultId, Submission};

/// Default reward schedule: a match at rank 0 earns 100 points, rank 1 earns 20.
pub const DEFAULT_GRADIENT: [u32; 2] = [100, 20];

/// Position of the first correct entry in a ranked submission list.
///
/// Returns `None` when the list is empty or nothing matches. The scan stops at
/// the first match, so ties are resolved by submission order.
pub fn rank_of(ranked: &[Submission], answer: &Answer) -> Option<usize> {
    ranked.iter().position(|entry| entry.is_correct(answer))
}

/// Sum the reward for every fault present in both maps.
///
/// Faults missing from `results` contribute 0; so does a correct entry ranked
/// at or beyond the gradient length. Faults present only in `results` are
/// ignored entirely.
pub fn judge(
    answers: &BTreeMap<FaultId, Answer>,
    results: &BTreeMap<FaultId, Vec<Submission>>,
    gradient: &[u32],
) -> u64 {
    let mut grade = 0u64;
    for (fault_id, answer) in answers {
        let Some(ranked) = results.get(fault_id) else {
            continue;
        };
        if let Some(rank) = rank_of(ranked, answer) {
            if let Some(points) = gradient.get(rank) {
                grade += u64::from(*points);
            }
        }
    }
    grade
}
