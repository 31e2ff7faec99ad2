//! Cosmetic decoration: UI fields that are random by nature.
//!
//! Kept apart from aggregation and scoring so those stay deterministic. The availability
//! status and the "total profiles analyzed" counter are placeholders, not data.

use uuid::Uuid;

use crate::talent::models::{Candidate, DecoratedCandidate};

pub const STATUSES: &[&str] = &[
    "Open to opportunities",
    "Actively looking",
    "Available for consulting",
    "Open to new challenges",
    "Looking for remote opportunities",
    "Available immediately",
    "Considering opportunities",
];

const TOTAL_ANALYZED_MIN: u32 = 10_000;
const TOTAL_ANALYZED_SPAN: u32 = 50_000;

/// Source of randomness for cosmetic fields.
pub trait Entropy: Send + Sync {
    fn next_u64(&self) -> u64;
}

/// Production entropy: the random bits of a v4 UUID, which the `uuid` crate draws
/// from the OS random source. A stand-in for a general-purpose RNG.
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn next_u64(&self) -> u64 {
        Uuid::new_v4().as_u128() as u64
    }
}

pub fn decorate(candidates: Vec<Candidate>, entropy: &dyn Entropy) -> Vec<DecoratedCandidate> {
    candidates
        .into_iter()
        .map(|candidate| {
            let index = (entropy.next_u64() % STATUSES.len() as u64) as usize;
            DecoratedCandidate {
                candidate,
                status: STATUSES[index].to_string(),
            }
        })
        .collect()
}

/// Placeholder counter in `[10_000, 60_000)`.
pub fn total_analyzed(entropy: &dyn Entropy) -> u32 {
    TOTAL_ANALYZED_MIN + (entropy.next_u64() % TOTAL_ANALYZED_SPAN as u64) as u32
}
