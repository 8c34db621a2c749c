//! Deterministic top-k selection

use std::cmp::Ordering;

/// Anything that can be ranked: a score plus a tie-break key
pub trait Ranked {
    type Key: Ord;

    fn score(&self) -> f64;

    fn key(&self) -> &Self::Key;
}

/// A candidate key with its score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored<K> {
    pub key: K,
    pub score: f64,
}

impl<K> Scored<K> {
    pub fn new(key: K, score: f64) -> Self {
        Self { key, score }
    }
}

impl<K: Ord> Ranked for Scored<K> {
    type Key = K;

    fn score(&self) -> f64 {
        self.score
    }

    fn key(&self) -> &K {
        &self.key
    }
}

/// Sort descending by score, break ties by key ascending, keep `limit`.
///
/// The key tie-break makes results independent of the order candidates
/// were produced in.
pub fn rank_top_k<T: Ranked>(mut candidates: Vec<T>, limit: usize) -> Vec<T> {
    candidates.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key().cmp(b.key()))
    });
    candidates.truncate(limit);
    candidates
}
