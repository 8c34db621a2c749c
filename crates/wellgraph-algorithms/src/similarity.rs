//! Attribute similarity measures used for candidate scoring

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Denominator floor for [`level_similarity`].
///
/// Levels are normalized by `max(a, b, LEVEL_NORMALIZATION_FLOOR)` so that
/// small levels (1 vs 2) do not read as a 50% mismatch.
pub const LEVEL_NORMALIZATION_FLOOR: f64 = 10.0;

/// Jaccard index `|A ∩ B| / |A ∪ B|`, 0 when both sets are empty.
pub fn jaccard<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// `1 - |a - b| / max(a, b, LEVEL_NORMALIZATION_FLOOR)`
pub fn level_similarity(a: f64, b: f64) -> f64 {
    let denom = a.max(b).max(LEVEL_NORMALIZATION_FLOOR);
    1.0 - (a - b).abs() / denom
}

/// Number of elements of `items` present in `set`.
pub fn overlap_count<'a, T, S, I>(items: I, set: &HashSet<T, S>) -> usize
where
    T: Eq + Hash + 'a,
    S: BuildHasher,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(|item| set.contains(*item)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&'static str]) -> HashSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_jaccard() {
        let a = set(&["fitness", "nutrition"]);
        let b = set(&["fitness", "sports"]);
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard(&a, &set(&["yoga"])), 0.0);
    }

    #[test]
    fn test_level_similarity_floor() {
        assert!((level_similarity(5.0, 3.0) - 0.8).abs() < 1e-12);
        assert_eq!(level_similarity(0.0, 10.0), 0.0);
        // Above the floor the larger level normalizes
        assert!((level_similarity(20.0, 10.0) - 0.5).abs() < 1e-12);
        assert_eq!(level_similarity(7.0, 7.0), 1.0);
    }

    #[test]
    fn test_overlap_count() {
        let group = set(&["yoga", "meditation", "sleep"]);
        let user = ["yoga", "sleep", "running"];
        assert_eq!(overlap_count(user.iter(), &group), 2);
    }
}
