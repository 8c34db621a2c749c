//! Saturation and decay curves, all bounded to [0, 1]

/// `value / max`, clamped to [0, 1].
pub fn saturating_ratio(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// Linear decay from 1 at `elapsed = 0` to 0 at `elapsed >= window`.
///
/// Negative elapsed time (clock skew) reads as fully fresh.
pub fn linear_decay(elapsed: f64, window: f64) -> f64 {
    if window <= 0.0 {
        return 0.0;
    }
    (1.0 - elapsed / window).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_ratio() {
        assert_eq!(saturating_ratio(50.0, 100.0), 0.5);
        assert_eq!(saturating_ratio(250.0, 100.0), 1.0);
        assert_eq!(saturating_ratio(-1.0, 100.0), 0.0);
        assert_eq!(saturating_ratio(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_linear_decay() {
        assert_eq!(linear_decay(0.0, 30.0), 1.0);
        assert_eq!(linear_decay(15.0, 30.0), 0.5);
        assert_eq!(linear_decay(45.0, 30.0), 0.0);
        assert_eq!(linear_decay(-3.0, 30.0), 1.0);
    }
}
