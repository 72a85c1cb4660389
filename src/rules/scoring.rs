//! Score calculation.
//!
//! A move scores `points_per_dot` for each cleared dot. A loop multiplies
//! that by `loop_multiplier`. With default scoring a plain move earns
//! `|cleared|` and a loop earns `2 × |cleared|`. Arithmetic saturates at
//! `u64::MAX`.

use crate::core::ScoringConfig;

/// Score increment for clearing `cleared` dots.
#[must_use]
pub fn score_increment(scoring: &ScoringConfig, cleared: usize, is_loop: bool) -> u64 {
    let base = (cleared as u64).saturating_mul(scoring.points_per_dot);
    if is_loop {
        base.saturating_mul(scoring.loop_multiplier)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringConfig::default();
        assert_eq!(score_increment(&scoring, 3, false), 3);
        assert_eq!(score_increment(&scoring, 9, true), 18);
        assert_eq!(score_increment(&scoring, 0, false), 0);
    }

    #[test]
    fn test_arcade_scoring() {
        let scoring = ScoringConfig::arcade();
        assert_eq!(score_increment(&scoring, 4, false), 40);
        assert_eq!(score_increment(&scoring, 4, true), 80);
    }

    #[test]
    fn test_huge_scoring_saturates() {
        let scoring = ScoringConfig {
            points_per_dot: u64::MAX / 2,
            loop_multiplier: 2,
        };
        assert_eq!(score_increment(&scoring, 3, false), u64::MAX);
        assert_eq!(score_increment(&scoring, 2, true), u64::MAX);
    }
}
