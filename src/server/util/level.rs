//! Experience point leveling curve.
//!
//! Each level costs 10% more experience than the one before it, starting at 100
//! experience points for the first level.

/// Experience required to advance from level 0 to level 1.
const BASE: f64 = 100.0;

/// Growth factor applied to the requirement of every subsequent level.
const MULTIPLIER: f64 = 1.1;

/// A player's current level and the fraction of the way towards the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    /// Completed levels.
    pub level: u32,
    /// Progress towards the next level, in `[0, 1)` for non-negative input.
    pub progress_to_next: f64,
}

impl LevelProgress {
    /// Progress towards the next level as a percentage string with three decimals.
    pub fn percent_to_next(&self) -> String {
        format!("{:.3}", self.progress_to_next * 100.0)
    }
}

/// Experience needed to complete `level`.
fn threshold(level: u32) -> f64 {
    BASE * MULTIPLIER.powi(level as i32)
}

/// Computes the level reached with the given amount of experience.
///
/// Thresholds are subtracted from the remaining stock while the stock is strictly
/// greater than the next threshold, so a stock that exactly matches a threshold does
/// not level up. The remaining stock is divided by the next threshold plus one.
///
/// # Arguments
/// - `experience_points` - Total experience, `None` when the backend omitted it
///
/// # Returns
/// - `LevelProgress` - Level 0 with no progress if the input is absent or not finite
pub fn level_of(experience_points: Option<f64>) -> LevelProgress {
    let Some(mut stock) = experience_points.filter(|xp| xp.is_finite()) else {
        return LevelProgress {
            level: 0,
            progress_to_next: 0.0,
        };
    };

    let mut level = 0;
    while stock > threshold(level) {
        stock -= threshold(level);
        level += 1;
    }

    LevelProgress {
        level,
        progress_to_next: stock / (threshold(level) + 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that absent experience maps to level zero.
    ///
    /// Expected: level 0 with no progress
    #[test]
    fn absent_experience_is_level_zero() {
        assert_eq!(
            level_of(None),
            LevelProgress {
                level: 0,
                progress_to_next: 0.0
            }
        );
    }

    /// Tests that non-finite experience maps to level zero.
    ///
    /// Expected: level 0 with no progress for NaN and infinity
    #[test]
    fn non_finite_experience_is_level_zero() {
        for xp in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let progress = level_of(Some(xp));
            assert_eq!(progress.level, 0);
            assert_eq!(progress.progress_to_next, 0.0);
        }
    }

    /// Tests the zero experience case.
    ///
    /// Expected: level 0 with no progress
    #[test]
    fn zero_experience_is_level_zero() {
        let progress = level_of(Some(0.0));
        assert_eq!(progress.level, 0);
        assert_eq!(progress.progress_to_next, 0.0);
    }

    /// Tests the exact threshold boundary of the first level.
    ///
    /// A stock equal to the threshold does not level up.
    ///
    /// Expected: level 0 at 100 experience, level 1 at 101 experience
    #[test]
    fn threshold_boundary_requires_strictly_more_experience() {
        let at_threshold = level_of(Some(100.0));
        assert_eq!(at_threshold.level, 0);
        assert!((at_threshold.progress_to_next - 100.0 / 101.0).abs() < 1e-12);

        let past_threshold = level_of(Some(101.0));
        assert_eq!(past_threshold.level, 1);
        assert!((past_threshold.progress_to_next - 1.0 / 111.0).abs() < 1e-9);
    }

    /// Tests that the second level costs 110 experience.
    ///
    /// Expected: level 2 once more than 210 experience is accumulated
    #[test]
    fn second_level_costs_ten_percent_more() {
        assert_eq!(level_of(Some(210.0)).level, 1);
        assert_eq!(level_of(Some(210.5)).level, 2);
    }

    /// Tests that the level never decreases as experience grows.
    ///
    /// Expected: monotonically non-decreasing levels
    #[test]
    fn level_is_non_decreasing() {
        let mut previous = 0;
        for xp in (0..200_000).step_by(97) {
            let level = level_of(Some(xp as f64)).level;
            assert!(level >= previous, "level dropped at {} experience", xp);
            previous = level;
        }
    }

    /// Tests the percentage formatting used on the stat card.
    ///
    /// Expected: three decimal places
    #[test]
    fn formats_percent_with_three_decimals() {
        let progress = LevelProgress {
            level: 3,
            progress_to_next: 0.123456,
        };
        assert_eq!(progress.percent_to_next(), "12.346");
    }
}
