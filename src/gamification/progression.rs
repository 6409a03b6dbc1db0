// ABOUTME: XP and level progression curve
// ABOUTME: XP awarded per workout and the square-root level formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! XP/level progression
//!
//! XP is awarded once when a workout is logged and never recomputed:
//! `round(duration × 10 + calories / 2)`. Levels follow a square-root
//! curve, `level = floor(1 + sqrt(xp / 100))`, so each level costs
//! progressively more XP (level 2 at 100 XP, level 3 at 400, level 4
//! at 900, ...).

use crate::constants::progression::{LEVEL_XP_BASE, XP_PER_CALORIE, XP_PER_MINUTE};

/// XP awarded for a workout of the given duration and calorie burn
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn xp_for_workout(duration_minutes: u32, calories_burned: u32) -> i64 {
    let xp = f64::from(duration_minutes) * XP_PER_MINUTE
        + f64::from(calories_burned) * XP_PER_CALORIE;
    xp.round() as i64
}

/// Level derived from lifetime XP; never below 1
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn level_for_xp(xp: i64) -> i32 {
    if xp <= 0 {
        return 1;
    }
    let level = (1.0 + (xp as f64 / LEVEL_XP_BASE).sqrt()).floor() as i32;
    level.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_formula() {
        // 30 min cardio burning 250 kcal: 30*10 + 250/2 = 425
        assert_eq!(xp_for_workout(30, 250), 425);
        assert_eq!(xp_for_workout(0, 0), 0);
        // odd calories round: 45*10 + 333/2 = 450 + 166.5 -> 617 (round half up)
        assert_eq!(xp_for_workout(45, 333), 617);
    }

    #[test]
    fn test_level_curve() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(399), 2);
        assert_eq!(level_for_xp(400), 3);
        assert_eq!(level_for_xp(425), 3);
        assert_eq!(level_for_xp(10_000), 11);
    }

    #[test]
    fn test_level_never_below_one() {
        assert_eq!(level_for_xp(-500), 1);
    }

    #[test]
    fn test_level_invariant_holds_across_accumulation() {
        let mut xp = 0;
        for _ in 0..50 {
            xp += xp_for_workout(45, 400);
            let level = level_for_xp(xp);
            assert!(level >= 1);
            // floor(1 + sqrt(xp/100)) restated directly
            let expected = (1.0 + ((xp as f64) / 100.0).sqrt()).floor() as i32;
            assert_eq!(level, expected);
        }
    }
}
