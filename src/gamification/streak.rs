// ABOUTME: Consecutive-day workout streak computation
// ABOUTME: Walks backward from today over calendar days with at least one workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! Streak derivation
//!
//! A streak is the count of consecutive calendar days, walking backward
//! from today, with at least one logged workout. A day without a workout
//! ends the walk. Today itself gets a one-day grace: if the most recent
//! workout was yesterday, the chain still counts from yesterday — logging
//! nothing *yet* today does not zero an intact streak.

use chrono::{DateTime, Days, NaiveDate, Utc};

/// Compute the current streak from workout timestamps.
///
/// Timestamps are normalized to calendar days. Days newer than the walk
/// cursor (future-dated records, or a second workout on an already-counted
/// day) are skipped; the first day older than the cursor ends the walk.
#[must_use]
pub fn current_streak(workout_dates: &[DateTime<Utc>], today: NaiveDate) -> u32 {
    if workout_dates.is_empty() {
        return 0;
    }

    let mut days: Vec<NaiveDate> = workout_dates.iter().map(|d| d.date_naive()).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut cursor = today;

    // One-day grace: anchor on yesterday when today has no workout yet.
    let yesterday = today.checked_sub_days(Days::new(1));
    if let Some(most_recent) = days.iter().find(|day| **day <= today) {
        if Some(*most_recent) == yesterday {
            cursor = *most_recent;
        }
    }

    let mut streak = 0;
    for day in days {
        if day == cursor {
            streak += 1;
            match cursor.checked_sub_days(Days::new(1)) {
                Some(prev) => cursor = prev,
                None => break,
            }
        } else if day < cursor {
            break;
        }
        // day > cursor: skip without breaking the walk
    }

    streak
}
