// ABOUTME: Integration tests for workout logging and stat derivation
// ABOUTME: Validates XP, level, streak, and achievement behavior of add_workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use fitness_ledger::ledger::Ledger;
use fitness_ledger::models::NewWorkout;

async fn create_test_ledger() -> Ledger {
    Ledger::connect("memory")
        .await
        .expect("Failed to create test ledger")
}

fn cardio(days_ago: i64, duration_minutes: u32, calories_burned: u32) -> NewWorkout {
    NewWorkout {
        date: Utc::now() - Duration::days(days_ago),
        workout_type: "Cardio".into(),
        duration_minutes,
        calories_burned,
        exercises: Vec::new(),
        notes: None,
    }
}

#[tokio::test]
async fn test_first_workout_scenario() {
    let ledger = create_test_ledger().await;

    let workout = ledger
        .add_workout(cardio(0, 30, 250))
        .await
        .expect("Failed to log workout");

    // round(30*10 + 250/2) = 425
    assert_eq!(workout.xp_gained, 425);

    let stats = ledger.user_stats().await.unwrap();
    assert_eq!(stats.xp, 425);
    // floor(1 + sqrt(425/100)) = floor(3.06) = 3
    assert_eq!(stats.level, 3);
    assert_eq!(stats.total_workouts, 1);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.calories_burned, 250);
    assert_eq!(stats.last_workout_date, Some(workout.date));

    let achievements = ledger.achievements().await.unwrap();
    let first = achievements
        .iter()
        .find(|a| a.id == "first-workout")
        .expect("first-workout should unlock");
    assert!(Utc::now() - first.unlocked_at < Duration::seconds(10));
}

#[tokio::test]
async fn test_level_matches_xp_curve_after_every_workout() {
    let ledger = create_test_ledger().await;

    for i in 0..12 {
        ledger
            .add_workout(cardio(0, 40 + i, 300))
            .await
            .expect("Failed to log workout");

        let stats = ledger.user_stats().await.unwrap();
        let expected = (1.0 + (stats.xp as f64 / 100.0).sqrt()).floor() as i32;
        assert_eq!(stats.level, expected, "level invariant broke at xp {}", stats.xp);
    }
}

#[tokio::test]
async fn test_stats_never_decrease() {
    let ledger = create_test_ledger().await;

    let mut prev = ledger.user_stats().await.unwrap();
    for _ in 0..5 {
        ledger.add_workout(cardio(0, 25, 180)).await.unwrap();
        let stats = ledger.user_stats().await.unwrap();
        assert!(stats.xp >= prev.xp);
        assert!(stats.total_workouts >= prev.total_workouts);
        assert!(stats.calories_burned >= prev.calories_burned);
        prev = stats;
    }
}

#[tokio::test]
async fn test_streak_over_three_consecutive_days() {
    let ledger = create_test_ledger().await;

    for days_ago in [2, 1, 0] {
        ledger.add_workout(cardio(days_ago, 30, 200)).await.unwrap();
    }

    let stats = ledger.user_stats().await.unwrap();
    assert_eq!(stats.streak, 3);
}

#[tokio::test]
async fn test_streak_stops_at_gap() {
    let ledger = create_test_ledger().await;

    // chain of three, a 2-day gap, then two older workouts
    for days_ago in [6, 5, 2, 1, 0] {
        ledger.add_workout(cardio(days_ago, 30, 200)).await.unwrap();
    }

    let stats = ledger.user_stats().await.unwrap();
    assert_eq!(stats.streak, 3);
}

#[tokio::test]
async fn test_workout_history_is_append_only() {
    let ledger = create_test_ledger().await;

    let first = ledger.add_workout(cardio(1, 30, 200)).await.unwrap();
    let second = ledger.add_workout(cardio(0, 45, 350)).await.unwrap();
    assert_ne!(first.id, second.id);

    let workouts = ledger.workouts().await.unwrap();
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0].id, first.id);
    assert_eq!(workouts[1].id, second.id);
    // xp computed at creation is stored untouched
    assert_eq!(workouts[0].xp_gained, first.xp_gained);
}

#[tokio::test]
async fn test_workout_summary_window() {
    let ledger = create_test_ledger().await;

    ledger.add_workout(cardio(0, 30, 200)).await.unwrap();
    ledger.add_workout(cardio(1, 60, 400)).await.unwrap();
    // outside a 7-day window
    ledger.add_workout(cardio(10, 90, 900)).await.unwrap();

    let summary = ledger.workout_summary(7).await.unwrap();
    assert_eq!(summary.total_workouts, 2);
    assert_eq!(summary.total_duration_minutes, 90);
    assert_eq!(summary.total_calories, 600);
    assert_eq!(summary.avg_calories_per_workout, 300);

    let all = ledger.workout_summary(30).await.unwrap();
    assert_eq!(all.total_workouts, 3);
}

#[tokio::test]
async fn test_workout_count_achievements_unlock_in_sequence() {
    let ledger = create_test_ledger().await;

    for _ in 0..9 {
        ledger.add_workout(cardio(0, 10, 50)).await.unwrap();
    }
    let ids: Vec<String> = ledger
        .achievements()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert!(ids.contains(&"first-workout".to_string()));
    assert!(!ids.contains(&"workout-warrior".to_string()));

    ledger.add_workout(cardio(0, 10, 50)).await.unwrap();
    let ids: Vec<String> = ledger
        .achievements()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert!(ids.contains(&"workout-warrior".to_string()));
}
