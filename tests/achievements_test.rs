// ABOUTME: Integration tests for achievement evaluation through the ledger
// ABOUTME: Validates idempotent unlocks and permanence of the unlocked set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use fitness_ledger::ledger::Ledger;
use fitness_ledger::models::NewWorkout;

async fn create_test_ledger() -> Ledger {
    Ledger::connect("memory")
        .await
        .expect("Failed to create test ledger")
}

#[tokio::test]
async fn test_check_is_idempotent_with_unchanged_state() {
    let ledger = create_test_ledger().await;

    ledger
        .add_workout(NewWorkout {
            date: Utc::now(),
            workout_type: "HIIT".into(),
            duration_minutes: 30,
            calories_burned: 300,
            exercises: Vec::new(),
            notes: None,
        })
        .await
        .unwrap();

    // add_workout already ran one evaluation; a fresh one finds nothing new
    let second_pass = ledger.check_achievements().await.unwrap();
    assert!(second_pass.is_empty());

    // and no duplicate entries exist for any id
    let unlocked = ledger.achievements().await.unwrap();
    for achievement in &unlocked {
        let count = unlocked.iter().filter(|a| a.id == achievement.id).count();
        assert_eq!(count, 1, "duplicate unlock for {}", achievement.id);
    }
}

#[tokio::test]
async fn test_direct_unlock_is_idempotent() {
    let ledger = create_test_ledger().await;

    let first = ledger.unlock_achievement("first-workout").await.unwrap();
    assert!(first.is_some());

    let second = ledger.unlock_achievement("first-workout").await.unwrap();
    assert!(second.is_none());

    assert_eq!(ledger.achievements().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_achievement_id_unlocks_nothing() {
    let ledger = create_test_ledger().await;
    let result = ledger.unlock_achievement("not-in-catalog").await.unwrap();
    assert!(result.is_none());
    assert!(ledger.achievements().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unlocks_survive_later_stat_changes() {
    let ledger = create_test_ledger().await;

    // earn the streak-starter unlock with a fake streak
    ledger
        .update_user_stats(fitness_ledger::models::StatsUpdate {
            streak: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    let unlocked = ledger.check_achievements().await.unwrap();
    assert!(unlocked.iter().any(|a| a.id == "streak-starter"));

    // dropping the streak does not remove the unlock
    ledger
        .update_user_stats(fitness_ledger::models::StatsUpdate {
            streak: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();
    ledger.check_achievements().await.unwrap();
    let ids: Vec<String> = ledger
        .achievements()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert!(ids.contains(&"streak-starter".to_string()));
}
