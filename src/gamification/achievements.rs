// ABOUTME: Achievement catalog and unlock evaluation
// ABOUTME: Fixed definitions with ordered threshold checks over accumulated stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! Achievement catalog
//!
//! A fixed table of definitions, each with a threshold predicate over the
//! current stats and history sizes. Evaluation is ordered and idempotent:
//! ids already unlocked are skipped, and nothing ever removes an unlock.

use crate::constants::thresholds;
use crate::models::{Rarity, UserStats};

/// A static achievement definition from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
}

/// The full catalog, in evaluation order
pub static CATALOG: [AchievementDef; 10] = [
    AchievementDef {
        id: "first-workout",
        title: "First Steps",
        description: "Complete your first workout",
        icon: "🎯",
        rarity: Rarity::Common,
    },
    AchievementDef {
        id: "workout-warrior",
        title: "Workout Warrior",
        description: "Complete 10 workouts",
        icon: "💪",
        rarity: Rarity::Rare,
    },
    AchievementDef {
        id: "fitness-master",
        title: "Fitness Master",
        description: "Complete 50 workouts",
        icon: "👑",
        rarity: Rarity::Epic,
    },
    AchievementDef {
        id: "streak-starter",
        title: "Streak Starter",
        description: "Maintain a 3-day streak",
        icon: "🔥",
        rarity: Rarity::Common,
    },
    AchievementDef {
        id: "streak-legend",
        title: "Streak Legend",
        description: "Maintain a 7-day streak",
        icon: "⚡",
        rarity: Rarity::Legendary,
    },
    AchievementDef {
        id: "calorie-crusher",
        title: "Calorie Crusher",
        description: "Burn 5000 total calories",
        icon: "🔥",
        rarity: Rarity::Rare,
    },
    AchievementDef {
        id: "nutrition-novice",
        title: "Nutrition Novice",
        description: "Log your first meal",
        icon: "🥗",
        rarity: Rarity::Common,
    },
    AchievementDef {
        id: "meal-planner",
        title: "Meal Planner",
        description: "Log 20 meals",
        icon: "📊",
        rarity: Rarity::Epic,
    },
    AchievementDef {
        id: "level-up",
        title: "Level 5!",
        description: "Reach level 5",
        icon: "⭐",
        rarity: Rarity::Rare,
    },
    AchievementDef {
        id: "xp-master",
        title: "XP Master",
        description: "Earn 10,000 XP",
        icon: "💎",
        rarity: Rarity::Legendary,
    },
];

/// Look up a catalog definition by id
#[must_use]
pub fn find(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|def| def.id == id)
}

/// Evaluate every catalog predicate against the current state.
///
/// Returns the definitions whose predicate holds and whose id is not in
/// `unlocked_ids`, in catalog order. Predicates for already-unlocked ids
/// are not re-evaluated.
#[must_use]
pub fn evaluate(
    stats: &UserStats,
    workout_count: usize,
    meal_count: usize,
    unlocked_ids: &[String],
) -> Vec<&'static AchievementDef> {
    CATALOG
        .iter()
        .filter(|def| !unlocked_ids.iter().any(|id| id == def.id))
        .filter(|def| predicate_holds(def.id, stats, workout_count, meal_count))
        .collect()
}

fn predicate_holds(id: &str, stats: &UserStats, workout_count: usize, meal_count: usize) -> bool {
    match id {
        "first-workout" => workout_count >= thresholds::WORKOUTS_FIRST,
        "workout-warrior" => workout_count >= thresholds::WORKOUTS_WARRIOR,
        "fitness-master" => workout_count >= thresholds::WORKOUTS_MASTER,
        "streak-starter" => stats.streak >= thresholds::STREAK_STARTER,
        "streak-legend" => stats.streak >= thresholds::STREAK_LEGEND,
        "calorie-crusher" => stats.calories_burned >= thresholds::CALORIES_CRUSHER,
        "nutrition-novice" => meal_count >= thresholds::MEALS_NOVICE,
        "meal-planner" => meal_count >= thresholds::MEALS_PLANNER,
        "level-up" => stats.level >= thresholds::LEVEL_UP,
        "xp-master" => stats.xp >= thresholds::XP_MASTER,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(streak: u32, xp: i64, level: i32, calories: i64) -> UserStats {
        UserStats {
            total_workouts: 0,
            streak,
            xp,
            level,
            calories_burned: calories,
            last_workout_date: None,
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, def) in CATALOG.iter().enumerate() {
            assert!(
                !CATALOG[i + 1..].iter().any(|other| other.id == def.id),
                "duplicate id {}",
                def.id
            );
        }
    }

    #[test]
    fn test_first_workout_unlocks_at_one() {
        let stats = stats_with(1, 425, 3, 250);
        let unlocked = evaluate(&stats, 1, 0, &[]);
        let ids: Vec<&str> = unlocked.iter().map(|d| d.id).collect();
        assert!(ids.contains(&"first-workout"));
        assert!(!ids.contains(&"workout-warrior"));
        assert!(!ids.contains(&"nutrition-novice"));
    }

    #[test]
    fn test_already_unlocked_ids_are_skipped() {
        let stats = stats_with(1, 425, 3, 250);
        let first = evaluate(&stats, 1, 0, &[]);
        assert!(!first.is_empty());

        let unlocked_ids: Vec<String> = first.iter().map(|d| d.id.to_string()).collect();
        let second = evaluate(&stats, 1, 0, &unlocked_ids);
        assert!(second.is_empty());
    }

    #[test]
    fn test_streak_thresholds() {
        let stats = stats_with(7, 0, 1, 0);
        let ids: Vec<&str> = evaluate(&stats, 0, 0, &[]).iter().map(|d| d.id).collect();
        assert!(ids.contains(&"streak-starter"));
        assert!(ids.contains(&"streak-legend"));

        let stats = stats_with(3, 0, 1, 0);
        let ids: Vec<&str> = evaluate(&stats, 0, 0, &[]).iter().map(|d| d.id).collect();
        assert!(ids.contains(&"streak-starter"));
        assert!(!ids.contains(&"streak-legend"));
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let stats = stats_with(7, 10_000, 11, 5000);
        let unlocked = evaluate(&stats, 50, 20, &[]);
        let positions: Vec<usize> = unlocked
            .iter()
            .map(|d| CATALOG.iter().position(|c| c.id == d.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        // everything unlocks at these numbers
        assert_eq!(unlocked.len(), CATALOG.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("xp-master").unwrap().title, "XP Master");
        assert!(find("does-not-exist").is_none());
    }
}
