// ABOUTME: Core data models for the fitness ledger
// ABOUTME: Defines UserStats, Workout, Meal, Goal, Achievement and the export archive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! # Data Models
//!
//! Core data structures for every entity the ledger persists.
//!
//! ## Design Principles
//!
//! - **Serializable**: all models round-trip through JSON; the wire format
//!   uses camelCase keys so archives exported by earlier clients import
//!   unchanged
//! - **Type Safe**: enums for meal types and achievement rarity instead of
//!   free-form strings
//! - **Append-only history**: `Workout` and `Meal` records are immutable
//!   once created; only the aggregate `UserStats` is rewritten

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Aggregate user statistics, denormalized from the workout history.
///
/// `level` is always `floor(1 + sqrt(xp / 100))` after any XP-mutating
/// operation; `streak`, `total_workouts`, and `calories_burned` mirror the
/// workout history and are rewritten by the same merge that appends to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Lifetime number of logged workouts
    pub total_workouts: u32,
    /// Consecutive calendar days with at least one workout, counted
    /// backward from today
    pub streak: u32,
    /// Lifetime experience points
    pub xp: i64,
    /// Current level derived from `xp`
    pub level: i32,
    /// Lifetime calories burned across all workouts
    pub calories_burned: i64,
    /// Date of the most recently logged workout
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_workouts: 0,
            streak: 0,
            xp: 0,
            level: 1,
            calories_burned: 0,
            last_workout_date: None,
        }
    }
}

/// Partial update merged into `UserStats`; absent fields keep their value
#[derive(Debug, Clone, Default)]
pub struct StatsUpdate {
    pub total_workouts: Option<u32>,
    pub streak: Option<u32>,
    pub xp: Option<i64>,
    pub level: Option<i32>,
    pub calories_burned: Option<i64>,
    pub last_workout_date: Option<Option<DateTime<Utc>>>,
}

impl UserStats {
    /// Merge a partial update into this record
    pub fn apply(&mut self, update: StatsUpdate) {
        if let Some(total_workouts) = update.total_workouts {
            self.total_workouts = total_workouts;
        }
        if let Some(streak) = update.streak {
            self.streak = streak;
        }
        if let Some(xp) = update.xp {
            self.xp = xp;
        }
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(calories_burned) = update.calories_burned {
            self.calories_burned = calories_burned;
        }
        if let Some(last_workout_date) = update.last_workout_date {
            self.last_workout_date = last_workout_date;
        }
    }
}

/// A user-defined target, independent of the fixed achievement catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: String,
    /// Label, e.g. "Weekly Workouts"
    #[serde(rename = "type")]
    pub goal_type: String,
    /// Target value
    pub target: f64,
    /// Current progress value
    pub current: f64,
    /// Target date
    pub deadline: DateTime<Utc>,
    /// Display icon
    pub icon: String,
}

/// Fields for creating a goal; the id is generated by the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(rename = "type")]
    pub goal_type: String,
    pub target: f64,
    pub current: f64,
    pub deadline: DateTime<Utc>,
    pub icon: String,
}

/// Partial update merged into a `Goal`; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(rename = "type")]
    pub goal_type: Option<String>,
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub icon: Option<String>,
}

impl Goal {
    /// Merge a partial update into this goal
    pub fn apply(&mut self, update: GoalUpdate) {
        if let Some(goal_type) = update.goal_type {
            self.goal_type = goal_type;
        }
        if let Some(target) = update.target {
            self.target = target;
        }
        if let Some(current) = update.current {
            self.current = current;
        }
        if let Some(deadline) = update.deadline {
            self.deadline = deadline;
        }
        if let Some(icon) = update.icon {
            self.icon = icon;
        }
    }
}

/// Rarity tier of an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Display for Rarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Epic => write!(f, "epic"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

/// An unlocked achievement instance.
///
/// At most one record per catalog id ever exists; unlocks are permanent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Catalog definition id, e.g. "first-workout"
    pub id: String,
    /// Display title
    pub title: String,
    /// What was accomplished
    pub description: String,
    /// Display icon
    pub icon: String,
    /// When the unlock happened
    pub unlocked_at: DateTime<Utc>,
    /// Rarity tier
    pub rarity: Rarity,
}

/// A single exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Duration in minutes, for time-based exercises
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// A logged workout. Immutable once created; `xp_gained` is computed at
/// creation time and never recomputed retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: String,
    /// When the workout happened
    pub date: DateTime<Utc>,
    /// Workout category, e.g. "Cardio", "Strength"
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Calories burned in this workout
    pub calories_burned: u32,
    /// Ordered exercise list
    pub exercises: Vec<Exercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// XP awarded when the workout was logged
    pub xp_gained: i64,
}

/// Fields for logging a workout; id and XP are assigned by the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub workout_type: String,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub calories_burned: u32,
    pub exercises: Vec<Exercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
            MealType::Snack => write!(f, "snack"),
        }
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(AppError::invalid_input(format!(
                "unknown meal type: {other}"
            ))),
        }
    }
}

/// One food entry with per-serving macros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub servings: f64,
}

/// Macro nutrient totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    /// Add another total into this one
    pub fn accumulate(&mut self, other: &MacroTotals) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fats += other.fats;
    }

    /// Sum the macros of a food item list, weighted by servings
    #[must_use]
    pub fn from_items(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.calories += item.calories * item.servings;
            acc.protein += item.protein * item.servings;
            acc.carbs += item.carbs * item.servings;
            acc.fats += item.fats * item.servings;
            acc
        })
    }
}

/// A logged meal (append-only history record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique identifier
    pub id: String,
    /// When the meal was eaten
    pub date: DateTime<Utc>,
    /// Meal slot
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Food entries
    pub items: Vec<FoodItem>,
    /// Macro totals across all items
    pub total_macros: MacroTotals,
}

/// Fields for logging a meal; the id is assigned by the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeal {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub items: Vec<FoodItem>,
    pub total_macros: MacroTotals,
}

/// Food items planned per meal slot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeals {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
    pub snacks: Vec<FoodItem>,
}

/// A saved meal plan, independently deletable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Unique identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub meals: PlannedMeals,
    pub total_macros: MacroTotals,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a meal plan; id and timestamp are assigned by the
/// ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealPlan {
    pub name: String,
    pub description: String,
    pub meals: PlannedMeals,
    pub total_macros: MacroTotals,
}

/// The export/import document: every collection plus an export timestamp.
///
/// Collections absent from an imported document leave the corresponding
/// stored collection untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessArchive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<Goal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workouts: Option<Vec<Workout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<Meal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_plans: Option<Vec<MealPlan>>,
    /// Present on every exported document; tolerated absent on import
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

/// Rollup over a trailing window of workout history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    /// Number of workouts in the window
    pub total_workouts: usize,
    /// Sum of durations in minutes
    pub total_duration_minutes: u64,
    /// Sum of calories burned
    pub total_calories: u64,
    /// Rounded mean calories per workout; zero when the window is empty
    pub avg_calories_per_workout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_start_at_level_one() {
        let stats = UserStats::default();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.xp, 0);
        assert!(stats.last_workout_date.is_none());
    }

    #[test]
    fn test_stats_partial_merge_keeps_absent_fields() {
        let mut stats = UserStats {
            total_workouts: 3,
            streak: 2,
            xp: 500,
            level: 3,
            calories_burned: 900,
            last_workout_date: None,
        };
        stats.apply(StatsUpdate {
            xp: Some(700),
            level: Some(3),
            ..StatsUpdate::default()
        });
        assert_eq!(stats.xp, 700);
        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.streak, 2);
    }

    #[test]
    fn test_workout_wire_format_uses_camel_case() {
        let workout = Workout {
            id: "w1".into(),
            date: Utc::now(),
            workout_type: "Cardio".into(),
            duration_minutes: 30,
            calories_burned: 250,
            exercises: vec![Exercise {
                name: "Running".into(),
                sets: None,
                reps: None,
                weight: None,
                duration_minutes: Some(30),
            }],
            notes: None,
            xp_gained: 425,
        };
        let json = serde_json::to_string(&workout).unwrap();
        assert!(json.contains("\"type\":\"Cardio\""));
        assert!(json.contains("\"caloriesBurned\":250"));
        assert!(json.contains("\"xpGained\":425"));
        assert!(json.contains("\"duration\":30"));
        // absent optional exercise fields are omitted entirely
        assert!(!json.contains("\"sets\""));
    }

    #[test]
    fn test_meal_type_round_trip() {
        for (s, t) in [
            ("breakfast", MealType::Breakfast),
            ("lunch", MealType::Lunch),
            ("dinner", MealType::Dinner),
            ("snack", MealType::Snack),
        ] {
            assert_eq!(s.parse::<MealType>().unwrap(), t);
            assert_eq!(t.to_string(), s);
        }
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_macro_totals_from_items_respects_servings() {
        let items = vec![
            FoodItem {
                name: "Oatmeal".into(),
                calories: 280.0,
                protein: 12.0,
                carbs: 48.0,
                fats: 6.0,
                servings: 1.0,
            },
            FoodItem {
                name: "Banana".into(),
                calories: 100.0,
                protein: 1.0,
                carbs: 27.0,
                fats: 0.0,
                servings: 2.0,
            },
        ];
        let totals = MacroTotals::from_items(&items);
        assert!((totals.calories - 480.0).abs() < f64::EPSILON);
        assert!((totals.carbs - 102.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_merge_is_field_wise() {
        let mut goal = Goal {
            id: "1".into(),
            goal_type: "Weekly Workouts".into(),
            target: 5.0,
            current: 2.0,
            deadline: Utc::now(),
            icon: "🏋️".into(),
        };
        goal.apply(GoalUpdate {
            current: Some(3.0),
            ..GoalUpdate::default()
        });
        assert!((goal.current - 3.0).abs() < f64::EPSILON);
        assert_eq!(goal.goal_type, "Weekly Workouts");
    }

    #[test]
    fn test_archive_skips_absent_collections() {
        let archive = FitnessArchive {
            stats: Some(UserStats::default()),
            goals: None,
            achievements: None,
            workouts: None,
            meals: None,
            meal_plans: None,
            exported_at: Some(Utc::now()),
        };
        let json = serde_json::to_string(&archive).unwrap();
        assert!(json.contains("\"stats\""));
        assert!(json.contains("\"exportedAt\""));
        assert!(!json.contains("\"mealPlans\""));
    }
}
