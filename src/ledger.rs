// ABOUTME: The ledger component - single source of truth for all user progress data
// ABOUTME: Read/write operations per entity plus streak, XP, and achievement derivation on mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! # Fitness Ledger
//!
//! Owns all user progress state: aggregate stats, goals, achievements,
//! workout history, meal history, and meal plans, one JSON collection per
//! storage key. Every mutation synchronously re-derives the dependent
//! values: logging a workout appends to the history, merges the aggregate
//! stats (count, calories, XP, level, streak, last workout date) in a
//! single update, then evaluates achievement unlocks.
//!
//! The aggregate stats are deliberately denormalized next to the raw
//! history; `add_workout` is the only writer of the drift-prone fields, so
//! a port to a multi-writer store adds its transaction boundary around
//! that one method.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::constants::{default_goals, storage_keys};
use crate::errors::AppResult;
use crate::gamification::{achievements, progression, streak};
use crate::models::{
    Achievement, FitnessArchive, Goal, GoalUpdate, MacroTotals, Meal, MealPlan, NewGoal, NewMeal,
    NewMealPlan, NewWorkout, StatsUpdate, UserStats, Workout, WorkoutSummary,
};
use crate::storage::{Storage, StorageBackend};

/// Single source of truth for all user progress data.
///
/// Construct one per process and pass it by reference; there is no global
/// instance.
#[derive(Clone)]
pub struct Ledger {
    storage: Storage,
}

impl Ledger {
    /// Open a ledger over the storage at the given URL
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to open
    pub async fn connect(storage_url: &str) -> AppResult<Self> {
        let storage = Storage::connect(storage_url).await?;
        Ok(Self::new(storage))
    }

    /// Wrap an already-connected storage backend
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Descriptive string for the active backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        self.storage.backend_info()
    }

    // ================================
    // Collection plumbing
    // ================================

    async fn read_or_default<T>(&self, key: &str, default: impl FnOnce() -> T) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.storage.get(key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                // First read seeds and persists the default
                let value = default();
                self.write(key, &value).await?;
                Ok(value)
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.put(key, &raw).await
    }

    // ================================
    // User Stats
    // ================================

    /// Read the aggregate stats, seeding zero-valued defaults on first read
    pub async fn user_stats(&self) -> AppResult<UserStats> {
        self.read_or_default(storage_keys::USER_STATS, UserStats::default)
            .await
    }

    /// Overwrite the aggregate stats record
    pub async fn save_user_stats(&self, stats: &UserStats) -> AppResult<()> {
        self.write(storage_keys::USER_STATS, stats).await
    }

    /// Merge a partial update into the aggregate stats
    pub async fn update_user_stats(&self, update: StatsUpdate) -> AppResult<UserStats> {
        let mut stats = self.user_stats().await?;
        stats.apply(update);
        self.save_user_stats(&stats).await?;
        Ok(stats)
    }

    // ================================
    // Goals
    // ================================

    /// Read all goals, seeding the two default goals on first read
    pub async fn goals(&self) -> AppResult<Vec<Goal>> {
        self.read_or_default(storage_keys::GOALS, seed_goals).await
    }

    /// Overwrite the goal collection
    pub async fn save_goals(&self, goals: &[Goal]) -> AppResult<()> {
        self.write(storage_keys::GOALS, &goals).await
    }

    /// Create a goal with a generated id; returns the created record
    pub async fn add_goal(&self, goal: NewGoal) -> AppResult<Goal> {
        let mut goals = self.goals().await?;
        let created = Goal {
            id: Uuid::new_v4().to_string(),
            goal_type: goal.goal_type,
            target: goal.target,
            current: goal.current,
            deadline: goal.deadline,
            icon: goal.icon,
        };
        goals.push(created.clone());
        self.save_goals(&goals).await?;
        Ok(created)
    }

    /// Merge partial fields into the goal with the given id.
    ///
    /// Unknown ids are a silent no-op; returns the (possibly unchanged)
    /// collection.
    pub async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> AppResult<Vec<Goal>> {
        let mut goals = self.goals().await?;
        if let Some(goal) = goals.iter_mut().find(|g| g.id == goal_id) {
            goal.apply(update);
        } else {
            debug!("update_goal: no goal with id {}", goal_id);
        }
        self.save_goals(&goals).await?;
        Ok(goals)
    }

    /// Delete the goal with the given id; unknown ids are a silent no-op
    pub async fn delete_goal(&self, goal_id: &str) -> AppResult<Vec<Goal>> {
        let mut goals = self.goals().await?;
        goals.retain(|g| g.id != goal_id);
        self.save_goals(&goals).await?;
        Ok(goals)
    }

    // ================================
    // Achievements
    // ================================

    /// Read the unlocked achievement set
    pub async fn achievements(&self) -> AppResult<Vec<Achievement>> {
        self.read_or_default(storage_keys::ACHIEVEMENTS, Vec::new)
            .await
    }

    async fn save_achievements(&self, achievements: &[Achievement]) -> AppResult<()> {
        self.write(storage_keys::ACHIEVEMENTS, &achievements).await
    }

    /// Unlock a catalog achievement by id.
    ///
    /// Idempotent: returns `None` when the id is already unlocked or not
    /// in the catalog.
    pub async fn unlock_achievement(&self, achievement_id: &str) -> AppResult<Option<Achievement>> {
        let mut unlocked = self.achievements().await?;
        if unlocked.iter().any(|a| a.id == achievement_id) {
            return Ok(None);
        }
        let Some(def) = achievements::find(achievement_id) else {
            warn!("unlock requested for unknown achievement {}", achievement_id);
            return Ok(None);
        };

        let achievement = Achievement {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            unlocked_at: Utc::now(),
            rarity: def.rarity,
        };
        unlocked.push(achievement.clone());
        self.save_achievements(&unlocked).await?;
        info!(id = def.id, title = def.title, "achievement unlocked");
        Ok(Some(achievement))
    }

    /// Evaluate every catalog predicate against current state and unlock
    /// what newly qualifies. Returns the achievements unlocked by this
    /// call, possibly empty.
    pub async fn check_achievements(&self) -> AppResult<Vec<Achievement>> {
        let stats = self.user_stats().await?;
        let workout_count = self.workouts().await?.len();
        let meal_count = self.meals().await?.len();
        let unlocked_ids: Vec<String> = self
            .achievements()
            .await?
            .into_iter()
            .map(|a| a.id)
            .collect();

        let mut newly_unlocked = Vec::new();
        for def in achievements::evaluate(&stats, workout_count, meal_count, &unlocked_ids) {
            if let Some(achievement) = self.unlock_achievement(def.id).await? {
                newly_unlocked.push(achievement);
            }
        }
        Ok(newly_unlocked)
    }

    // ================================
    // Workouts
    // ================================

    /// Read the full workout history
    pub async fn workouts(&self) -> AppResult<Vec<Workout>> {
        self.read_or_default(storage_keys::WORKOUTS, Vec::new).await
    }

    async fn save_workouts(&self, workouts: &[Workout]) -> AppResult<()> {
        self.write(storage_keys::WORKOUTS, &workouts).await
    }

    /// Log a workout: append to the history, merge the aggregate stats,
    /// and evaluate achievements. Returns the created record.
    ///
    /// XP is computed here, once: `round(duration × 10 + calories / 2)`.
    pub async fn add_workout(&self, workout: NewWorkout) -> AppResult<Workout> {
        let xp_gained =
            progression::xp_for_workout(workout.duration_minutes, workout.calories_burned);

        let created = Workout {
            id: Uuid::new_v4().to_string(),
            date: workout.date,
            workout_type: workout.workout_type,
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            exercises: workout.exercises,
            notes: workout.notes,
            xp_gained,
        };

        let mut workouts = self.workouts().await?;
        workouts.push(created.clone());
        self.save_workouts(&workouts).await?;

        // One merge covers every derived field; the streak is recomputed
        // over the history that now includes this workout.
        let dates: Vec<DateTime<Utc>> = workouts.iter().map(|w| w.date).collect();
        let new_streak = streak::current_streak(&dates, Utc::now().date_naive());

        let stats = self.user_stats().await?;
        let new_xp = stats.xp + xp_gained;
        self.update_user_stats(StatsUpdate {
            total_workouts: Some(stats.total_workouts + 1),
            calories_burned: Some(stats.calories_burned + i64::from(created.calories_burned)),
            xp: Some(new_xp),
            level: Some(progression::level_for_xp(new_xp)),
            streak: Some(new_streak),
            last_workout_date: Some(Some(created.date)),
        })
        .await?;

        self.check_achievements().await?;

        debug!(
            id = %created.id,
            xp = xp_gained,
            streak = new_streak,
            "workout logged"
        );
        Ok(created)
    }

    /// Workouts whose date falls within `[start, end]`
    pub async fn workouts_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Workout>> {
        let workouts = self.workouts().await?;
        Ok(workouts
            .into_iter()
            .filter(|w| w.date >= start && w.date <= end)
            .collect())
    }

    /// Rollup over the trailing `days`-day window
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub async fn workout_summary(&self, days: i64) -> AppResult<WorkoutSummary> {
        let end = Utc::now();
        let start = end - Duration::days(days);
        let workouts = self.workouts_in_range(start, end).await?;

        let total_duration_minutes: u64 = workouts.iter().map(|w| u64::from(w.duration_minutes)).sum();
        let total_calories: u64 = workouts.iter().map(|w| u64::from(w.calories_burned)).sum();
        let avg_calories_per_workout = if workouts.is_empty() {
            0
        } else {
            (total_calories as f64 / workouts.len() as f64).round() as u64
        };

        Ok(WorkoutSummary {
            total_workouts: workouts.len(),
            total_duration_minutes,
            total_calories,
            avg_calories_per_workout,
        })
    }

    // ================================
    // Meals
    // ================================

    /// Read the full meal history
    pub async fn meals(&self) -> AppResult<Vec<Meal>> {
        self.read_or_default(storage_keys::MEALS, Vec::new).await
    }

    async fn save_meals(&self, meals: &[Meal]) -> AppResult<()> {
        self.write(storage_keys::MEALS, &meals).await
    }

    /// Log a meal: append to the history and evaluate achievements.
    /// No stats side effects. Returns the created record.
    pub async fn add_meal(&self, meal: NewMeal) -> AppResult<Meal> {
        let created = Meal {
            id: Uuid::new_v4().to_string(),
            date: meal.date,
            meal_type: meal.meal_type,
            items: meal.items,
            total_macros: meal.total_macros,
        };

        let mut meals = self.meals().await?;
        meals.push(created.clone());
        self.save_meals(&meals).await?;

        self.check_achievements().await?;
        Ok(created)
    }

    /// Meals logged on the given calendar day
    pub async fn meals_on(&self, date: NaiveDate) -> AppResult<Vec<Meal>> {
        let meals = self.meals().await?;
        Ok(meals
            .into_iter()
            .filter(|m| m.date.date_naive() == date)
            .collect())
    }

    /// Macro totals across every meal of the given calendar day
    pub async fn daily_macros(&self, date: NaiveDate) -> AppResult<MacroTotals> {
        let meals = self.meals_on(date).await?;
        let mut totals = MacroTotals::default();
        for meal in &meals {
            totals.accumulate(&meal.total_macros);
        }
        Ok(totals)
    }

    // ================================
    // Meal Plans
    // ================================

    /// Read all saved meal plans
    pub async fn meal_plans(&self) -> AppResult<Vec<MealPlan>> {
        self.read_or_default(storage_keys::MEAL_PLANS, Vec::new)
            .await
    }

    async fn save_meal_plans(&self, plans: &[MealPlan]) -> AppResult<()> {
        self.write(storage_keys::MEAL_PLANS, &plans).await
    }

    /// Create a meal plan with a generated id and creation timestamp
    pub async fn add_meal_plan(&self, plan: NewMealPlan) -> AppResult<MealPlan> {
        let created = MealPlan {
            id: Uuid::new_v4().to_string(),
            name: plan.name,
            description: plan.description,
            meals: plan.meals,
            total_macros: plan.total_macros,
            created_at: Utc::now(),
        };

        let mut plans = self.meal_plans().await?;
        plans.push(created.clone());
        self.save_meal_plans(&plans).await?;
        Ok(created)
    }

    /// Delete the plan with the given id; unknown ids are a silent no-op
    pub async fn delete_meal_plan(&self, plan_id: &str) -> AppResult<Vec<MealPlan>> {
        let mut plans = self.meal_plans().await?;
        plans.retain(|p| p.id != plan_id);
        self.save_meal_plans(&plans).await?;
        Ok(plans)
    }

    // ================================
    // Archive (export / import / reset)
    // ================================

    /// Serialize every collection plus an export timestamp into one
    /// pretty-printed JSON document
    pub async fn export_data(&self) -> AppResult<String> {
        let archive = FitnessArchive {
            stats: Some(self.user_stats().await?),
            goals: Some(self.goals().await?),
            achievements: Some(self.achievements().await?),
            workouts: Some(self.workouts().await?),
            meals: Some(self.meals().await?),
            meal_plans: Some(self.meal_plans().await?),
            exported_at: Some(Utc::now()),
        };
        Ok(serde_json::to_string_pretty(&archive)?)
    }

    /// Import an archive document, overwriting each collection present in
    /// it wholesale. Collections absent from the document are left
    /// untouched; no values are merged.
    ///
    /// # Errors
    ///
    /// Malformed JSON fails the whole import; nothing is written.
    pub async fn import_data(&self, json: &str) -> AppResult<()> {
        let archive: FitnessArchive = serde_json::from_str(json)?;

        if let Some(stats) = &archive.stats {
            self.save_user_stats(stats).await?;
        }
        if let Some(goals) = &archive.goals {
            self.save_goals(goals).await?;
        }
        if let Some(achievements) = &archive.achievements {
            self.save_achievements(achievements).await?;
        }
        if let Some(workouts) = &archive.workouts {
            self.save_workouts(workouts).await?;
        }
        if let Some(meals) = &archive.meals {
            self.save_meals(meals).await?;
        }
        if let Some(meal_plans) = &archive.meal_plans {
            self.save_meal_plans(meal_plans).await?;
        }

        info!("archive imported");
        Ok(())
    }

    /// Remove every namespaced key unconditionally.
    ///
    /// Any confirmation prompt belongs to the caller; the ledger does not
    /// ask.
    pub async fn clear_all(&self) -> AppResult<()> {
        for key in storage_keys::ALL {
            self.storage.remove(key).await?;
        }
        warn!("all ledger data cleared");
        Ok(())
    }
}

/// The two goals seeded on first read of an empty goal collection
fn seed_goals() -> Vec<Goal> {
    let deadline = Utc::now() + Duration::days(default_goals::DEADLINE_DAYS);
    vec![
        Goal {
            id: "1".into(),
            goal_type: "Weekly Workouts".into(),
            target: default_goals::WEEKLY_WORKOUTS_TARGET,
            current: 0.0,
            deadline,
            icon: "🏋️".into(),
        },
        Goal {
            id: "2".into(),
            goal_type: "Calories Burned".into(),
            target: default_goals::WEEKLY_CALORIES_TARGET,
            current: 0.0,
            deadline,
            icon: "🔥".into(),
        },
    ]
}
