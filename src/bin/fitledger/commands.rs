// ABOUTME: Subcommand implementations for the fitledger CLI
// ABOUTME: Parses user input into ledger operations and renders the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::Subcommand;
use fitness_ledger::gamification::{achievements::CATALOG, workout_recommendation, TrainingFocus};
use fitness_ledger::ledger::Ledger;
use fitness_ledger::models::{
    Achievement, Exercise, FoodItem, GoalUpdate, MacroTotals, MealType, NewGoal, NewMeal,
    NewMealPlan, NewWorkout, PlannedMeals,
};
use std::path::Path;

#[non_exhaustive]
#[derive(Subcommand)]
pub enum WorkoutCommand {
    /// Log a workout
    Log {
        /// Workout category, e.g. Cardio, Strength
        #[arg(long)]
        workout_type: String,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Calories burned
        #[arg(long)]
        calories: u32,

        /// Workout date (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Exercise as name[:sets[:reps[:weight]]]; repeatable
        #[arg(long = "exercise")]
        exercises: Vec<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List workout history
    List {
        /// Only the trailing N days
        #[arg(long)]
        days: Option<i64>,
    },

    /// Rollup over a trailing window
    Summary {
        /// Window size in days
        #[arg(long, default_value = "30")]
        days: i64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
pub enum MealCommand {
    /// Log a meal
    Log {
        /// breakfast, lunch, dinner, or snack
        #[arg(long)]
        meal_type: String,

        /// Food item as name:calories:protein:carbs:fats[:servings]; repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,

        /// Meal date (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List meals for a day
    List {
        /// Day (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Macro totals for a day
    Macros {
        /// Day (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
pub enum GoalCommand {
    /// List goals
    List,

    /// Add a goal
    Add {
        #[arg(long)]
        goal_type: String,

        #[arg(long)]
        target: f64,

        /// Starting progress
        #[arg(long, default_value = "0")]
        current: f64,

        /// Deadline (YYYY-MM-DD, defaults to one week out)
        #[arg(long)]
        deadline: Option<NaiveDate>,

        /// Display icon
        #[arg(long, default_value = "🎯")]
        icon: String,
    },

    /// Update fields of a goal by id
    Update {
        id: String,

        #[arg(long)]
        goal_type: Option<String>,

        #[arg(long)]
        target: Option<f64>,

        #[arg(long)]
        current: Option<f64>,

        #[arg(long)]
        deadline: Option<NaiveDate>,

        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a goal by id
    Delete { id: String },
}

#[non_exhaustive]
#[derive(Subcommand)]
pub enum PlanCommand {
    /// List meal plans
    List,

    /// Create a meal plan
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Breakfast item as name:calories:protein:carbs:fats[:servings]; repeatable
        #[arg(long = "breakfast")]
        breakfast: Vec<String>,

        /// Lunch item; repeatable
        #[arg(long = "lunch")]
        lunch: Vec<String>,

        /// Dinner item; repeatable
        #[arg(long = "dinner")]
        dinner: Vec<String>,

        /// Snack item; repeatable
        #[arg(long = "snack")]
        snacks: Vec<String>,
    },

    /// Delete a meal plan by id
    Delete { id: String },
}

/// Parse `name[:sets[:reps[:weight]]]` into an exercise
fn parse_exercise(spec: &str) -> Result<Exercise> {
    let mut parts = spec.split(':');
    let name = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("exercise needs a name: {spec}"))?;

    let sets = parts.next().map(str::parse).transpose()?;
    let reps = parts.next().map(str::parse).transpose()?;
    let weight = parts.next().map(str::parse).transpose()?;

    Ok(Exercise {
        name: name.into(),
        sets,
        reps,
        weight,
        duration_minutes: None,
    })
}

/// Parse `name:calories:protein:carbs:fats[:servings]` into a food item
fn parse_food_item(spec: &str) -> Result<FoodItem> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 5 {
        return Err(anyhow!(
            "food item needs name:calories:protein:carbs:fats[:servings], got: {spec}"
        ));
    }
    Ok(FoodItem {
        name: parts[0].into(),
        calories: parts[1].parse().context("calories")?,
        protein: parts[2].parse().context("protein")?,
        carbs: parts[3].parse().context("carbs")?,
        fats: parts[4].parse().context("fats")?,
        servings: parts.get(5).map_or(Ok(1.0), |s| s.parse())?,
    })
}

fn parse_items(specs: &[String]) -> Result<Vec<FoodItem>> {
    specs.iter().map(|s| parse_food_item(s)).collect()
}

fn day_to_timestamp(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.and_then(|d| d.and_hms_opt(12, 0, 0))
        .map_or_else(Utc::now, |t| t.and_utc())
}

fn announce_unlocks(unlocked: &[Achievement]) {
    for achievement in unlocked {
        println!(
            "🏆 Achievement unlocked: {} {} ({})",
            achievement.icon, achievement.title, achievement.description
        );
    }
}

pub async fn workout(ledger: &Ledger, action: WorkoutCommand) -> Result<()> {
    match action {
        WorkoutCommand::Log {
            workout_type,
            duration,
            calories,
            date,
            exercises,
            notes,
        } => {
            let exercises = exercises
                .iter()
                .map(|s| parse_exercise(s))
                .collect::<Result<Vec<_>>>()?;
            let before = ledger.achievements().await?;

            let workout = ledger
                .add_workout(NewWorkout {
                    date: day_to_timestamp(date),
                    workout_type,
                    duration_minutes: duration,
                    calories_burned: calories,
                    exercises,
                    notes,
                })
                .await?;

            let stats = ledger.user_stats().await?;
            println!(
                "Logged {} workout: +{} xp (level {}, {}-day streak)",
                workout.workout_type, workout.xp_gained, stats.level, stats.streak
            );

            let after = ledger.achievements().await?;
            let new: Vec<Achievement> = after
                .into_iter()
                .filter(|a| !before.iter().any(|b| b.id == a.id))
                .collect();
            announce_unlocks(&new);
        }
        WorkoutCommand::List { days } => {
            let workouts = match days {
                Some(days) => {
                    let end = Utc::now();
                    ledger.workouts_in_range(end - Duration::days(days), end).await?
                }
                None => ledger.workouts().await?,
            };
            if workouts.is_empty() {
                println!("No workouts logged.");
            }
            for w in workouts {
                println!(
                    "{}  {:10}  {:3} min  {:4} kcal  +{} xp  {}",
                    w.date.date_naive(),
                    w.workout_type,
                    w.duration_minutes,
                    w.calories_burned,
                    w.xp_gained,
                    w.notes.unwrap_or_default()
                );
            }
        }
        WorkoutCommand::Summary { days } => {
            let summary = ledger.workout_summary(days).await?;
            println!(
                "Last {days} days: {} workouts, {} min, {} kcal ({} kcal/workout avg)",
                summary.total_workouts,
                summary.total_duration_minutes,
                summary.total_calories,
                summary.avg_calories_per_workout
            );
        }
    }
    Ok(())
}

pub async fn meal(ledger: &Ledger, action: MealCommand) -> Result<()> {
    match action {
        MealCommand::Log {
            meal_type,
            items,
            date,
        } => {
            let meal_type: MealType = meal_type.parse()?;
            let items = parse_items(&items)?;
            let before = ledger.achievements().await?;

            let meal = ledger
                .add_meal(NewMeal {
                    date: day_to_timestamp(date),
                    meal_type,
                    total_macros: MacroTotals::from_items(&items),
                    items,
                })
                .await?;
            println!(
                "Logged {} ({:.0} kcal, {:.0}g protein)",
                meal.meal_type, meal.total_macros.calories, meal.total_macros.protein
            );

            let after = ledger.achievements().await?;
            let new: Vec<Achievement> = after
                .into_iter()
                .filter(|a| !before.iter().any(|b| b.id == a.id))
                .collect();
            announce_unlocks(&new);
        }
        MealCommand::List { date } => {
            let day = date.unwrap_or_else(|| Utc::now().date_naive());
            let meals = ledger.meals_on(day).await?;
            if meals.is_empty() {
                println!("No meals logged on {day}.");
            }
            for m in meals {
                let names: Vec<&str> = m.items.iter().map(|i| i.name.as_str()).collect();
                println!(
                    "{:9}  {:.0} kcal  {}",
                    m.meal_type.to_string(),
                    m.total_macros.calories,
                    names.join(", ")
                );
            }
        }
        MealCommand::Macros { date } => {
            let day = date.unwrap_or_else(|| Utc::now().date_naive());
            let totals = ledger.daily_macros(day).await?;
            println!(
                "{day}: {:.0} kcal, {:.0}g protein, {:.0}g carbs, {:.0}g fats",
                totals.calories, totals.protein, totals.carbs, totals.fats
            );
        }
    }
    Ok(())
}

pub async fn goal(ledger: &Ledger, action: GoalCommand) -> Result<()> {
    match action {
        GoalCommand::List => {
            for g in ledger.goals().await? {
                println!(
                    "{}  {} {}  {}/{}  due {}",
                    g.id,
                    g.icon,
                    g.goal_type,
                    g.current,
                    g.target,
                    g.deadline.date_naive()
                );
            }
        }
        GoalCommand::Add {
            goal_type,
            target,
            current,
            deadline,
            icon,
        } => {
            let deadline = deadline
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map_or_else(|| Utc::now() + Duration::days(7), |t| t.and_utc());
            let goal = ledger
                .add_goal(NewGoal {
                    goal_type,
                    target,
                    current,
                    deadline,
                    icon,
                })
                .await?;
            println!("Created goal {} ({})", goal.goal_type, goal.id);
        }
        GoalCommand::Update {
            id,
            goal_type,
            target,
            current,
            deadline,
            icon,
        } => {
            ledger
                .update_goal(
                    &id,
                    GoalUpdate {
                        goal_type,
                        target,
                        current,
                        deadline: deadline
                            .and_then(|d| d.and_hms_opt(0, 0, 0))
                            .map(|t| t.and_utc()),
                        icon,
                    },
                )
                .await?;
            println!("Updated goal {id}");
        }
        GoalCommand::Delete { id } => {
            ledger.delete_goal(&id).await?;
            println!("Deleted goal {id}");
        }
    }
    Ok(())
}

pub async fn plan(ledger: &Ledger, action: PlanCommand) -> Result<()> {
    match action {
        PlanCommand::List => {
            for p in ledger.meal_plans().await? {
                println!(
                    "{}  {}  {:.0} kcal/day  created {}",
                    p.id,
                    p.name,
                    p.total_macros.calories,
                    p.created_at.date_naive()
                );
            }
        }
        PlanCommand::Add {
            name,
            description,
            breakfast,
            lunch,
            dinner,
            snacks,
        } => {
            let meals = PlannedMeals {
                breakfast: parse_items(&breakfast)?,
                lunch: parse_items(&lunch)?,
                dinner: parse_items(&dinner)?,
                snacks: parse_items(&snacks)?,
            };
            let mut total_macros = MacroTotals::from_items(&meals.breakfast);
            total_macros.accumulate(&MacroTotals::from_items(&meals.lunch));
            total_macros.accumulate(&MacroTotals::from_items(&meals.dinner));
            total_macros.accumulate(&MacroTotals::from_items(&meals.snacks));

            let plan = ledger
                .add_meal_plan(NewMealPlan {
                    name,
                    description,
                    meals,
                    total_macros,
                })
                .await?;
            println!("Created plan {} ({})", plan.name, plan.id);
        }
        PlanCommand::Delete { id } => {
            ledger.delete_meal_plan(&id).await?;
            println!("Deleted plan {id}");
        }
    }
    Ok(())
}

pub async fn stats(ledger: &Ledger) -> Result<()> {
    let stats = ledger.user_stats().await?;
    println!("Level {}  ({} xp)", stats.level, stats.xp);
    println!("Streak: {} days", stats.streak);
    println!("Workouts: {}", stats.total_workouts);
    println!("Calories burned: {}", stats.calories_burned);
    match stats.last_workout_date {
        Some(date) => println!("Last workout: {}", date.date_naive()),
        None => println!("Last workout: never"),
    }
    Ok(())
}

pub async fn achievements(ledger: &Ledger, all: bool) -> Result<()> {
    let unlocked = ledger.achievements().await?;
    if all {
        for def in &CATALOG {
            match unlocked.iter().find(|a| a.id == def.id) {
                Some(a) => println!(
                    "{} {} [{}] unlocked {}",
                    def.icon,
                    def.title,
                    def.rarity,
                    a.unlocked_at.date_naive()
                ),
                None => println!("🔒 {} [{}]: {}", def.title, def.rarity, def.description),
            }
        }
    } else if unlocked.is_empty() {
        println!("No achievements unlocked yet.");
    } else {
        for a in unlocked {
            println!(
                "{} {} [{}] unlocked {}",
                a.icon,
                a.title,
                a.rarity,
                a.unlocked_at.date_naive()
            );
        }
    }
    Ok(())
}

pub fn recommend(focus: &str) -> Result<()> {
    let focus: TrainingFocus = focus.parse()?;
    println!("{}", workout_recommendation(focus));
    Ok(())
}

pub async fn export(ledger: &Ledger, output: Option<&Path>) -> Result<()> {
    let archive = ledger.export_data().await?;
    match output {
        Some(path) => {
            tokio::fs::write(path, &archive).await?;
            println!("Exported to {}", path.display());
        }
        None => println!("{archive}"),
    }
    Ok(())
}

pub async fn import(ledger: &Ledger, input: &Path) -> Result<()> {
    let json = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("reading {}", input.display()))?;
    ledger.import_data(&json).await?;
    println!("Imported {}", input.display());
    Ok(())
}

pub async fn reset(ledger: &Ledger, yes: bool) -> Result<()> {
    if !yes {
        return Err(anyhow!("refusing to wipe all data without --yes"));
    }
    ledger.clear_all().await?;
    println!("All data cleared.");
    Ok(())
}
