// ABOUTME: Demo data seeder for the fitness ledger
// ABOUTME: Generates sample workouts and meals so stats, streaks, and achievements derive normally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! Demo data seeder for the fitness ledger.
//!
//! Populates a store with realistic sample data: ten workouts spread over
//! the trailing two weeks and three meals per day for the trailing week.
//! Everything is logged through the ledger, so aggregate stats, streaks,
//! and achievement unlocks derive exactly as they would from real use.
//!
//! Usage:
//! ```bash
//! # Seed the default store
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific store, resetting it first
//! cargo run --bin seed-demo-data -- --storage-url sqlite:demo.db --reset
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use fitness_ledger::config::LedgerConfig;
use fitness_ledger::ledger::Ledger;
use fitness_ledger::logging;
use fitness_ledger::models::{Exercise, FoodItem, MacroTotals, MealType, NewMeal, NewWorkout};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Fitness Ledger Demo Data Seeder",
    long_about = "Populate a ledger store with realistic sample workouts and meals"
)]
struct SeedArgs {
    /// Storage URL override
    #[arg(long)]
    storage_url: Option<String>,

    /// Clear all existing data before seeding
    #[arg(long)]
    reset: bool,

    /// RNG seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

const WORKOUT_TYPES: [&str; 5] = ["Strength", "Cardio", "HIIT", "Yoga", "Sports"];

fn exercise_pool() -> Vec<Exercise> {
    vec![
        Exercise {
            name: "Bench Press".into(),
            sets: Some(4),
            reps: Some(10),
            weight: Some(185.0),
            duration_minutes: None,
        },
        Exercise {
            name: "Squats".into(),
            sets: Some(4),
            reps: Some(8),
            weight: Some(225.0),
            duration_minutes: None,
        },
        Exercise {
            name: "Deadlifts".into(),
            sets: Some(3),
            reps: Some(5),
            weight: Some(315.0),
            duration_minutes: None,
        },
        Exercise {
            name: "Pull-ups".into(),
            sets: Some(3),
            reps: Some(12),
            weight: None,
            duration_minutes: None,
        },
        Exercise {
            name: "Running".into(),
            sets: None,
            reps: None,
            weight: None,
            duration_minutes: Some(30),
        },
    ]
}

const BREAKFASTS: [(&str, f64, f64, f64, f64); 3] = [
    ("Greek Yogurt Bowl", 320.0, 25.0, 35.0, 8.0),
    ("Oatmeal with Berries", 280.0, 12.0, 48.0, 6.0),
    ("Scrambled Eggs & Toast", 350.0, 22.0, 28.0, 16.0),
];

const LUNCHES: [(&str, f64, f64, f64, f64); 3] = [
    ("Chicken Salad", 420.0, 35.0, 25.0, 18.0),
    ("Quinoa Bowl", 450.0, 18.0, 58.0, 14.0),
    ("Turkey Sandwich", 380.0, 28.0, 42.0, 12.0),
];

const DINNERS: [(&str, f64, f64, f64, f64); 3] = [
    ("Grilled Salmon", 480.0, 38.0, 22.0, 26.0),
    ("Chicken Stir-Fry", 520.0, 42.0, 48.0, 18.0),
    ("Pasta with Veggies", 450.0, 18.0, 68.0, 12.0),
];

fn food_item((name, calories, protein, carbs, fats): (&str, f64, f64, f64, f64)) -> FoodItem {
    FoodItem {
        name: name.into(),
        calories,
        protein,
        carbs,
        fats,
        servings: 1.0,
    }
}

async fn seed_workouts(ledger: &Ledger, rng: &mut StdRng) -> Result<()> {
    let pool = exercise_pool();
    let now = Utc::now();

    // Ten workouts over the past two weeks, one every ~1.5 days
    for i in 0..10 {
        let date = now - Duration::hours(36 * i);
        let workout_type = WORKOUT_TYPES[rng.gen_range(0..WORKOUT_TYPES.len())];
        let duration_minutes = rng.gen_range(30..60);
        let calories_burned = rng.gen_range(200..500);

        let mut exercises = pool.clone();
        exercises.shuffle(rng);
        exercises.truncate(rng.gen_range(3..=5));

        let workout = ledger
            .add_workout(NewWorkout {
                date,
                workout_type: workout_type.into(),
                duration_minutes,
                calories_burned,
                exercises,
                notes: Some(format!("Sample {workout_type} workout")),
            })
            .await?;
        info!(
            date = %workout.date.date_naive(),
            workout_type,
            xp = workout.xp_gained,
            "seeded workout"
        );
    }
    Ok(())
}

async fn seed_meals(ledger: &Ledger, rng: &mut StdRng) -> Result<()> {
    let today = Utc::now().date_naive();

    // Three meals per day for the past week
    for day_offset in 0..7 {
        let day = today - Duration::days(day_offset);
        let slots = [
            (MealType::Breakfast, BREAKFASTS, (8, 0)),
            (MealType::Lunch, LUNCHES, (12, 30)),
            (MealType::Dinner, DINNERS, (19, 0)),
        ];
        for (meal_type, table, (hour, minute)) in slots {
            let item = food_item(table[rng.gen_range(0..table.len())]);
            let Some(time) = day.and_hms_opt(hour, minute, 0) else {
                continue;
            };
            ledger
                .add_meal(NewMeal {
                    date: time.and_utc(),
                    meal_type,
                    total_macros: MacroTotals::from_items(&[item.clone()]),
                    items: vec![item],
                })
                .await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    logging::init_from_env(args.verbose)?;

    let config = LedgerConfig::from_env()?;
    let storage_url = args.storage_url.unwrap_or(config.storage_url);
    if let Some(path) = storage_url.strip_prefix("sqlite:") {
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    let ledger = Ledger::connect(&storage_url).await?;
    info!(backend = ledger.backend_info(), "seeding demo data");

    if args.reset {
        ledger.clear_all().await?;
        info!("existing data cleared");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    seed_workouts(&ledger, &mut rng).await?;
    seed_meals(&ledger, &mut rng).await?;

    let stats = ledger.user_stats().await?;
    let achievements = ledger.achievements().await?;
    println!(
        "Seeded 10 workouts and 21 meals: level {}, {} xp, {}-day streak, {} achievements unlocked",
        stats.level,
        stats.xp,
        stats.streak,
        achievements.len()
    );

    Ok(())
}
