// ABOUTME: Integration tests for meal logging and daily macro rollups
// ABOUTME: Validates append behavior, per-day queries, and nutrition achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use fitness_ledger::ledger::Ledger;
use fitness_ledger::models::{FoodItem, MacroTotals, MealType, NewMeal, NewMealPlan, PlannedMeals};

async fn create_test_ledger() -> Ledger {
    Ledger::connect("memory")
        .await
        .expect("Failed to create test ledger")
}

fn salad() -> FoodItem {
    FoodItem {
        name: "Chicken Salad".into(),
        calories: 420.0,
        protein: 35.0,
        carbs: 25.0,
        fats: 18.0,
        servings: 1.0,
    }
}

fn meal_of(items: Vec<FoodItem>, meal_type: MealType, days_ago: i64) -> NewMeal {
    NewMeal {
        date: Utc::now() - Duration::days(days_ago),
        meal_type,
        total_macros: MacroTotals::from_items(&items),
        items,
    }
}

#[tokio::test]
async fn test_add_meal_has_no_stats_side_effects() {
    let ledger = create_test_ledger().await;
    let stats_before = ledger.user_stats().await.unwrap();

    let meal = ledger
        .add_meal(meal_of(vec![salad()], MealType::Lunch, 0))
        .await
        .unwrap();
    assert_eq!(meal.meal_type, MealType::Lunch);

    let stats_after = ledger.user_stats().await.unwrap();
    assert_eq!(stats_before, stats_after);
}

#[tokio::test]
async fn test_first_meal_unlocks_nutrition_novice() {
    let ledger = create_test_ledger().await;

    ledger
        .add_meal(meal_of(vec![salad()], MealType::Dinner, 0))
        .await
        .unwrap();

    let ids: Vec<String> = ledger
        .achievements()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert!(ids.contains(&"nutrition-novice".to_string()));
    assert!(!ids.contains(&"first-workout".to_string()));
}

#[tokio::test]
async fn test_meals_on_filters_by_calendar_day() {
    let ledger = create_test_ledger().await;

    ledger
        .add_meal(meal_of(vec![salad()], MealType::Breakfast, 0))
        .await
        .unwrap();
    ledger
        .add_meal(meal_of(vec![salad()], MealType::Lunch, 0))
        .await
        .unwrap();
    ledger
        .add_meal(meal_of(vec![salad()], MealType::Dinner, 1))
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let todays = ledger.meals_on(today).await.unwrap();
    assert_eq!(todays.len(), 2);

    let macros = ledger.daily_macros(today).await.unwrap();
    assert!((macros.calories - 840.0).abs() < f64::EPSILON);
    assert!((macros.protein - 70.0).abs() < f64::EPSILON);

    // a day with no meals totals to zero
    let none = ledger
        .daily_macros(today - chrono::Days::new(30))
        .await
        .unwrap();
    assert!((none.calories).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_meal_plan_create_and_delete() {
    let ledger = create_test_ledger().await;

    let plan = ledger
        .add_meal_plan(NewMealPlan {
            name: "Cutting Week".into(),
            description: "High protein, modest carbs".into(),
            meals: PlannedMeals {
                breakfast: vec![salad()],
                lunch: vec![salad()],
                dinner: Vec::new(),
                snacks: Vec::new(),
            },
            total_macros: MacroTotals::from_items(&[salad(), salad()]),
        })
        .await
        .unwrap();

    let plans = ledger.meal_plans().await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Cutting Week");
    assert!((plans[0].total_macros.calories - 840.0).abs() < f64::EPSILON);

    let remaining = ledger.delete_meal_plan(&plan.id).await.unwrap();
    assert!(remaining.is_empty());

    // unknown id: silent no-op
    let still_empty = ledger.delete_meal_plan("ghost").await.unwrap();
    assert!(still_empty.is_empty());
}
