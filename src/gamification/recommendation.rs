// ABOUTME: Canned workout recommendations by training focus
// ABOUTME: Maps a declared goal to fixed coaching guidance strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! Workout recommendation
//!
//! Fixed guidance per training focus. No model, no personalization; the
//! fallback focus is general fitness.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::AppError;

/// Declared training focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    WeightLoss,
    MuscleGain,
    GeneralFitness,
}

impl Display for TrainingFocus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TrainingFocus::WeightLoss => write!(f, "weight_loss"),
            TrainingFocus::MuscleGain => write!(f, "muscle_gain"),
            TrainingFocus::GeneralFitness => write!(f, "general_fitness"),
        }
    }
}

impl FromStr for TrainingFocus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "weight_loss" => Ok(TrainingFocus::WeightLoss),
            "muscle_gain" => Ok(TrainingFocus::MuscleGain),
            "general_fitness" | "general" => Ok(TrainingFocus::GeneralFitness),
            other => Err(AppError::invalid_input(format!(
                "unknown training focus: {other}"
            ))),
        }
    }
}

/// Canned guidance for a training focus
#[must_use]
pub const fn workout_recommendation(focus: TrainingFocus) -> &'static str {
    match focus {
        TrainingFocus::WeightLoss => "Do 30 mins of cardio and light strength training 💪",
        TrainingFocus::MuscleGain => "Focus on heavy lifting and high protein intake 🏋️",
        TrainingFocus::GeneralFitness => "Do a mix of cardio and flexibility exercises 🧘",
    }
}
