//! Core domain types for plan computation
//!
//! All quantities are stored in SI units (kg, cm); conversion, if any, happens
//! at the input boundary before these types are constructed.

use serde::{Deserialize, Serialize};

/// Biological sex for physiological calculations
/// Note: This is used for energy/macro formulas only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Recommended protein intake bounds in g per kg of body weight
    ///
    /// Men: 1.5-2.0 g/kg, women: 1.2-1.5 g/kg. The lower bound doubles as
    /// the default when no multiplier is supplied.
    pub fn protein_per_kg_bounds(&self) -> (f64, f64) {
        match self {
            BiologicalSex::Male => (1.5, 2.0),
            BiologicalSex::Female => (1.2, 1.5),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// Diet goal, mapped to a fixed caloric delta on top of TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    #[default]
    Maintain,
    Bulk,
}

impl Goal {
    /// Caloric delta in kcal applied to TDEE
    pub fn kcal_delta(&self) -> f64 {
        match self {
            Goal::Cut => -500.0,
            Goal::Maintain => 0.0,
            Goal::Bulk => 500.0,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Cut => "Fat loss (-500 kcal/day)",
            Goal::Maintain => "Maintenance",
            Goal::Bulk => "Muscle gain (+500 kcal/day)",
        }
    }
}

/// Body metrics needed for energy calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Biological sex for physiological calculations
    pub sex: BiologicalSex,
    /// Age in years
    pub age_years: i32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub weight_kg: f64,
}

/// Full set of user inputs for one plan computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInputs {
    #[serde(flatten)]
    pub metrics: BodyMetrics,
    pub activity: ActivityLevel,
    pub goal: Goal,
    /// Fraction of target calories allotted to fat (0.15-0.30)
    pub fat_ratio: f64,
    /// Protein intake in g/kg; defaults to the sex's lower bound when absent
    pub protein_per_kg: Option<f64>,
    /// Weight-training sessions per week (2-6)
    pub training_days: u8,
}
