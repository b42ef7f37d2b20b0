//! Energy expenditure and macronutrient calculations
//!
//! All functions here are pure and total: every valid-typed input produces a
//! valid plan, no errors, no side effects.

use crate::types::{ActivityLevel, BiologicalSex, Goal};
use serde::{Deserialize, Serialize};

/// Floor for the daily calorie target, regardless of goal delta
const MIN_TARGET_KCAL: f64 = 1000.0;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
pub fn bmr_mifflin_st_jeor(
    sex: BiologicalSex,
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// A complete macronutrient allocation, derived in one call.
///
/// Gram fields are rounded half-up to whole grams; ratio fields keep full
/// precision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroPlan {
    pub target_kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub fat_ratio: f64,
    pub protein_per_kg: f64,
}

/// Derive the full macro plan from TDEE, goal, and body data.
///
/// 1. target = max(1000, tdee + goal delta)
/// 2. protein = protein_per_kg x weight (defaulting to the sex's lower bound)
/// 3. fat = fat_ratio of target calories
/// 4. carbs fill the remainder, clamped at zero
pub fn derive_macro_plan(
    tdee: f64,
    goal: Goal,
    sex: BiologicalSex,
    weight_kg: f64,
    fat_ratio: f64,
    protein_per_kg: Option<f64>,
) -> MacroPlan {
    let target_kcal = (tdee + goal.kcal_delta()).max(MIN_TARGET_KCAL);

    let protein_per_kg = protein_per_kg.unwrap_or(sex.protein_per_kg_bounds().0);
    let protein_g = protein_per_kg * weight_kg;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = target_kcal * fat_ratio;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let carb_kcal = (target_kcal - protein_kcal - fat_kcal).max(0.0);
    let carb_g = carb_kcal / KCAL_PER_G_CARB;

    MacroPlan {
        target_kcal,
        protein_g: protein_g.round(),
        carb_g: carb_g.round(),
        fat_g: fat_g.round(),
        fat_ratio,
        protein_per_kg,
    }
}
