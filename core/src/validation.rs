//! Input validation functions
//!
//! Range checks applied at the input boundary, before anything reaches the
//! calculators. The calculators themselves are total and never validate.

use crate::types::{BiologicalSex, PlanInputs};

/// Validate age in years (14-90)
pub fn validate_age(age_years: i32) -> Result<(), String> {
    if age_years < 14 {
        return Err("Age must be at least 14 years".to_string());
    }
    if age_years > 90 {
        return Err("Age must be at most 90 years".to_string());
    }
    Ok(())
}

/// Validate height value in cm (120-220)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 120.0 {
        return Err("Height must be at least 120 cm".to_string());
    }
    if height_cm > 220.0 {
        return Err("Height must be at most 220 cm".to_string());
    }
    Ok(())
}

/// Validate weight value in kg (30-300)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 30.0 {
        return Err("Weight must be at least 30 kg".to_string());
    }
    if weight_kg > 300.0 {
        return Err("Weight must be at most 300 kg".to_string());
    }
    Ok(())
}

/// Validate fat ratio as a fraction of target calories (0.15-0.30)
pub fn validate_fat_ratio(fat_ratio: f64) -> Result<(), String> {
    if fat_ratio.is_nan() || fat_ratio.is_infinite() {
        return Err("Fat ratio must be a valid number".to_string());
    }
    if !(0.15..=0.30).contains(&fat_ratio) {
        return Err("Fat ratio must be between 0.15 and 0.30".to_string());
    }
    Ok(())
}

/// Validate protein multiplier against the sex-specific bounds
pub fn validate_protein_per_kg(protein_per_kg: f64, sex: BiologicalSex) -> Result<(), String> {
    if protein_per_kg.is_nan() || protein_per_kg.is_infinite() {
        return Err("Protein multiplier must be a valid number".to_string());
    }
    let (lo, hi) = sex.protein_per_kg_bounds();
    if protein_per_kg < lo || protein_per_kg > hi {
        return Err(format!(
            "Protein multiplier must be between {lo} and {hi} g/kg"
        ));
    }
    Ok(())
}

/// Validate weight-training sessions per week (2-6)
pub fn validate_training_days(days: u8) -> Result<(), String> {
    if !(2..=6).contains(&days) {
        return Err("Training days must be between 2 and 6 per week".to_string());
    }
    Ok(())
}

/// Validate a complete input set, returning the first violation found
pub fn validate_inputs(inputs: &PlanInputs) -> Result<(), String> {
    validate_age(inputs.metrics.age_years)?;
    validate_height_cm(inputs.metrics.height_cm)?;
    validate_weight_kg(inputs.metrics.weight_kg)?;
    validate_fat_ratio(inputs.fat_ratio)?;
    if let Some(ppk) = inputs.protein_per_kg {
        validate_protein_per_kg(ppk, inputs.metrics.sex)?;
    }
    validate_training_days(inputs.training_days)?;
    Ok(())
}
