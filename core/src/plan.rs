//! End-to-end plan derivation
//!
//! Chains the calculators into one synchronous pass: validated inputs in,
//! complete macro/meal/training bundle out. Everything is recomputed fresh on
//! every call; nothing is partially updated.

use crate::energy::{bmr_mifflin_st_jeor, derive_macro_plan, tdee, MacroPlan};
use crate::errors::PlanError;
use crate::meal::{suggest_meals, MealPlan};
use crate::training::{training_plan, TrainingPlan};
use crate::types::PlanInputs;
use crate::validation::validate_inputs;
use rand::Rng;
use tracing::debug;

/// One full derivation result
#[derive(Debug, Clone)]
pub struct PlanBundle {
    pub bmr: f64,
    pub tdee: f64,
    pub macros: MacroPlan,
    pub meals: MealPlan,
    pub training: TrainingPlan,
}

/// Run the whole pipeline for one input set.
///
/// Fails only on out-of-range inputs; past validation the derivation is total.
pub fn build_plan<R: Rng + ?Sized>(
    inputs: &PlanInputs,
    rng: &mut R,
) -> Result<PlanBundle, PlanError> {
    validate_inputs(inputs).map_err(PlanError::Validation)?;

    let m = &inputs.metrics;
    let bmr = bmr_mifflin_st_jeor(m.sex, m.weight_kg, m.height_cm, m.age_years);
    let tdee = tdee(bmr, inputs.activity);
    let macros = derive_macro_plan(
        tdee,
        inputs.goal,
        m.sex,
        m.weight_kg,
        inputs.fat_ratio,
        inputs.protein_per_kg,
    );
    debug!(bmr, tdee, target_kcal = macros.target_kcal, "derived macro plan");

    let meals = suggest_meals(&macros, rng);
    let training = training_plan(inputs.goal, inputs.training_days);

    Ok(PlanBundle {
        bmr,
        tdee,
        macros,
        meals,
        training,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityLevel, BiologicalSex, BodyMetrics, Goal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn example_inputs() -> PlanInputs {
        PlanInputs {
            metrics: BodyMetrics {
                sex: BiologicalSex::Male,
                age_years: 28,
                height_cm: 175.0,
                weight_kg: 70.0,
            },
            activity: ActivityLevel::ModeratelyActive,
            goal: Goal::Cut,
            fat_ratio: 0.20,
            protein_per_kg: Some(1.5),
            training_days: 5,
        }
    }

    #[test]
    fn test_full_pipeline() {
        let mut rng = StdRng::seed_from_u64(7);
        let bundle = build_plan(&example_inputs(), &mut rng).unwrap();

        assert!((bundle.bmr - 1673.75).abs() < 1e-9);
        assert!((bundle.tdee - 2594.3125).abs() < 1e-9);
        assert_eq!(bundle.macros.protein_g, 105.0);
        assert_eq!(bundle.meals.slots.len(), 4);
        assert_eq!(bundle.training.sessions.len(), 6); // 5-day split + cardio
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut inputs = example_inputs();
        inputs.metrics.age_years = 10;
        let mut rng = StdRng::seed_from_u64(7);
        let err = build_plan(&inputs, &mut rng).unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)));
    }
}
