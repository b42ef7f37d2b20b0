//! Combined JSON plan export
//!
//! Serializes one full run (inputs + derived plans) into the downloadable
//! record format. Field labels are the Korean names the downloadable plan has
//! always used; serde_json keeps non-ASCII characters unescaped, so the file
//! stays human-readable.

use crate::errors::PlanError;
use crate::plan::PlanBundle;
use crate::report::ReportMetrics;
use crate::types::{ActivityLevel, BiologicalSex, Goal, PlanInputs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: &str = "1.0";

/// Input block of the export record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "성별")]
    pub sex: BiologicalSex,
    #[serde(rename = "나이")]
    pub age_years: i32,
    #[serde(rename = "키_cm")]
    pub height_cm: f64,
    #[serde(rename = "체중_kg")]
    pub weight_kg: f64,
    #[serde(rename = "활동수준")]
    pub activity: ActivityLevel,
    #[serde(rename = "목표")]
    pub goal: Goal,
    #[serde(rename = "단백질_배수")]
    pub protein_per_kg: Option<f64>,
    #[serde(rename = "지방_비율")]
    pub fat_ratio: f64,
    #[serde(rename = "인바디_PBF_추정")]
    pub estimated_pbf: Option<f64>,
    #[serde(rename = "인바디_SMM_추정")]
    pub estimated_smm: Option<f64>,
}

/// One meal row in the export record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRow {
    #[serde(rename = "끼니")]
    pub slot: String,
    #[serde(rename = "단백질(g)")]
    pub protein_g: f64,
    #[serde(rename = "탄수화물(g)")]
    pub carb_g: f64,
    #[serde(rename = "지방(g)")]
    pub fat_g: f64,
    #[serde(rename = "예시")]
    pub example_foods: String,
}

/// One routine row in the export record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineRow {
    #[serde(rename = "요일")]
    pub day: String,
    #[serde(rename = "루틴")]
    pub routine: String,
}

/// The complete downloadable plan record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    pub export_version: String,
    pub exported_at: DateTime<Utc>,
    #[serde(rename = "입력")]
    pub inputs: InputRecord,
    #[serde(rename = "계산")]
    pub macros: crate::energy::MacroPlan,
    #[serde(rename = "예시식단")]
    pub meals: Vec<MealRow>,
    #[serde(rename = "예시루틴")]
    pub routine: Vec<RoutineRow>,
}

impl PlanExport {
    /// Assemble the export record from one run.
    ///
    /// `report` carries the optional PBF/SMM estimates when a
    /// body-composition report was uploaded.
    pub fn new(inputs: &PlanInputs, report: &ReportMetrics, bundle: &PlanBundle) -> Self {
        let meals = bundle
            .meals
            .slots
            .iter()
            .map(|slot| MealRow {
                slot: slot.kind.label().to_string(),
                protein_g: slot.protein_g,
                carb_g: slot.carb_g,
                fat_g: slot.fat_g,
                example_foods: format!(
                    "{} / {} / {}",
                    slot.foods.protein, slot.foods.carb, slot.foods.fat
                ),
            })
            .collect();

        let routine = bundle
            .training
            .sessions
            .iter()
            .map(|session| RoutineRow {
                day: session.day.clone(),
                routine: session.routine.clone(),
            })
            .collect();

        Self {
            export_version: EXPORT_VERSION.to_string(),
            exported_at: Utc::now(),
            inputs: InputRecord {
                sex: inputs.metrics.sex,
                age_years: inputs.metrics.age_years,
                height_cm: inputs.metrics.height_cm,
                weight_kg: inputs.metrics.weight_kg,
                activity: inputs.activity,
                goal: inputs.goal,
                protein_per_kg: inputs.protein_per_kg,
                fat_ratio: inputs.fat_ratio,
                estimated_pbf: report.body_fat_percent,
                estimated_smm: report.skeletal_muscle_mass_kg,
            },
            macros: bundle.macros,
            meals,
            routine,
        }
    }

    /// Pretty-printed UTF-8 JSON with human-readable (unescaped) labels
    pub fn to_pretty_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
