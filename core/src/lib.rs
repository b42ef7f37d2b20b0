//! Fitplan core library
//!
//! Deterministic diet and training plan derivation: body metrics in (typed
//! manually or extracted from an uploaded body-composition report), energy
//! targets, macro split, example meal layout, and a weekly routine out, plus
//! the downloadable JSON record tying them together.

pub mod energy;
pub mod errors;
pub mod export;
pub mod extract;
pub mod meal;
pub mod plan;
pub mod report;
pub mod training;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use energy::{bmr_mifflin_st_jeor, derive_macro_plan, tdee, MacroPlan};
pub use errors::PlanError;
pub use export::PlanExport;
pub use meal::{suggest_meals, MealPlan};
pub use plan::{build_plan, PlanBundle};
pub use report::{parse_csv_report, parse_pdf_report, ReportMetrics, ReportNotice, ReportScan};
pub use training::{training_plan, TrainingPlan};
pub use types::{ActivityLevel, BiologicalSex, BodyMetrics, Goal, PlanInputs};
