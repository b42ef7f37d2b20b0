//! Configuration for the fitplan CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (fitplan.toml, or FITPLAN_CONFIG path)
//! 3. Environment variables (prefix: FITPLAN__)

use anyhow::{bail, Result};
use fitplan_core::{ActivityLevel, BiologicalSex, Goal};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// User profile inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// "male" or "female"
    pub sex: String,
    pub age_years: i32,
    /// May be omitted when an uploaded report supplies it
    pub height_cm: Option<f64>,
    /// May be omitted when an uploaded report supplies it
    pub weight_kg: Option<f64>,
    /// One of the five activity level names; unknown values fall back to
    /// moderately_active (x1.55) with a warning
    pub activity: String,
    /// "cut", "maintain", or "bulk"; unknown values fall back to maintain
    pub goal: String,
    pub fat_ratio: f64,
    pub protein_per_kg: Option<f64>,
    pub training_days: u8,
}

/// Optional uploaded report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to a PDF or CSV body-composition report
    pub path: Option<String>,
}

/// Output location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "fitness_plan.json".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig {
                sex: "male".to_string(),
                age_years: 30,
                height_cm: None,
                weight_kg: None,
                activity: "moderately_active".to_string(),
                goal: "maintain".to_string(),
                fat_ratio: 0.20,
                protein_per_kg: None,
                training_days: 5,
            },
            report: ReportConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. fitplan.toml (or the file named by FITPLAN_CONFIG)
    /// 3. Environment variables with FITPLAN__ prefix
    ///    e.g. FITPLAN__PROFILE__WEIGHT_KG=70.5 sets profile.weight_kg
    pub fn load() -> Result<Self> {
        let config_file = env::var("FITPLAN_CONFIG").unwrap_or_else(|_| "fitplan.toml".to_string());

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("FITPLAN").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl ProfileConfig {
    /// Parse the sex field; there is no sensible default, so unknown values
    /// are an error
    pub fn parse_sex(&self) -> Result<BiologicalSex> {
        match self.sex.to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            other => bail!("unknown sex {other:?}, expected \"male\" or \"female\""),
        }
    }

    /// Parse the activity level, falling back to the documented x1.55 default
    pub fn parse_activity(&self) -> ActivityLevel {
        match self.activity.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly_active" => ActivityLevel::LightlyActive,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "very_active" => ActivityLevel::VeryActive,
            "extra_active" => ActivityLevel::ExtraActive,
            other => {
                warn!(activity = other, "unknown activity level, using moderately_active");
                ActivityLevel::default()
            }
        }
    }

    /// Parse the goal, falling back to the documented zero-delta default
    pub fn parse_goal(&self) -> Goal {
        match self.goal.to_lowercase().as_str() {
            "cut" => Goal::Cut,
            "maintain" => Goal::Maintain,
            "bulk" => Goal::Bulk,
            other => {
                warn!(goal = other, "unknown goal, using maintain");
                Goal::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.profile.activity, "moderately_active");
        assert_eq!(config.profile.training_days, 5);
        assert_eq!(config.output.path, "fitness_plan.json");
        assert!(config.report.path.is_none());
    }

    #[test]
    fn test_parse_sex() {
        let mut profile = AppConfig::default().profile;
        assert_eq!(profile.parse_sex().unwrap(), BiologicalSex::Male);
        profile.sex = "FEMALE".to_string();
        assert_eq!(profile.parse_sex().unwrap(), BiologicalSex::Female);
        profile.sex = "other".to_string();
        assert!(profile.parse_sex().is_err());
    }

    #[test]
    fn test_unknown_activity_falls_back_to_moderate() {
        let mut profile = AppConfig::default().profile;
        profile.activity = "super_active".to_string();
        assert_eq!(profile.parse_activity().multiplier(), 1.55);
    }

    #[test]
    fn test_unknown_goal_falls_back_to_maintain() {
        let mut profile = AppConfig::default().profile;
        profile.goal = "recomp".to_string();
        assert_eq!(profile.parse_goal().kcal_delta(), 0.0);
    }
}
