//! Fitplan CLI
//!
//! Thin presentation layer over `fitplan-core`: loads the profile from
//! config, optionally ingests a body-composition report, runs the plan
//! pipeline, and writes the downloadable JSON record.

mod config;

use anyhow::{Context, Result};
use config::AppConfig;
use fitplan_core::{
    build_plan, parse_csv_report, parse_pdf_report, BodyMetrics, PlanExport, PlanInputs,
    ReportMetrics, ReportScan,
};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load().context("failed to load configuration")?;

    // Report ingestion is best-effort: problems are logged, never fatal
    let report = match &config.report.path {
        Some(path) => ingest_report(path),
        None => ReportMetrics::default(),
    };

    let inputs = resolve_inputs(&config, &report)?;
    info!(
        sex = ?inputs.metrics.sex,
        weight_kg = inputs.metrics.weight_kg,
        height_cm = inputs.metrics.height_cm,
        goal = ?inputs.goal,
        "computing plan"
    );

    let mut rng = rand::thread_rng();
    let bundle = build_plan(&inputs, &mut rng)?;

    let export = PlanExport::new(&inputs, &report, &bundle);
    let json = export.to_pretty_json()?;
    fs::write(&config.output.path, json)
        .with_context(|| format!("failed to write {}", config.output.path))?;

    info!(
        bmr = format!("{:.0}", bundle.bmr),
        tdee = format!("{:.0}", bundle.tdee),
        target_kcal = format!("{:.0}", bundle.macros.target_kcal),
        protein_g = bundle.macros.protein_g,
        carb_g = bundle.macros.carb_g,
        fat_g = bundle.macros.fat_g,
        output = %config.output.path,
        "plan written"
    );
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Parse an uploaded report, degrading to an empty result on any problem
fn ingest_report(path: &str) -> ReportMetrics {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path, error = %e, "could not read report file, ignoring it");
            return ReportMetrics::default();
        }
    };

    let is_pdf = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let ReportScan { metrics, notice } = if is_pdf {
        parse_pdf_report(&bytes)
    } else {
        parse_csv_report(&bytes)
    };

    if let Some(notice) = notice {
        warn!(path, %notice, "report parsed with a notice");
    } else {
        info!(path, "report parsed");
    }
    metrics
}

/// Merge config values with report extractions into validated plan inputs.
///
/// Explicit config values win; the report only fills gaps. Weight and height
/// must come from one of the two sources.
fn resolve_inputs(config: &AppConfig, report: &ReportMetrics) -> Result<PlanInputs> {
    let profile = &config.profile;

    let weight_kg = profile
        .weight_kg
        .or(report.weight_kg)
        .context("weight_kg missing: set profile.weight_kg or supply a readable report")?;
    let height_cm = profile
        .height_cm
        .or(report.height_cm)
        .context("height_cm missing: set profile.height_cm or supply a readable report")?;

    Ok(PlanInputs {
        metrics: BodyMetrics {
            sex: profile.parse_sex()?,
            age_years: profile.age_years,
            height_cm,
            weight_kg,
        },
        activity: profile.parse_activity(),
        goal: profile.parse_goal(),
        fat_ratio: profile.fat_ratio,
        protein_per_kg: profile.protein_per_kg,
        training_days: profile.training_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inputs_prefers_config_over_report() {
        let mut config = AppConfig::default();
        config.profile.weight_kg = Some(80.0);
        config.profile.height_cm = Some(180.0);
        let report = ReportMetrics {
            weight_kg: Some(70.0),
            height_cm: Some(170.0),
            ..Default::default()
        };
        let inputs = resolve_inputs(&config, &report).unwrap();
        assert_eq!(inputs.metrics.weight_kg, 80.0);
        assert_eq!(inputs.metrics.height_cm, 180.0);
    }

    #[test]
    fn test_resolve_inputs_fills_gaps_from_report() {
        let config = AppConfig::default(); // no weight/height set
        let report = ReportMetrics {
            weight_kg: Some(70.5),
            height_cm: Some(175.0),
            ..Default::default()
        };
        let inputs = resolve_inputs(&config, &report).unwrap();
        assert_eq!(inputs.metrics.weight_kg, 70.5);
        assert_eq!(inputs.metrics.height_cm, 175.0);
    }

    #[test]
    fn test_resolve_inputs_requires_weight_somewhere() {
        let config = AppConfig::default();
        let report = ReportMetrics::default();
        assert!(resolve_inputs(&config, &report).is_err());
    }

    #[test]
    fn test_missing_report_file_is_nonfatal() {
        let metrics = ingest_report("/nonexistent/report.pdf");
        assert!(metrics.is_empty());
    }
}
