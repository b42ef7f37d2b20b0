//! Body-composition report parsing (PDF and CSV)
//!
//! Reports are treated as untrusted, best-effort input: a missing backend
//! feature, a corrupt file, or a layout we have never seen must never fail the
//! caller. Every entry point returns a complete `ReportScan`; fields that
//! could not be recovered stay `None`, and problems surface as a non-fatal
//! notice for the presentation layer.

use crate::extract::find_labeled_value;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Metrics a body-composition report may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Weight,
    SkeletalMuscleMass,
    BodyFatMass,
    BodyFatPercent,
    BasalMetabolicRate,
    Height,
}

impl MetricField {
    pub const ALL: [MetricField; 6] = [
        MetricField::Weight,
        MetricField::SkeletalMuscleMass,
        MetricField::BodyFatMass,
        MetricField::BodyFatPercent,
        MetricField::BasalMetabolicRate,
        MetricField::Height,
    ];

    /// Label synonyms searched in report text, in priority order.
    ///
    /// Korean labels first: InBody-style reports are the primary source and
    /// their field names are unambiguous, while short English acronyms ("pbf")
    /// are kept as a fallback.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            MetricField::Weight => &["체중", "weight"],
            MetricField::SkeletalMuscleMass => &["골격근량", "skeletal muscle mass", "smm"],
            MetricField::BodyFatMass => &["체지방량", "body fat mass", "bfm"],
            MetricField::BodyFatPercent => &[
                "체지방률",
                "체지방율",
                "percent body fat",
                "body fat percentage",
                "pbf",
            ],
            MetricField::BasalMetabolicRate => &["기초대사량", "basal metabolic rate", "bmr"],
            MetricField::Height => &["신장", "height"],
        }
    }

    /// Keyword fragments matched against CSV column headers
    fn csv_keywords(&self) -> &'static [&'static str] {
        match self {
            MetricField::Weight => &["체중", "weight"],
            MetricField::SkeletalMuscleMass => &["골격근", "muscle", "smm"],
            MetricField::BodyFatMass => &["체지방량", "fat mass", "bfm"],
            MetricField::BodyFatPercent => &["체지방률", "체지방율", "percent", "pbf"],
            MetricField::BasalMetabolicRate => &["기초대사", "metabolic", "bmr"],
            MetricField::Height => &["신장", "height"],
        }
    }
}

/// Extraction result for one report, one optional value per field.
///
/// Absence means "not parsed", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub weight_kg: Option<f64>,
    pub skeletal_muscle_mass_kg: Option<f64>,
    pub body_fat_mass_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub basal_metabolic_rate_kcal: Option<f64>,
    pub height_cm: Option<f64>,
}

impl ReportMetrics {
    pub fn is_empty(&self) -> bool {
        self.weight_kg.is_none()
            && self.skeletal_muscle_mass_kg.is_none()
            && self.body_fat_mass_kg.is_none()
            && self.body_fat_percent.is_none()
            && self.basal_metabolic_rate_kcal.is_none()
            && self.height_cm.is_none()
    }

    fn set(&mut self, field: MetricField, value: f64) {
        let slot = match field {
            MetricField::Weight => &mut self.weight_kg,
            MetricField::SkeletalMuscleMass => &mut self.skeletal_muscle_mass_kg,
            MetricField::BodyFatMass => &mut self.body_fat_mass_kg,
            MetricField::BodyFatPercent => &mut self.body_fat_percent,
            MetricField::BasalMetabolicRate => &mut self.basal_metabolic_rate_kcal,
            MetricField::Height => &mut self.height_cm,
        };
        *slot = Some(value);
    }
}

/// Non-fatal parsing notice for the presentation layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportNotice {
    #[error("report could not be read: {0}")]
    Unreadable(String),
    #[error("report was readable but no known fields were found")]
    NoFieldsFound,
}

/// Outcome of one report parse: always complete, never an error
#[derive(Debug, Clone, PartialEq)]
pub struct ReportScan {
    pub metrics: ReportMetrics,
    pub notice: Option<ReportNotice>,
}

impl ReportScan {
    fn unreadable(reason: String) -> Self {
        warn!(reason = %reason, "report unreadable, degrading to empty extraction");
        Self {
            metrics: ReportMetrics::default(),
            notice: Some(ReportNotice::Unreadable(reason)),
        }
    }

    fn from_metrics(metrics: ReportMetrics) -> Self {
        let notice = metrics.is_empty().then_some(ReportNotice::NoFieldsFound);
        Self { metrics, notice }
    }
}

/// Heights at or below this are meters and get scaled to centimeters
const METERS_CUTOFF: f64 = 3.0;

fn normalize_height_cm(value: f64) -> f64 {
    if value <= METERS_CUTOFF {
        value * 100.0
    } else {
        value
    }
}

/// Parse a PDF body-composition report.
///
/// All page text is concatenated, then each field's label synonyms are run
/// through the keyword-proximity extractor. Load or extraction failures
/// degrade to an empty scan.
pub fn parse_pdf_report(bytes: &[u8]) -> ReportScan {
    let doc = match lopdf::Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => return ReportScan::unreadable(format!("pdf load failed: {e}")),
    };

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        // Pages with unextractable content streams are skipped, not fatal
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => debug!(page = page_number, error = %e, "page text extraction failed"),
        }
    }

    if text.trim().is_empty() {
        return ReportScan::unreadable("pdf contained no extractable text".to_string());
    }

    ReportScan::from_metrics(scan_text(&text))
}

/// Run the extractor over raw report text for every known field
pub fn scan_text(text: &str) -> ReportMetrics {
    let mut metrics = ReportMetrics::default();
    for field in MetricField::ALL {
        if let Some(mut value) = find_labeled_value(text, field.labels()) {
            if field == MetricField::Height {
                value = normalize_height_cm(value);
            }
            metrics.set(field, value);
        }
    }
    metrics
}

/// Parse a CSV body-composition export.
///
/// Column headers are matched against per-field keyword fragments
/// (case-insensitive substring); values come from the first data record.
pub fn parse_csv_report(bytes: &[u8]) -> ReportScan {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(|h| h.to_lowercase()).collect(),
        Err(e) => return ReportScan::unreadable(format!("csv header read failed: {e}")),
    };

    let first_row = match reader.records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return ReportScan::unreadable(format!("csv record read failed: {e}")),
        None => return ReportScan::unreadable("csv had no data rows".to_string()),
    };

    let mut metrics = ReportMetrics::default();
    for field in MetricField::ALL {
        let column = headers.iter().position(|header| {
            field
                .csv_keywords()
                .iter()
                .any(|keyword| header.contains(keyword))
        });
        let Some(column) = column else { continue };
        let Some(raw) = first_row.get(column) else { continue };
        if let Ok(mut value) = raw.replace(',', ".").parse::<f64>() {
            if field == MetricField::Height {
                value = normalize_height_cm(value);
            }
            metrics.set(field, value);
        }
    }

    ReportScan::from_metrics(metrics)
}
