//! Error types for plan computation boundaries
//!
//! The calculators themselves are total; errors only exist at the input and
//! export boundaries. Report parsing has its own non-fatal notice type in
//! `report`.

use thiserror::Error;

/// Boundary error for plan computation
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Export serialization failed: {0}")]
    Export(#[from] serde_json::Error),
}
