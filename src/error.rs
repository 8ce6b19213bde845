//! Error types for ply homogenization

use thiserror::Error;

/// Main error type for homogenization and stiffness operations
#[derive(Error, Debug)]
pub enum PlyError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {formula}: {reason}")]
    DivisionByZero {
        formula: &'static str,
        reason: String,
    },

    #[error("Ply thickness is undefined for Vf = {vf} and reinforcement density {rho}")]
    UndefinedThickness { vf: f64, rho: f64 },

    #[error("Singular matrix in {context}")]
    SingularMatrix { context: String },

    #[error("Import error: {0}")]
    Import(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PlyError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn division(formula: &'static str, reason: impl Into<String>) -> Self {
        Self::DivisionByZero {
            formula,
            reason: reason.into(),
        }
    }
}

/// Result type for ply operations
pub type PlyResult<T> = Result<T, PlyError>;
