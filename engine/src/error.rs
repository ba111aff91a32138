//! Error handling for the agronomy engine
//!
//! The calculators themselves never fail: missing or nonsense numeric input
//! substitutes zero so a page render always has something to show. Errors
//! exist only where a caller names something the reference tables do not
//! know, or drives the diagnostic out of order.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("Diagnostic selection out of order: {0}")]
    SelectionOrder(&'static str),
}

/// Result type alias for engine lookups
pub type EngineResult<T> = Result<T, EngineError>;
