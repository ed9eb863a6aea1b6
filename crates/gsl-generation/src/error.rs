//! Error types for generation output

use gsl_core::{MergeError, RegionError};
use thiserror::Error;

/// Errors that can occur while producing a generated file
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Misplaced region marker in the prior output or the generated lines
    #[error("Region error: {0}")]
    Region(#[from] RegionError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Write failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Unknown case style name
    #[error("Unknown case style '{0}', expected one of: pascal, camel, snake, constant, kebab")]
    UnknownCaseStyle(String),
}

impl From<MergeError> for GenerationError {
    fn from(err: MergeError) -> Self {
        match err {
            MergeError::Region(e) => GenerationError::Region(e),
            MergeError::Io(e) => GenerationError::IoError(e),
        }
    }
}

impl GenerationError {
    /// Region error behind this failure, if any
    pub fn region_error(&self) -> Option<&RegionError> {
        match self {
            GenerationError::Region(e) => Some(e),
            _ => None,
        }
    }
}
