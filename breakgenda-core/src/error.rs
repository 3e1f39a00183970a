//! Error types for breakgenda.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or exporting schedule data.
///
/// Data-quality gaps (dangling speaker references, unknown venues, days with
/// no sessions) are not errors; they are dropped or shown with a fallback.
#[derive(Error, Debug)]
pub enum BreakgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read dataset {path}: {message}")]
    Dataset { path: PathBuf, message: String },

    #[error("Unknown time zone '{0}'")]
    Timezone(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for breakgenda operations.
pub type BreakgendaResult<T> = Result<T, BreakgendaError>;
