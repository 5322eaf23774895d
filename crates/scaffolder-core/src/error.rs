//! Error taxonomy for the scaffolding pipeline
//!
//! Every variant is fatal: the pipeline has a single linear path and nothing
//! is retried.

use std::io;
use std::path::PathBuf;

/// Errors raised while collecting answers, loading configs, or writing the project
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The user cancelled the prompt session (Esc, Ctrl+C, closed stdin)
    #[error("prompt was cancelled, nothing was written")]
    AbortedInput,

    /// A template config file is missing or is not the expected JSON
    #[error("failed to load {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// The project directory already exists
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// The template root (or templates directory) is absent
    #[error("template source not found: {} (is the installation complete?)", .0.display())]
    SourceMissing(PathBuf),

    /// The template manifest could not be read or parsed (a broken installation)
    #[error("invalid template manifest {}: {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },

    /// An exclusion pattern did not compile
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Copying or writing a file failed part-way; already written files stay
    #[error("failed to write {}: {source}", .path.display())]
    Materialization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Stable class name shown to the user next to the message
    pub fn kind(&self) -> &'static str {
        match self {
            ScaffoldError::AbortedInput => "AbortedInput",
            ScaffoldError::ConfigLoad { .. } => "ConfigLoadError",
            ScaffoldError::DestinationExists(_) => "DestinationExistsError",
            ScaffoldError::SourceMissing(_) | ScaffoldError::Manifest { .. } => {
                "SourceMissingError"
            }
            ScaffoldError::InvalidPattern { .. } | ScaffoldError::Materialization { .. } => {
                "MaterializationError"
            }
        }
    }

    pub(crate) fn materialization(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Materialization {
            path: path.into(),
            source,
        }
    }
}
