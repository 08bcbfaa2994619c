//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Application-level errors for fprgraph.
///
/// Every failure is fatal to the conversion run: there is no retry and
/// no partial output.
#[derive(Error, Debug)]
pub enum AppError {
    // I/O errors
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Document shape errors (missing sections, missing fields, bad types)
    #[error("invalid package statement document: {0}")]
    Document(#[from] serde_yaml::Error),

    // Mapping errors
    #[error("mapping for {field} value '{value}' is not implemented")]
    UnimplementedMapping { field: &'static str, value: String },

    #[error("record '{record}': series '{field}' has no value for time point index {index}")]
    MismatchedSeries {
        record: String,
        field: &'static str,
        index: usize,
    },

    // Strict-mode integrity errors
    #[error("duplicate record id '{0}'")]
    DuplicateId(String),

    #[error("reference to undeclared id '{id}' from {referenced_from}")]
    DanglingReference { id: String, referenced_from: String },

    // Config errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// The named failure for an enumerated value outside its closed set.
    pub fn unimplemented(field: &'static str, value: &str) -> Self {
        AppError::UnimplementedMapping {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
