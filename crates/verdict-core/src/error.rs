//! Error types and exit codes for verdict
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)

use thiserror::Error;

/// Exit codes reported by the verdict binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during verdict operations
#[derive(Error, Debug)]
pub enum VerdictError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl VerdictError {
    /// Create an error for an invalid value in source data
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        VerdictError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            VerdictError::UnknownFormat(_)
            | VerdictError::DuplicateFormat
            | VerdictError::UsageError(_)
            | VerdictError::InvalidValue { .. } => ExitCode::Usage,

            VerdictError::Io(_)
            | VerdictError::Json(_)
            | VerdictError::Yaml(_)
            | VerdictError::Csv(_)
            | VerdictError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            VerdictError::UnknownFormat(_) => "unknown_format",
            VerdictError::DuplicateFormat => "duplicate_format",
            VerdictError::UsageError(_) => "usage_error",
            VerdictError::InvalidValue { .. } => "invalid_value",
            VerdictError::Io(_) => "io_error",
            VerdictError::Json(_) => "json_error",
            VerdictError::Yaml(_) => "yaml_error",
            VerdictError::Csv(_) => "csv_error",
            VerdictError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for verdict operations
pub type Result<T> = std::result::Result<T, VerdictError>;
