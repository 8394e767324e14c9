//! Fail-soft loaders for answer and result files
//!
//! Three on-disk shapes are supported, chosen by file extension:
//! - `.csv`: flat table (answers carry one row per candidate; results carry an
//!   explicit rank column)
//! - `.yaml` / `.yml`: hierarchical records keyed by fault id
//! - anything else: JSON maps, the default interchange shape
//!
//! Loaders never propagate failure. A missing or malformed file yields an
//! empty collection plus a diagnostic string for the caller to surface, so a
//! judging run always completes and always reports a grade.

mod answers;
pub mod demo;
mod results;

use std::io::ErrorKind;
use std::path::Path;

pub use answers::load_answers;
pub use results::load_results;

use crate::error::{Result, VerdictError};
use crate::fault::FaultId;

/// Outcome of a fail-soft load: data (possibly empty) plus an advisory
/// diagnostic when the source could not be used.
#[derive(Debug)]
pub struct Loaded<T> {
    pub data: T,
    pub diagnostic: Option<String>,
}

/// On-disk shape, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    /// Flat delimiter-separated table
    Table,
    /// Hierarchical YAML records
    Tree,
    /// JSON maps (default when the extension is unrecognized)
    Json,
}

impl SourceFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => SourceFormat::Table,
            Some("yaml") | Some("yml") => SourceFormat::Tree,
            _ => SourceFormat::Json,
        }
    }
}

/// Convert a strict load result into the fail-soft contract.
///
/// The diagnostic distinguishes a missing file, an unreadable file, and
/// malformed content, but none of them are fatal.
fn fail_soft<T: Default>(path: &Path, outcome: Result<T>) -> Loaded<T> {
    match outcome {
        Ok(data) => Loaded {
            data,
            diagnostic: None,
        },
        Err(VerdictError::Io(err)) if err.kind() == ErrorKind::NotFound => Loaded {
            data: T::default(),
            diagnostic: Some(format!(
                "cannot read \"{}\": file not found",
                path.display()
            )),
        },
        Err(VerdictError::Io(err)) => Loaded {
            data: T::default(),
            diagnostic: Some(format!("cannot read \"{}\": {}", path.display(), err)),
        },
        Err(err) => Loaded {
            data: T::default(),
            diagnostic: Some(format!("failed to parse \"{}\": {}", path.display(), err)),
        },
    }
}

/// Stringify a YAML mapping key into a fault id.
///
/// Hand-written YAML tends to carry bare integer keys; both strings and
/// integers are accepted and compared as their string form.
fn scalar_fault_id(key: &serde_yaml::Value) -> Result<FaultId> {
    match key {
        serde_yaml::Value::String(text) => Ok(text.clone()),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        other => Err(VerdictError::invalid_value(
            "fault id",
            format!("{:?} (expected a string or integer key)", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("result.csv")),
            SourceFormat::Table
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("answer.yaml")),
            SourceFormat::Tree
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("answer.yml")),
            SourceFormat::Tree
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("answer.json")),
            SourceFormat::Json
        );
        // Unrecognized extensions fall back to JSON
        assert_eq!(
            SourceFormat::from_path(Path::new("answer.dat")),
            SourceFormat::Json
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("answer")),
            SourceFormat::Json
        );
    }
}
