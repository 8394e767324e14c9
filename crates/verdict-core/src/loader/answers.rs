//! Ground-truth loading
//!
//! Produces the canonical `map<fault id, Answer>` from any of the supported
//! on-disk shapes. Candidate fan-in (several rows or entries contributing to
//! one fault) collapses into a single answer per fault.

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::{fail_soft, scalar_fault_id, Loaded, SourceFormat};
use crate::error::{Result, VerdictError};
use crate::fault::{Answer, FaultId};

/// Load the ground-truth map from `path`, fail-soft.
pub fn load_answers(path: &Path) -> Loaded<BTreeMap<FaultId, Answer>> {
    let loaded = fail_soft(path, read_answers(path));
    tracing::debug!(path = %path.display(), faults = loaded.data.len(), "load_answers");
    loaded
}

fn read_answers(path: &Path) -> Result<BTreeMap<FaultId, Answer>> {
    match SourceFormat::from_path(path) {
        SourceFormat::Table => from_table(path),
        SourceFormat::Tree => from_tree(path),
        SourceFormat::Json => from_json(path),
    }
}

/// One row of the flat answer table; several rows fan in to one fault.
#[derive(Debug, Deserialize)]
struct AnswerRow {
    fault_id: String,
    category: String,
    component_id: String,
    indicator: Option<String>,
}

fn from_table(path: &Path) -> Result<BTreeMap<FaultId, Answer>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut data: BTreeMap<FaultId, Answer> = BTreeMap::new();
    for row in reader.deserialize::<AnswerRow>() {
        let AnswerRow {
            fault_id,
            category,
            component_id,
            indicator,
        } = row?;
        // The first row for a fault fixes its category and component id
        data.entry(fault_id)
            .or_insert_with(|| {
                Answer::new(&category, &component_id, std::iter::empty::<Option<&str>>())
            })
            .add_candidate(indicator.as_deref());
    }
    Ok(data)
}

/// Hierarchical answer record: fault id maps to one of these.
#[derive(Debug, Deserialize)]
struct AnswerDoc {
    category: String,
    component_id: String,
    #[serde(default)]
    candidates: Vec<Option<String>>,
}

fn from_tree(path: &Path) -> Result<BTreeMap<FaultId, Answer>> {
    let text = fs::read_to_string(path)?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&text)?;
    let mapping = doc.as_mapping().ok_or_else(|| {
        VerdictError::invalid_value("answer document", "expected a mapping of fault ids")
    })?;

    let mut data = BTreeMap::new();
    for (key, value) in mapping {
        let fault_id = scalar_fault_id(key)?;
        let record: AnswerDoc = serde_yaml::from_value(value.clone())?;
        data.insert(
            fault_id,
            Answer::new(&record.category, &record.component_id, record.candidates),
        );
    }
    Ok(data)
}

fn from_json(path: &Path) -> Result<BTreeMap<FaultId, Answer>> {
    let file = File::open(path)?;
    let raw: BTreeMap<String, (String, String, Vec<Option<String>>)> =
        serde_json::from_reader(file)?;
    Ok(raw
        .into_iter()
        .map(|(fault_id, (category, component_id, candidates))| {
            (fault_id, Answer::new(&category, &component_id, candidates))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::Submission;
    use crate::token::Token;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_json_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "answer.json",
            r#"{
                "1": ["os", "os_020", ["CPU_user_time", "CPU_util_pct"]],
                "2": ["docker", "docker_001", [null]]
            }"#,
        );

        let loaded = load_answers(&path);
        assert!(loaded.diagnostic.is_none());
        assert_eq!(loaded.data.len(), 2);
        let answer = &loaded.data["1"];
        assert_eq!(answer.category(), "OS");
        assert_eq!(answer.candidates().len(), 2);
        assert!(loaded.data["2"].candidates().contains(&Token::Absent));
    }

    #[test]
    fn test_table_answers_fan_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "answer.csv",
            "fault_id,category,component_id,indicator\n\
             1,os,os_020,CPU_user_time\n\
             1,os,os_020,CPU_util_pct\n\
             2,docker,docker_001,\n",
        );

        let loaded = load_answers(&path);
        assert!(loaded.diagnostic.is_none());
        assert_eq!(loaded.data.len(), 2);
        assert_eq!(loaded.data["1"].candidates().len(), 2);
        // Empty indicator field is the absent marker
        assert!(Submission::new("docker", "docker_001", None).is_correct(&loaded.data["2"]));
    }

    #[test]
    fn test_tree_answers_accept_integer_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "answer.yaml",
            "1:\n  category: os\n  component_id: os_020\n  candidates: [CPU_user_time]\n\
             2:\n  category: docker\n  component_id: docker_001\n  candidates: [~]\n",
        );

        let loaded = load_answers(&path);
        assert!(loaded.diagnostic.is_none());
        assert!(loaded.data.contains_key("1"));
        assert!(loaded.data["2"].candidates().contains(&Token::Absent));
    }

    #[test]
    fn test_missing_file_is_fail_soft() {
        let loaded = load_answers(Path::new("/nonexistent/answer.json"));
        assert!(loaded.data.is_empty());
        let diagnostic = loaded.diagnostic.unwrap();
        assert!(diagnostic.contains("file not found"), "{}", diagnostic);
    }

    #[test]
    fn test_malformed_content_is_fail_soft() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "answer.json", "{ not json");

        let loaded = load_answers(&path);
        assert!(loaded.data.is_empty());
        let diagnostic = loaded.diagnostic.unwrap();
        assert!(diagnostic.contains("failed to parse"), "{}", diagnostic);
    }
}
