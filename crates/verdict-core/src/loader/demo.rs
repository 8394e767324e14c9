//! Bundled sample dataset for end-to-end pipeline checks
//!
//! `verdict demo` writes these two files; re-running `verdict judge` on them
//! earns [`SAMPLE_GRADE`]: fault 1 is missed (0), fault 2 matches at rank 0
//! (100), fault 3 matches at rank 1 (20), fault 4 has no submission (0).

use std::fs::File;
use std::path::Path;

use super::SourceFormat;
use crate::error::Result;

/// Grade the sample submission earns against the sample ground truth.
pub const SAMPLE_GRADE: u64 = 120;

type SampleAnswer = (&'static str, &'static str, &'static str, &'static [Option<&'static str>]);
type SampleEntry = (&'static str, &'static str, Option<&'static str>);

const SAMPLE_ANSWERS: &[SampleAnswer] = &[
    ("1", "os", "os_020", &[Some("CPU_user_time"), Some("CPU_util_pct")]),
    // Network error: the fault itself is the target, no indicator required
    ("2", "docker", "docker_001", &[None]),
    ("3", "db", "db_003", &[Some("User_Commit")]),
    ("4", "os", "os_019", &[Some("Memory_free")]),
];

const SAMPLE_RESULTS: &[(&str, &[SampleEntry])] = &[
    ("1", &[("docker", "docker_001", None)]),
    ("2", &[("docker", "docker_001", None)]),
    ("3", &[("db", "db_003", None), ("db", "db_003", Some("User_Commit"))]),
];

/// Write the sample ground truth in the extension-selected shape.
///
/// Returns `Ok(false)` without touching the file when `path` already exists;
/// the caller decides how to warn.
pub fn write_sample_answers(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    match SourceFormat::from_path(path) {
        SourceFormat::Table => answers_to_table(path),
        SourceFormat::Tree => answers_to_tree(path),
        SourceFormat::Json => answers_to_json(path),
    }?;
    Ok(true)
}

/// Write the sample submitted answer in the extension-selected shape.
///
/// Same refuse-overwrite contract as [`write_sample_answers`]; the two writes
/// are independent.
pub fn write_sample_results(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    match SourceFormat::from_path(path) {
        SourceFormat::Table => results_to_table(path),
        SourceFormat::Tree => results_to_tree(path),
        SourceFormat::Json => results_to_json(path),
    }?;
    Ok(true)
}

fn answers_to_table(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    writer.write_record(["fault_id", "category", "component_id", "indicator"])?;
    for (fault_id, category, component_id, candidates) in SAMPLE_ANSWERS {
        for candidate in *candidates {
            writer.write_record([*fault_id, category, component_id, candidate.unwrap_or("")])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn answers_to_tree(path: &Path) -> Result<()> {
    let mut doc = serde_yaml::Mapping::new();
    for (fault_id, category, component_id, candidates) in SAMPLE_ANSWERS {
        let mut record = serde_yaml::Mapping::new();
        record.insert(yaml_str("category"), yaml_str(category));
        record.insert(yaml_str("component_id"), yaml_str(component_id));
        let tokens = candidates
            .iter()
            .map(|candidate| match candidate {
                Some(token) => yaml_str(token),
                None => serde_yaml::Value::Null,
            })
            .collect();
        record.insert(yaml_str("candidates"), serde_yaml::Value::Sequence(tokens));
        doc.insert(yaml_str(fault_id), serde_yaml::Value::Mapping(record));
    }
    let text = serde_yaml::to_string(&serde_yaml::Value::Mapping(doc))?;
    std::fs::write(path, text)?;
    Ok(())
}

fn answers_to_json(path: &Path) -> Result<()> {
    let mut doc = serde_json::Map::new();
    for (fault_id, category, component_id, candidates) in SAMPLE_ANSWERS {
        doc.insert(
            (*fault_id).to_string(),
            serde_json::json!([category, component_id, candidates]),
        );
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &serde_json::Value::Object(doc))?;
    Ok(())
}

fn results_to_table(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    writer.write_record(["fault_id", "rank", "category", "component_id", "indicator"])?;
    for (fault_id, entries) in SAMPLE_RESULTS {
        for (rank, (category, component_id, indicator)) in entries.iter().enumerate() {
            writer.write_record([
                *fault_id,
                &rank.to_string(),
                category,
                component_id,
                indicator.unwrap_or(""),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn results_to_tree(path: &Path) -> Result<()> {
    let mut doc = serde_yaml::Mapping::new();
    for (fault_id, entries) in SAMPLE_RESULTS {
        let records = entries
            .iter()
            .map(|(category, component_id, indicator)| {
                let mut record = serde_yaml::Mapping::new();
                record.insert(yaml_str("category"), yaml_str(category));
                record.insert(yaml_str("component_id"), yaml_str(component_id));
                if let Some(token) = indicator {
                    record.insert(yaml_str("indicator"), yaml_str(token));
                }
                serde_yaml::Value::Mapping(record)
            })
            .collect();
        doc.insert(yaml_str(fault_id), serde_yaml::Value::Sequence(records));
    }
    let text = serde_yaml::to_string(&serde_yaml::Value::Mapping(doc))?;
    std::fs::write(path, text)?;
    Ok(())
}

fn results_to_json(path: &Path) -> Result<()> {
    let mut doc = serde_json::Map::new();
    for (fault_id, entries) in SAMPLE_RESULTS {
        doc.insert(
            (*fault_id).to_string(),
            serde_json::json!(entries),
        );
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &serde_json::Value::Object(doc))?;
    Ok(())
}

fn yaml_str(text: &str) -> serde_yaml::Value {
    serde_yaml::Value::String(text.to_string())
}
