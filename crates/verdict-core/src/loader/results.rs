//! Submission loading
//!
//! Produces the canonical `map<fault id, ranked submissions>`. The tabular
//! shape carries an explicit rank column and entries are sorted by it before
//! resolution, since row order in the file is not guaranteed to be rank
//! order. The hierarchical and JSON shapes are already ordered sequences.

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::{fail_soft, scalar_fault_id, Loaded, SourceFormat};
use crate::error::{Result, VerdictError};
use crate::fault::{FaultId, Submission};

/// Load the ranked-submission map from `path`, fail-soft.
pub fn load_results(path: &Path) -> Loaded<BTreeMap<FaultId, Vec<Submission>>> {
    let loaded = fail_soft(path, read_results(path));
    tracing::debug!(path = %path.display(), faults = loaded.data.len(), "load_results");
    loaded
}

fn read_results(path: &Path) -> Result<BTreeMap<FaultId, Vec<Submission>>> {
    match SourceFormat::from_path(path) {
        SourceFormat::Table => from_table(path),
        SourceFormat::Tree => from_tree(path),
        SourceFormat::Json => from_json(path),
    }
}

/// One row of the flat result table.
#[derive(Debug, Deserialize)]
struct ResultRow {
    fault_id: String,
    rank: u32,
    category: String,
    component_id: String,
    indicator: Option<String>,
}

fn from_table(path: &Path) -> Result<BTreeMap<FaultId, Vec<Submission>>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut grouped: BTreeMap<FaultId, Vec<(u32, Submission)>> = BTreeMap::new();
    for row in reader.deserialize::<ResultRow>() {
        let ResultRow {
            fault_id,
            rank,
            category,
            component_id,
            indicator,
        } = row?;
        grouped.entry(fault_id).or_default().push((
            rank,
            Submission::new(&category, &component_id, indicator.as_deref()),
        ));
    }

    Ok(grouped
        .into_iter()
        .map(|(fault_id, mut ranked)| {
            // Stable sort: equal ranks keep file order
            ranked.sort_by_key(|(rank, _)| *rank);
            let entries = ranked.into_iter().map(|(_, entry)| entry).collect();
            (fault_id, entries)
        })
        .collect())
}

/// Hierarchical submission record: fault id maps to an ordered list of these.
#[derive(Debug, Deserialize)]
struct ResultDoc {
    category: String,
    component_id: String,
    #[serde(default)]
    indicator: Option<String>,
}

fn from_tree(path: &Path) -> Result<BTreeMap<FaultId, Vec<Submission>>> {
    let text = fs::read_to_string(path)?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&text)?;
    let mapping = doc.as_mapping().ok_or_else(|| {
        VerdictError::invalid_value("result document", "expected a mapping of fault ids")
    })?;

    let mut data = BTreeMap::new();
    for (key, value) in mapping {
        let fault_id = scalar_fault_id(key)?;
        let records: Vec<ResultDoc> = serde_yaml::from_value(value.clone())?;
        let entries = records
            .into_iter()
            .map(|record| {
                Submission::new(
                    &record.category,
                    &record.component_id,
                    record.indicator.as_deref(),
                )
            })
            .collect();
        data.insert(fault_id, entries);
    }
    Ok(data)
}

fn from_json(path: &Path) -> Result<BTreeMap<FaultId, Vec<Submission>>> {
    let file = File::open(path)?;
    let raw: BTreeMap<String, Vec<(String, String, Option<String>)>> =
        serde_json::from_reader(file)?;
    Ok(raw
        .into_iter()
        .map(|(fault_id, entries)| {
            let entries = entries
                .into_iter()
                .map(|(category, component_id, indicator)| {
                    Submission::new(&category, &component_id, indicator.as_deref())
                })
                .collect();
            (fault_id, entries)
        })
        .collect())
}
