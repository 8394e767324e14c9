//! `verdict judge` command - grade a submission against ground truth
//!
//! Loading is fail-soft: a missing or malformed file yields a warning and an
//! empty side, so the run always ends in a grade (possibly 0) and exit code 0.

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use verdict_core::error::Result;
use verdict_core::loader::{load_answers, load_results};
use verdict_core::scoring::{judge, DEFAULT_GRADIENT};

/// Execute the judge command
pub fn execute(cli: &Cli, answer: &Path, result: &Path, start: Instant) -> Result<()> {
    let answers = load_answers(answer);
    let results = load_results(result);

    if cli.verbose {
        eprintln!("load: {:?}", start.elapsed());
    }

    let diagnostics: Vec<&str> = answers
        .diagnostic
        .as_deref()
        .into_iter()
        .chain(results.diagnostic.as_deref())
        .collect();

    let grade = judge(&answers.data, &results.data, &DEFAULT_GRADIENT);
    tracing::debug!(grade, elapsed = ?start.elapsed(), "judge");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "answer": answer.display().to_string(),
                "result": result.display().to_string(),
                "fault_count": answers.data.len(),
                "result_count": results.data.len(),
                "diagnostics": diagnostics,
                "grade": grade,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "\"{}\" is to be submitted, judged by \"{}\"",
                    result.display(),
                    answer.display()
                );
                println!(
                    "Fault Count: {}. Result Count: {}",
                    answers.data.len(),
                    results.data.len()
                );
                for diagnostic in &diagnostics {
                    eprintln!("warning: {}", diagnostic);
                }
            }
            println!("Grade: {}", grade);
        }
    }

    Ok(())
}
