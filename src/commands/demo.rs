//! `verdict demo` command - write the sample dataset
//!
//! Existing destinations are left untouched with a warning; the two writes
//! are independent, so one pre-existing file does not block the other.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use verdict_core::error::Result;
use verdict_core::loader::demo::{write_sample_answers, write_sample_results, SAMPLE_GRADE};

/// Execute the demo command
pub fn execute(cli: &Cli, answer: &Path, result: &Path) -> Result<()> {
    let answer_written = write_sample_answers(answer)?;
    let result_written = write_sample_results(result)?;
    tracing::debug!(answer_written, result_written, "demo");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "answer": answer.display().to_string(),
                "answer_written": answer_written,
                "result": result.display().to_string(),
                "result_written": result_written,
                "expected_grade": SAMPLE_GRADE,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            report(cli, "sample ground truth", answer, answer_written);
            report(cli, "submitted answer", result, result_written);
            if !cli.quiet {
                println!(
                    "Now, re-run with the judge action to get a grade of {}",
                    SAMPLE_GRADE
                );
            }
        }
    }

    Ok(())
}

fn report(cli: &Cli, label: &str, path: &Path, written: bool) {
    if written {
        if !cli.quiet {
            println!("Created {} at \"{}\"", label, path.display());
        }
    } else {
        eprintln!("warning: \"{}\" already exists", path.display());
    }
}
