//! `validate` command handler.
//!
//! Checks mapping documents against the expected
//! `{phase_key: [entity_id, ...]}` shape without touching any game
//! state. Every file is checked even when an earlier one fails.

use std::path::Path;

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::{MappingError, Result};
use crate::mapping::MappingStore;

/// One file's validation outcome.
struct Report {
    file: String,
    phases: usize,
    entities: usize,
    error: Option<String>,
}

/// Validate mapping documents.
///
/// # Errors
///
/// Returns a mapping error if any document is invalid; all documents
/// are still checked and reported first.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let reports: Vec<Report> = args.files.iter().map(|f| check_file(f)).collect();
    let failures = reports.iter().filter(|r| r.error.is_some()).count();

    match args.format {
        OutputFormat::Human => {
            for report in &reports {
                match &report.error {
                    None => println!(
                        "{}: ok ({} phases, {} entities)",
                        report.file, report.phases, report.entities
                    ),
                    Some(error) => println!("{}: INVALID: {error}", report.file),
                }
            }
        }
        OutputFormat::Json => {
            let value: Vec<_> = reports
                .iter()
                .map(|r| {
                    json!({
                        "file": r.file,
                        "valid": r.error.is_none(),
                        "phases": r.phases,
                        "entities": r.entities,
                        "error": r.error,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    if failures > 0 {
        return Err(MappingError::Format(format!(
            "{failures} of {} documents invalid",
            reports.len()
        ))
        .into());
    }
    Ok(())
}

fn check_file(path: &Path) -> Report {
    let file = path.display().to_string();
    let outcome = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
        .and_then(|value: serde_json::Value| {
            MappingStore::validate_document(&value).map_err(|e| e.to_string())
        });

    match outcome {
        Ok(doc) => Report {
            file,
            phases: doc.len(),
            entities: doc.values().map(Vec::len).sum(),
            error: None,
        },
        Err(error) => Report {
            file,
            phases: 0,
            entities: 0,
            error: Some(error),
        },
    }
}
