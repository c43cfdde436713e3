use ifslang::{ValidationReport, validate_file};
use rayon::prelude::*;
use serde_json::json;

use crate::path_glob::expand_input_globs;

/// Validates every input (literal path or glob pattern) in parallel.
///
/// Reports are returned in input order.
pub fn validate_inputs(inputs: &[String]) -> Result<Vec<(String, ValidationReport)>, String> {
    if inputs.is_empty() {
        return Err("No input files given".to_string());
    }
    let files = expand_input_globs(inputs)?;
    tracing::debug!(count = files.len(), "validating files");
    Ok(files
        .par_iter()
        .map(|file| (file.clone(), validate_file(file)))
        .collect())
}

pub fn run_validate_command(inputs: Vec<String>, json_output: bool) -> Result<(), String> {
    let reports = validate_inputs(&inputs)?;
    let failed = reports.iter().filter(|(_, r)| !r.valid).count();

    if json_output {
        let files: Vec<_> = reports
            .iter()
            .map(|(file, report)| {
                json!({
                    "file": file,
                    "valid": report.valid,
                    "errors": report.errors,
                    "warnings": report.warnings,
                })
            })
            .collect();
        let body = json!({
            "summary": {
                "files": reports.len(),
                "valid": reports.len() - failed,
                "invalid": failed,
            },
            "files": files,
        });
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", text);
    } else {
        for (file, report) in &reports {
            let status = if report.valid { "OK" } else { "INVALID" };
            println!("{}: {} ({})", file, status, report.summary());
            for error in &report.errors {
                println!("  error: {}", error);
            }
            for warning in &report.warnings {
                println!("  warning: {}", warning);
            }
        }
    }

    for (file, report) in &reports {
        if report.valid {
            tracing::info!(file = %file, "validation passed");
        } else {
            tracing::error!(file = %file, errors = report.errors.len(), "validation failed");
        }
    }

    if failed > 0 {
        return Err(format!(
            "{} of {} files failed validation",
            failed,
            reports.len()
        ));
    }
    Ok(())
}
