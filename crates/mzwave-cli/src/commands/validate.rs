//! Validate command implementation
//!
//! Validates a request document without rendering audio.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::ValidateResult;
use super::reporting::{self, prepare};
use crate::input::SynthesisArgs;

/// Run the validate command
///
/// # Arguments
/// * `request_path` - Path to the JSON request document
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path)
    } else {
        run_human(request_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(request_path: &str) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Validating:".cyan().bold(), request_path);

    let prepared = match prepare(Some(request_path), None, &SynthesisArgs::default()) {
        Ok(prepared) => prepared,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
    };
    reporting::print_source(&prepared);
    reporting::print_validation_results(&prepared.validation);

    let duration_ms = start.elapsed().as_millis() as u64;
    if prepared.validation.is_ok() {
        println!(
            "\n{} Request is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            prepared.validation.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(request_path: &str) -> Result<ExitCode> {
    let prepared = match prepare(Some(request_path), None, &SynthesisArgs::default()) {
        Ok(prepared) => prepared,
        Err(e) => {
            reporting::print_input_failure::<ValidateResult>(&e, Some(request_path), None)?;
            return Ok(ExitCode::from(1));
        }
    };

    let output = if prepared.validation.is_ok() {
        let peak_count = prepared
            .load
            .request
            .resolve_peaks()
            .map(|peaks| peaks.len())
            .unwrap_or_default();
        prepared.success(ValidateResult {
            source_kind: prepared.load.source_kind.as_str().to_string(),
            peak_count,
            algorithm: prepared.load.request.algorithm.name().to_string(),
        })
    } else {
        prepared.failure(prepared.json_errors())
    };

    reporting::print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_request(dir: &tempfile::TempDir, content: &str) -> String {
        let path = dir.path().join("request.json");
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn validate_accepts_valid_request() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(
            &tmp,
            r#"{ "compound": "Test", "spectrum_text": "300 1000 301 500", "duration": 1 }"#,
        );

        assert_eq!(run(&path, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&path, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn validate_rejects_out_of_range_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(
            &tmp,
            r#"{ "peaks": [{ "mz": 300, "intensity": 1 }], "sample_rate": 1000 }"#,
        );

        assert_eq!(run(&path, false).unwrap(), ExitCode::from(1));
        assert_eq!(run(&path, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn validate_missing_file_fails() {
        assert_eq!(
            run("/nonexistent/request.json", true).unwrap(),
            ExitCode::from(1)
        );
        assert_eq!(
            run("/nonexistent/request.json", false).unwrap(),
            ExitCode::from(1)
        );
    }
}
