//! Shared loading, validation, and printing helpers for commands.

use anyhow::{Context, Result};
use colored::Colorize;
use mzwave_spec::{canonical_request_hash, validate_request, ValidationResult};
use serde::Serialize;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, CommandOutput,
    JsonError, JsonWarning,
};
use crate::input::{load_input, InputError, LoadResult, SynthesisArgs};

/// A loaded and validated request.
pub(super) struct Prepared {
    pub load: LoadResult,
    pub validation: ValidationResult,
    pub request_hash: Option<String>,
}

impl Prepared {
    /// Validation warnings as JSON.
    pub fn json_warnings(&self) -> Vec<JsonWarning> {
        self.validation
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect()
    }

    /// Validation errors as JSON.
    pub fn json_errors(&self) -> Vec<JsonError> {
        self.validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect()
    }

    /// A failed output carrying this request's hashes and warnings.
    pub fn failure<T>(&self, errors: Vec<JsonError>) -> CommandOutput<T> {
        CommandOutput::failure(
            errors,
            self.json_warnings(),
            self.request_hash.clone(),
            Some(self.load.source_hash.clone()),
        )
    }

    /// A successful output carrying this request's hashes and warnings.
    pub fn success<T>(&self, result: T) -> CommandOutput<T> {
        CommandOutput::success(
            result,
            self.request_hash.clone(),
            self.load.source_hash.clone(),
            self.json_warnings(),
        )
    }
}

/// Loads a request, applies flags, and validates it.
pub(super) fn prepare(
    request_path: Option<&str>,
    peaks_path: Option<&str>,
    args: &SynthesisArgs,
) -> Result<Prepared, InputError> {
    let load = load_input(request_path, peaks_path, args)?;
    let validation = validate_request(&load.request);
    let request_hash = match canonical_request_hash(&load.request) {
        Ok(hash) => Some(hash),
        Err(e) => {
            log::warn!("could not hash request: {}", e);
            None
        }
    };

    Ok(Prepared {
        load,
        validation,
        request_hash,
    })
}

/// Prints the JSON failure document for an input error.
pub(super) fn print_input_failure<T: Serialize>(
    err: &InputError,
    request_path: Option<&str>,
    peaks_path: Option<&str>,
) -> Result<()> {
    let file = request_path.or(peaks_path);
    let output: CommandOutput<T> =
        CommandOutput::failure(vec![input_error_to_json(err, file)], vec![], None, None);
    print_json(&output)
}

/// Prints a value as pretty JSON on stdout.
pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Prints the source line and request hash.
pub(super) fn print_source(prepared: &Prepared) {
    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        prepared.load.source_path.display(),
        prepared.load.source_kind
    );
    if let Some(hash) = &prepared.request_hash {
        println!("{} {}", "Request hash:".dimmed(), &hash[..16]);
    }
}

/// Print validation results to the console
pub(super) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}
