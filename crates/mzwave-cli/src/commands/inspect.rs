//! Inspect command implementation
//!
//! Prints the transformation table for a request without rendering audio.

use anyhow::Result;
use colored::Colorize;
use mzwave_backend_audio::mapping::map_spectrum;
use mzwave_backend_audio::table::build_table;
use mzwave_backend_audio::Partial;
use mzwave_spec::TransformedPeak;
use std::process::ExitCode;

use super::json_output::{error_codes, synthesis_error_to_json, InspectResult, JsonError};
use super::reporting::{self, prepare, Prepared};
use crate::input::SynthesisArgs;

/// Run the inspect command
///
/// # Arguments
/// * `request_path` - Path to a JSON request document
/// * `peaks_path` - Path to a peak text file
/// * `args` - Flag overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the table was built, 1 otherwise
pub fn run(
    request_path: Option<&str>,
    peaks_path: Option<&str>,
    args: &SynthesisArgs,
    json_output: bool,
) -> Result<ExitCode> {
    let prepared = match prepare(request_path, peaks_path, args) {
        Ok(prepared) => prepared,
        Err(e) => {
            if json_output {
                reporting::print_input_failure::<InspectResult>(&e, request_path, peaks_path)?;
            } else {
                println!("{} {}", "FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };

    if !json_output {
        reporting::print_source(&prepared);
        reporting::print_validation_results(&prepared.validation);
    }

    let inspected = if prepared.validation.is_ok() {
        inspect(&prepared).map_err(Some)
    } else {
        Err(None)
    };

    match inspected {
        Ok(result) => {
            if json_output {
                reporting::print_json(&prepared.success(result))?;
            } else {
                print_table(&result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if json_output {
                let errors = error.map_or_else(|| prepared.json_errors(), |e| vec![e]);
                reporting::print_json(&prepared.failure::<InspectResult>(errors))?;
            } else {
                match error {
                    Some(error) => println!(
                        "\n{} [{}] {}",
                        "FAILED".red().bold(),
                        error.code.red(),
                        error.message
                    ),
                    None => println!(
                        "\n{} Request has {} error(s)",
                        "FAILED".red().bold(),
                        prepared.validation.errors.len()
                    ),
                }
            }
            Ok(ExitCode::from(1))
        }
    }
}

/// Builds the table. `Err` carries the first mapping failure.
fn inspect(prepared: &Prepared) -> Result<InspectResult, JsonError> {
    let request = &prepared.load.request;
    let peaks = request
        .resolve_peaks()
        .map_err(|e| JsonError::new(error_codes::JSON_PARSE, e.to_string()))?;
    let mapped =
        map_spectrum(&peaks, &request.algorithm).map_err(|e| synthesis_error_to_json(&e))?;
    let spectrum = build_table(&peaks, &mapped);

    let nyquist = request.audio_params().nyquist();
    Ok(InspectResult {
        algorithm: request.algorithm.name().to_string(),
        parameters: request.algorithm.parameters(),
        nyquist,
        audible_partials: spectrum.iter().filter(|row| is_audible(row, nyquist)).count(),
        spectrum,
    })
}

fn is_audible(row: &TransformedPeak, nyquist: f64) -> bool {
    Partial::new(row.frequency, row.amplitude_linear).is_audible(nyquist)
}

fn print_table(result: &InspectResult) {
    println!(
        "\n{} {} {}",
        "Algorithm:".dimmed(),
        result.algorithm,
        result.parameters
    );
    println!(
        "{:>5}  {:>12}  {:>12}  {:>12}  {:>8}  {:>10}",
        "#", "m/z", "Hz", "intensity", "linear", "dB"
    );
    for (i, row) in result.spectrum.iter().enumerate() {
        let line = format!(
            "{:>5}  {:>12.4}  {:>12.4}  {:>12.4}  {:>8.4}  {:>10.4}",
            i, row.mz, row.frequency, row.intensity, row.amplitude_linear, row.amplitude_db
        );
        if is_audible(row, result.nyquist) {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }
    println!(
        "\n{} {}/{} partials audible below {} Hz",
        "Summary:".dimmed(),
        result.audible_partials,
        result.spectrum.len(),
        result.nyquist
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_peaks_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("peaks.txt");
        std::fs::write(&path, "300 1000\n301 500\n30000 10\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let code = run(None, Some(&path), &SynthesisArgs::default(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let code = run(None, Some(&path), &SynthesisArgs::default(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn inspect_reports_singularity() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("peaks.txt");
        std::fs::write(&path, "-1 100").unwrap();
        let path = path.to_string_lossy().into_owned();

        let args = SynthesisArgs {
            algorithm: Some("inverse".to_string()),
            ..Default::default()
        };
        let code = run(None, Some(&path), &args, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
