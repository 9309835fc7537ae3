//! Render command implementation
//!
//! Renders a request to a WAV file and optionally writes the response
//! document next to it.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mzwave_backend_audio::{synthesize_with_depth, BitDepth, SynthesisOutput};
use mzwave_spec::{BackendError, SynthesisStatus};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, synthesis_error_to_json, JsonError, RenderResult};
use super::reporting::{self, prepare, Prepared};
use crate::input::SynthesisArgs;

/// Arguments of the `render` command.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to a JSON request document
    #[arg(short, long)]
    pub request: Option<String>,

    /// Path to a text file of `mz intensity` pairs
    #[arg(short, long)]
    pub peaks: Option<String>,

    /// Output WAV path
    #[arg(short, long)]
    pub out: String,

    /// Also write the response document (JSON) to this path
    #[arg(long)]
    pub response: Option<String>,

    /// Bits per sample (16 or 24)
    #[arg(long, default_value_t = 16)]
    pub bit_depth: u16,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub synthesis: SynthesisArgs,
}

/// Why a render did not produce files.
enum RenderFailure {
    Invalid,
    Error(JsonError),
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 if the WAV was written, 1 otherwise
pub fn run(args: &RenderArgs) -> Result<ExitCode> {
    let start = Instant::now();
    if !args.json {
        let source = args.request.as_deref().or(args.peaks.as_deref()).unwrap_or("-");
        println!("{} {}", "Rendering:".cyan().bold(), source);
    }

    let prepared = match prepare(
        args.request.as_deref(),
        args.peaks.as_deref(),
        &args.synthesis,
    ) {
        Ok(prepared) => prepared,
        Err(e) => {
            if args.json {
                reporting::print_input_failure::<RenderResult>(
                    &e,
                    args.request.as_deref(),
                    args.peaks.as_deref(),
                )?;
            } else {
                println!("\n{} {}", "FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };

    if !args.json {
        reporting::print_source(&prepared);
        reporting::print_validation_results(&prepared.validation);
    }

    match render(&prepared, args) {
        Ok(result) => {
            if args.json {
                reporting::print_json(&prepared.success(result))?;
            } else {
                print_summary(&result, start.elapsed().as_millis() as u64);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            if args.json {
                let errors = match failure {
                    RenderFailure::Invalid => prepared.json_errors(),
                    RenderFailure::Error(error) => vec![error],
                };
                reporting::print_json(&prepared.failure::<RenderResult>(errors))?;
            } else {
                match failure {
                    RenderFailure::Invalid => println!(
                        "\n{} Request has {} error(s)",
                        "FAILED".red().bold(),
                        prepared.validation.errors.len()
                    ),
                    RenderFailure::Error(error) => println!(
                        "\n{} [{}] {}",
                        "FAILED".red().bold(),
                        error.code.red(),
                        error.message
                    ),
                }
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn render(prepared: &Prepared, args: &RenderArgs) -> Result<RenderResult, RenderFailure> {
    if !prepared.validation.is_ok() {
        return Err(RenderFailure::Invalid);
    }

    let bit_depth = BitDepth::from_bits(args.bit_depth).ok_or_else(|| {
        RenderFailure::Error(JsonError::new(
            error_codes::BIT_DEPTH,
            format!("unsupported bit depth {} (expected 16 or 24)", args.bit_depth),
        ))
    })?;

    let request = &prepared.load.request;
    let peaks = request
        .resolve_peaks()
        .map_err(|e| RenderFailure::Error(JsonError::new(error_codes::JSON_PARSE, e.to_string())))?;
    let output = synthesize_with_depth(&peaks, &request.algorithm, &request.audio_params(), bit_depth)
        .map_err(|e| {
            log::debug!("synthesis failed with {}", e.code());
            RenderFailure::Error(synthesis_error_to_json(&e))
        })?;

    write_outputs(prepared, args, output).map_err(|e| {
        RenderFailure::Error(JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e)))
    })
}

fn write_outputs(
    prepared: &Prepared,
    args: &RenderArgs,
    output: SynthesisOutput,
) -> Result<RenderResult> {
    let request = &prepared.load.request;

    std::fs::write(&args.out, &output.wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", args.out))?;

    let mut result = RenderResult {
        wav_path: args.out.clone(),
        response_path: None,
        bit_depth: output.wav.bit_depth.bits(),
        num_frames: output.wav.num_frames,
        audible_partials: output.audible_partials,
        divisor: output.divisor,
        status: output.status,
        pcm_hash: output.wav.pcm_hash.clone(),
        spectrum: output.table.clone(),
    };

    if let Some(path) = &args.response {
        let response = output.into_response(request);
        let json = response
            .to_json_pretty()
            .context("Failed to serialize response document")?;
        std::fs::write(Path::new(path), json)
            .with_context(|| format!("Failed to write response file: {}", path))?;
        result.response_path = Some(path.clone());
    }

    Ok(result)
}

fn print_summary(result: &RenderResult, duration_ms: u64) {
    println!(
        "\n{} {} frames, {}-bit, {}/{} partials audible",
        "Audio:".dimmed(),
        result.num_frames,
        result.bit_depth,
        result.audible_partials,
        result.spectrum.len()
    );
    if result.divisor > 1.0 {
        println!("{} scaled by 1/{:.4}", "Normalization:".dimmed(), result.divisor);
    }
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
    if result.status == SynthesisStatus::EmptySpectrum {
        println!(
            "  {} no peak maps to an audible frequency; output is silent",
            "!".yellow()
        );
    }

    println!("\n{} {}", "Wrote:".dimmed(), result.wav_path);
    if let Some(path) = &result.response_path {
        println!("{} {}", "Wrote:".dimmed(), path);
    }
    println!(
        "\n{} Rendered ({}ms)",
        "SUCCESS".green().bold(),
        duration_ms
    );
}
