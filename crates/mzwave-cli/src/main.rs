//! mzwave CLI - Command-line interface for mass spectrum sonification
//!
//! This binary provides commands for validating, inspecting, and rendering
//! sonification requests.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use mzwave_cli::commands;
use mzwave_cli::commands::render::RenderArgs;
use mzwave_cli::input::SynthesisArgs;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MZWAVE_LOG";

/// mzwave - Render mass spectra as sound
#[derive(Parser)]
#[command(name = "mzwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log pipeline stages to stderr (overridden by MZWAVE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a spectrum to a WAV file
    Render(RenderArgs),

    /// Validate a request file without rendering
    Validate {
        /// Path to the JSON request document
        #[arg(short, long)]
        request: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the per-peak transformation table without rendering
    Inspect {
        /// Path to a JSON request document
        #[arg(short, long)]
        request: Option<String>,

        /// Path to a text file of `mz intensity` pairs
        #[arg(short, long)]
        peaks: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        synthesis: SynthesisArgs,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Validate { request, json } => commands::validate::run(&request, json),
        Commands::Inspect {
            request,
            peaks,
            json,
            synthesis,
        } => commands::inspect::run(request.as_deref(), peaks.as_deref(), &synthesis, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_with_overrides() {
        let cli = Cli::try_parse_from([
            "mzwave",
            "render",
            "--peaks",
            "caffeine.txt",
            "--out",
            "caffeine.wav",
            "--algorithm",
            "inverse",
            "--shift",
            "-0.5",
            "--sample-rate",
            "22050",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.peaks.as_deref(), Some("caffeine.txt"));
                assert_eq!(args.out, "caffeine.wav");
                assert_eq!(args.bit_depth, 16);
                assert_eq!(args.synthesis.algorithm.as_deref(), Some("inverse"));
                assert_eq!(args.synthesis.shift, Some(-0.5));
                assert_eq!(args.synthesis.sample_rate, Some(22050));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from([
            "mzwave",
            "inspect",
            "--peaks",
            "p.txt",
            "--algorithm",
            "cubic",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from(["mzwave", "validate", "--request", "r.json", "--json"])
            .unwrap();
        match cli.command {
            Commands::Validate { request, json } => {
                assert_eq!(request, "r.json");
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }
}
