//! Input abstraction for loading sonification requests.
//!
//! A request comes either from a JSON request document or from a plain text
//! file of `mz intensity` pairs. Command-line flags are applied on top of
//! whichever source was loaded, so a saved request can be re-rendered with a
//! different algorithm or sample rate without editing the file.

use clap::Args;
use mzwave_spec::{AlgorithmParams, SonifyRequest};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Identifies where a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON request document.
    Request,
    /// Plain text peak list.
    Peaks,
}

impl SourceKind {
    /// Returns the string representation for output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Request => "request",
            SourceKind::Peaks => "peaks",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of loading a request.
#[derive(Debug)]
pub struct LoadResult {
    /// The request with all flag overrides applied.
    pub request: SonifyRequest,
    /// Source format.
    pub source_kind: SourceKind,
    /// Path the request was loaded from.
    pub source_path: PathBuf,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading a request.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Neither `--request` nor `--peaks` was given.
    MissingSource,

    /// Both `--request` and `--peaks` were given.
    ConflictingSources,

    /// JSON parsing failed.
    JsonParse { message: String },

    /// A flag does not apply to the selected algorithm.
    InvalidFlag { flag: String, message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::MissingSource => write!(f, "one of --request or --peaks is required"),
            InputError::ConflictingSources => {
                write!(f, "--request and --peaks cannot be used together")
            }
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
            InputError::InvalidFlag { flag, message } => write!(f, "--{}: {}", flag, message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Synthesis settings that can be given on the command line.
///
/// Every field is optional; unset fields keep the value from the request
/// file, or the request defaults for a peak text file.
#[derive(Debug, Clone, Default, Args)]
pub struct SynthesisArgs {
    /// Frequency mapping algorithm
    #[arg(long, value_parser = ["linear", "inverse", "modulo"])]
    pub algorithm: Option<String>,

    /// Linear: Hz added to each m/z
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,

    /// Inverse: numerator of scale / (mz + shift)
    #[arg(long, allow_hyphen_values = true)]
    pub scale: Option<f64>,

    /// Inverse: m/z shift applied before inversion
    #[arg(long, allow_hyphen_values = true)]
    pub shift: Option<f64>,

    /// Modulo: multiplier applied to m/z before wrapping
    #[arg(long, allow_hyphen_values = true)]
    pub factor: Option<f64>,

    /// Modulo: wrap range in Hz
    #[arg(long, allow_hyphen_values = true)]
    pub modulus: Option<f64>,

    /// Modulo: lowest output frequency in Hz
    #[arg(long, allow_hyphen_values = true)]
    pub base: Option<f64>,

    /// Duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Compound label for the response
    #[arg(long)]
    pub compound: Option<String>,
}

impl SynthesisArgs {
    /// Applies the flags to a request.
    ///
    /// `--algorithm` switches to that algorithm's defaults unless the request
    /// already uses it; parameter flags then override single fields. A
    /// parameter flag that does not belong to the resulting algorithm is an
    /// error.
    pub fn apply(&self, request: &mut SonifyRequest) -> Result<(), InputError> {
        if let Some(name) = self.algorithm.as_deref() {
            if request.algorithm.name() != name {
                request.algorithm =
                    AlgorithmParams::from_name(name).ok_or_else(|| InputError::InvalidFlag {
                        flag: "algorithm".to_string(),
                        message: format!("unknown algorithm '{}'", name),
                    })?;
            }
        }

        let algorithm_name = request.algorithm.name();
        let mut misplaced = None;
        match &mut request.algorithm {
            AlgorithmParams::Linear { offset } => {
                set(offset, self.offset);
                misplaced = misplaced
                    .or(self.scale.map(|_| "scale"))
                    .or(self.shift.map(|_| "shift"));
            }
            AlgorithmParams::Inverse { scale, shift } => {
                set(scale, self.scale);
                set(shift, self.shift);
                misplaced = misplaced.or(self.offset.map(|_| "offset"));
            }
            AlgorithmParams::Modulo {
                factor,
                modulus,
                base,
            } => {
                set(factor, self.factor);
                set(modulus, self.modulus);
                set(base, self.base);
                misplaced = misplaced
                    .or(self.offset.map(|_| "offset"))
                    .or(self.scale.map(|_| "scale"))
                    .or(self.shift.map(|_| "shift"));
            }
        }
        if !matches!(request.algorithm, AlgorithmParams::Modulo { .. }) {
            misplaced = misplaced
                .or(self.factor.map(|_| "factor"))
                .or(self.modulus.map(|_| "modulus"))
                .or(self.base.map(|_| "base"));
        }
        if let Some(flag) = misplaced {
            return Err(InputError::InvalidFlag {
                flag: flag.to_string(),
                message: format!("does not apply to the {} algorithm", algorithm_name),
            });
        }

        set(&mut request.duration, self.duration);
        set(&mut request.sample_rate, self.sample_rate);
        if let Some(compound) = &self.compound {
            request.compound = Some(compound.clone());
        }

        Ok(())
    }
}

fn set<T: Copy>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Loads a request from exactly one of a request file or a peaks file, then
/// applies the command-line flags.
///
/// # Example
/// ```no_run
/// use mzwave_cli::input::{load_input, SynthesisArgs};
///
/// let result = load_input(None, Some("caffeine.txt"), &SynthesisArgs::default()).unwrap();
/// println!("Loaded {} from {}", result.source_kind, result.source_path.display());
/// ```
pub fn load_input(
    request_path: Option<&str>,
    peaks_path: Option<&str>,
    args: &SynthesisArgs,
) -> Result<LoadResult, InputError> {
    let mut result = match (request_path, peaks_path) {
        (Some(path), None) => load_request(Path::new(path))?,
        (None, Some(path)) => load_peaks(Path::new(path))?,
        (Some(_), Some(_)) => return Err(InputError::ConflictingSources),
        (None, None) => return Err(InputError::MissingSource),
    };

    args.apply(&mut result.request)?;
    log::debug!(
        "loaded {} from {} ({})",
        result.source_kind,
        result.source_path.display(),
        result.request.algorithm
    );
    Ok(result)
}

/// Loads a JSON request document.
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let content = read_source(path)?;
    let request = SonifyRequest::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        request,
        source_kind: SourceKind::Request,
        source_path: path.to_path_buf(),
        source_hash: blake3::hash(content.as_bytes()).to_hex().to_string(),
    })
}

/// Loads a text file of `mz intensity` pairs as a custom spectrum.
///
/// The text is kept verbatim as the request's `spectrum_text`; it is parsed
/// when the request is validated or rendered.
pub fn load_peaks(path: &Path) -> Result<LoadResult, InputError> {
    let content = read_source(path)?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    Ok(LoadResult {
        request: SonifyRequest::from_spectrum_text(content),
        source_kind: SourceKind::Peaks,
        source_path: path.to_path_buf(),
        source_hash,
    })
}

fn read_source(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
