//! The sonification response document.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmParams;
use crate::audio::AudioParams;
use crate::peak::TransformedPeak;
use crate::request::SonifyRequest;

/// Outcome flag attached to a successful synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisStatus {
    /// At least one partial was audible.
    Ok,
    /// The spectrum was empty or no peak was audible; the audio is silence.
    EmptySpectrum,
}

impl SynthesisStatus {
    /// Returns the string form used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisStatus::Ok => "ok",
            SynthesisStatus::EmptySpectrum => "empty_spectrum",
        }
    }
}

impl std::fmt::Display for SynthesisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response returned for a rendered request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonifyResponse {
    /// Compound name.
    pub compound: String,
    /// Spectrum record accession.
    pub accession: String,
    /// Base64 (standard alphabet, padded) of the WAV file.
    pub audio_base64: String,
    /// One row per input peak, in input order.
    pub spectrum: Vec<TransformedPeak>,
    /// Algorithm name.
    pub algorithm: String,
    /// Parameters of the selected algorithm only.
    pub parameters: serde_json::Value,
    /// Duration and sample rate.
    pub audio_settings: AudioParams,
    /// Synthesis status flag.
    pub status: SynthesisStatus,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

impl SonifyResponse {
    /// Builds a response for `request` from the rendered WAV and table.
    pub fn new(
        request: &SonifyRequest,
        wav_data: &[u8],
        spectrum: Vec<TransformedPeak>,
        status: SynthesisStatus,
        pcm_hash: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            request.compound_label(),
            request.accession_label(),
            &request.algorithm,
            request.audio_params(),
            wav_data,
            spectrum,
            status,
            pcm_hash,
        )
    }

    /// Builds a response from individual parts.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        compound: impl Into<String>,
        accession: impl Into<String>,
        algorithm: &AlgorithmParams,
        audio: AudioParams,
        wav_data: &[u8],
        spectrum: Vec<TransformedPeak>,
        status: SynthesisStatus,
        pcm_hash: impl Into<String>,
    ) -> Self {
        Self {
            compound: compound.into(),
            accession: accession.into(),
            audio_base64: base64::engine::general_purpose::STANDARD.encode(wav_data),
            spectrum,
            algorithm: algorithm.name().to_string(),
            parameters: algorithm.parameters(),
            audio_settings: audio,
            status,
            pcm_hash: pcm_hash.into(),
        }
    }

    /// Decodes `audio_base64` back into WAV bytes.
    pub fn decode_audio(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.audio_base64)
    }

    /// Serializes the response to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
