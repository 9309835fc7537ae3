//! Main entry point for spectrum synthesis.
//!
//! This module turns a peak list into a WAV file and the table of values
//! each peak was mapped to.

use mzwave_spec::validation::{validate_duration, validate_parameter, validate_sample_rate};
use mzwave_spec::{
    AlgorithmParams, AudioParams, Peak, SonifyRequest, SonifyResponse, SynthesisStatus,
    TransformedPeak,
};

use crate::error::{SynthesisError, SynthesisResult};
use crate::mapping::map_spectrum;
use crate::synthesis::synthesize_waveform;
use crate::table::{build_table, table_partials};
use crate::wav::{BitDepth, WavResult};

/// Result of synthesizing one spectrum.
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// Encoded WAV file.
    pub wav: WavResult,
    /// One row per input peak, in input order.
    pub table: Vec<TransformedPeak>,
    /// `EmptySpectrum` when no peak produced an audible partial.
    pub status: SynthesisStatus,
    /// Number of partials that contributed to the waveform.
    pub audible_partials: usize,
    /// Divisor applied during normalization.
    pub divisor: f64,
}

impl SynthesisOutput {
    /// Builds the response document for the request that produced this output.
    pub fn into_response(self, request: &SonifyRequest) -> SonifyResponse {
        SonifyResponse::new(
            request,
            &self.wav.wav_data,
            self.table,
            self.status,
            self.wav.pcm_hash,
        )
    }
}

/// Synthesizes a spectrum to 16-bit WAV.
///
/// # Arguments
/// * `peaks` - Spectrum peaks, in input order
/// * `algorithm` - m/z to frequency mapping
/// * `audio` - Duration and sample rate
///
/// # Errors
/// * [`SynthesisError::InvalidParameter`] for out-of-range settings or peaks
/// * [`SynthesisError::Domain`] when the mapping is undefined for a peak
pub fn synthesize(
    peaks: &[Peak],
    algorithm: &AlgorithmParams,
    audio: &AudioParams,
) -> SynthesisResult<SynthesisOutput> {
    synthesize_with_depth(peaks, algorithm, audio, BitDepth::Pcm16)
}

/// Synthesizes a spectrum to WAV at the given bit depth.
pub fn synthesize_with_depth(
    peaks: &[Peak],
    algorithm: &AlgorithmParams,
    audio: &AudioParams,
    bit_depth: BitDepth,
) -> SynthesisResult<SynthesisOutput> {
    check_settings(algorithm, audio)?;

    let mapped = map_spectrum(peaks, algorithm)?;
    let table = build_table(peaks, &mapped);
    log::debug!("mapped {} peaks with {}", table.len(), algorithm);

    let buffer = synthesize_waveform(&table_partials(&table), audio);
    let status = if buffer.audible_partials == 0 {
        log::warn!(
            "no audible partials (peaks={}, nyquist={} Hz); output is silent",
            peaks.len(),
            audio.nyquist()
        );
        SynthesisStatus::EmptySpectrum
    } else {
        SynthesisStatus::Ok
    };

    let wav = WavResult::from_samples(&buffer.samples, audio.sample_rate, bit_depth)?;
    log::debug!(
        "encoded {} frames ({} bytes, pcm_hash {})",
        wav.num_frames,
        wav.wav_data.len(),
        wav.pcm_hash
    );

    Ok(SynthesisOutput {
        wav,
        table,
        status,
        audible_partials: buffer.audible_partials,
        divisor: buffer.divisor,
    })
}

/// Renders a request and builds its response document.
///
/// The peak source is resolved first (`peaks` or `spectrum_text`), then the
/// spectrum is synthesized with the request's algorithm and audio settings.
pub fn generate(request: &SonifyRequest) -> SynthesisResult<SonifyResponse> {
    let peaks = request.resolve_peaks()?;
    let output = synthesize(&peaks, &request.algorithm, &request.audio_params())?;
    Ok(output.into_response(request))
}

fn check_settings(algorithm: &AlgorithmParams, audio: &AudioParams) -> SynthesisResult<()> {
    validate_duration(audio.duration_seconds)
        .map_err(|e| SynthesisError::invalid_param("duration", e.message))?;
    validate_sample_rate(audio.sample_rate)
        .map_err(|e| SynthesisError::invalid_param("sample_rate", e.message))?;

    for (name, value) in algorithm.named_values() {
        validate_parameter(name, value).map_err(|e| {
            SynthesisError::invalid_param(format!("algorithm.{}", name), e.message)
        })?;
    }

    if let AlgorithmParams::Modulo { modulus, .. } = *algorithm {
        if modulus <= 0.0 {
            return Err(SynthesisError::invalid_param(
                "algorithm.modulus",
                format!("modulus must be positive, got {}", modulus),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_peaks() -> Vec<Peak> {
        vec![Peak::new(300.0, 1000.0), Peak::new(301.0, 500.0)]
    }

    #[test]
    fn test_synthesize_linear() {
        let output = synthesize(
            &two_peaks(),
            &AlgorithmParams::Linear { offset: 300.0 },
            &AudioParams::new(1.0, 44100),
        )
        .unwrap();

        assert_eq!(output.status, SynthesisStatus::Ok);
        assert_eq!(output.audible_partials, 2);
        assert_eq!(output.wav.num_frames, 44100);
        assert_eq!(output.table[0].frequency, 600.0);
        assert_eq!(output.table[1].frequency, 601.0);
    }

    #[test]
    fn test_rejects_out_of_range_settings() {
        let peaks = two_peaks();
        let algorithm = AlgorithmParams::linear();

        for audio in [
            AudioParams::new(0.0, 44100),
            AudioParams::new(30.5, 44100),
            AudioParams::new(f64::NAN, 44100),
            AudioParams::new(1.0, 3499),
            AudioParams::new(1.0, 192_001),
        ] {
            let err = synthesize(&peaks, &algorithm, &audio).unwrap_err();
            assert!(
                matches!(err, SynthesisError::InvalidParameter { .. }),
                "{:?}: {}",
                audio,
                err
            );
        }
    }

    #[test]
    fn test_rejects_large_parameter() {
        let err = synthesize(
            &two_peaks(),
            &AlgorithmParams::Linear { offset: 2e6 },
            &AudioParams::new(1.0, 44100),
        )
        .unwrap_err();
        assert!(err.to_string().contains("algorithm.offset"), "{}", err);
    }

    #[test]
    fn test_rejects_zero_modulus_before_mapping() {
        let algorithm = AlgorithmParams::Modulo {
            factor: 10.0,
            modulus: 0.0,
            base: 100.0,
        };
        let err = synthesize(&[], &algorithm, &AudioParams::new(0.1, 8000)).unwrap_err();
        assert!(err.to_string().contains("algorithm.modulus"), "{}", err);
    }

    #[test]
    fn test_empty_spectrum_is_silent() {
        let output = synthesize(&[], &AlgorithmParams::linear(), &AudioParams::new(0.5, 8000))
            .unwrap();

        assert_eq!(output.status, SynthesisStatus::EmptySpectrum);
        assert!(output.table.is_empty());
        assert_eq!(output.wav.num_frames, 4000);
    }

    #[test]
    fn test_generate_uses_spectrum_text() {
        let request = SonifyRequest::from_spectrum_text("300 1000\n301 500")
            .with_audio(AudioParams::new(0.1, 8000));
        let response = generate(&request).unwrap();

        assert_eq!(response.spectrum.len(), 2);
        assert_eq!(response.algorithm, "linear");
        assert_eq!(response.compound, "Custom Compound");
        assert_eq!(response.status, SynthesisStatus::Ok);
        assert_eq!(&response.decode_audio().unwrap()[0..4], b"RIFF");
    }

    #[test]
    fn test_generate_missing_peak_source() {
        let mut request = SonifyRequest::from_peaks(two_peaks());
        request.peaks = None;
        let err = generate(&request).unwrap_err();
        assert!(matches!(err, SynthesisError::Request(_)));
    }
}
