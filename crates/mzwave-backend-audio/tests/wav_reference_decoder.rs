//! Decodes rendered files with an independent WAV reader.

use std::io::Cursor;

use mzwave_backend_audio::synthesis::synthesize_waveform;
use mzwave_backend_audio::wav::{samples_to_pcm16, BitDepth, WavResult};
use mzwave_backend_audio::{synthesize_with_depth, Partial};
use mzwave_spec::{AlgorithmParams, AudioParams, Peak};

#[test]
fn test_hound_reads_16bit_output() {
    let audio = AudioParams::new(0.3, 22050);
    let buffer = synthesize_waveform(
        &[Partial::new(440.0, 1.0), Partial::new(660.0, 0.5)],
        &audio,
    );
    let result = WavResult::from_mono(&buffer.samples, audio.sample_rate).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(&result.wav_data)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.duration() as usize, audio.num_frames());

    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    let expected: Vec<i16> = samples_to_pcm16(&buffer.samples)
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(decoded, expected);
}

#[test]
fn test_hound_reads_24bit_output() {
    let peaks = vec![Peak::new(120.0, 3.0), Peak::new(140.0, 1.0)];
    let output = synthesize_with_depth(
        &peaks,
        &AlgorithmParams::Linear { offset: 300.0 },
        &AudioParams::new(0.05, 48000),
        BitDepth::Pcm24,
    )
    .unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(&output.wav.wav_data)).unwrap();
    assert_eq!(reader.spec().bits_per_sample, 24);
    assert_eq!(reader.spec().sample_rate, 48000);

    let decoded: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded.len(), 2400);
    assert!(decoded.iter().all(|&s| (-8_388_608..=8_388_607).contains(&s)));
    assert!(decoded.iter().any(|&s| s != 0));
}

#[test]
fn test_hound_reads_silent_output() {
    let result = WavResult::from_mono(&vec![0.0; 35], 3500).unwrap();
    let mut reader = hound::WavReader::new(Cursor::new(&result.wav_data)).unwrap();
    assert_eq!(reader.duration(), 35);
    assert!(reader.samples::<i16>().all(|s| s.unwrap() == 0));
}
