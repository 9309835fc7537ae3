//! WAV serialization and PCM quantization.

use std::io::{self, Write};

use super::format::{BitDepth, WavFormat, WAV_HEADER_LEN};

/// Writes a complete WAV file.
///
/// `pcm_data` must already be encoded for `format.bit_depth`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let too_large = || io::Error::new(io::ErrorKind::InvalidInput, "PCM data exceeds 4 GiB");
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| too_large())?;
    let riff_size = data_size
        .checked_add(WAV_HEADER_LEN as u32 - 8)
        .ok_or_else(too_large)?;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample().to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a new byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Quantizes samples to little-endian PCM.
///
/// Each sample becomes `round(s * full_scale)`, clamped to the signed range
/// of the bit depth.
pub fn samples_to_pcm(samples: &[f64], bit_depth: BitDepth) -> Vec<u8> {
    match bit_depth {
        BitDepth::Pcm16 => samples_to_pcm16(samples),
        BitDepth::Pcm24 => samples_to_pcm24(samples),
    }
}

/// Quantizes samples to 16-bit little-endian PCM.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let value = quantize(sample, BitDepth::Pcm16.full_scale(), -32_768.0, 32_767.0) as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

fn samples_to_pcm24(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 3);
    for &sample in samples {
        let value =
            quantize(sample, BitDepth::Pcm24.full_scale(), -8_388_608.0, 8_388_607.0) as i32;
        pcm.extend_from_slice(&value.to_le_bytes()[..3]);
    }
    pcm
}

#[inline]
fn quantize(sample: f64, full_scale: f64, min: f64, max: f64) -> f64 {
    // NaN rounds to NaN and `clamp` keeps it; map it to silence instead.
    if sample.is_nan() {
        return 0.0;
    }
    (sample * full_scale).round().clamp(min, max)
}
