//! WAV format parameters.

/// Size of the canonical RIFF + fmt + data header.
pub const WAV_HEADER_LEN: usize = 44;

/// Sample encoding of the data chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    /// Signed 16-bit little-endian.
    #[default]
    Pcm16,
    /// Signed 24-bit little-endian, packed in 3 bytes.
    Pcm24,
}

impl BitDepth {
    /// Bits per sample as written to the fmt chunk.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Pcm16 => 16,
            BitDepth::Pcm24 => 24,
        }
    }

    /// Bytes per sample.
    pub fn bytes(self) -> u16 {
        self.bits() / 8
    }

    /// Largest positive integer sample value.
    pub fn full_scale(self) -> f64 {
        match self {
            BitDepth::Pcm16 => i16::MAX as f64,
            BitDepth::Pcm24 => 8_388_607.0,
        }
    }

    /// Parses `16` or `24`.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            16 => Some(BitDepth::Pcm16),
            24 => Some(BitDepth::Pcm24),
            _ => None,
        }
    }
}

/// WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample encoding.
    pub bit_depth: BitDepth,
}

impl WavFormat {
    /// Creates a 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bit_depth: BitDepth::Pcm16,
        }
    }

    /// Returns this format with a different bit depth.
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bit_depth.bits()
    }

    /// Bytes per sample frame.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bit_depth.bytes()
    }

    /// Bytes per second.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
