use super::Algorithm;

/// Codec configuration for steganography encoding/decoding
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// decides how payload bits are placed into the color channels, and with that the capacity
    pub algorithm: Algorithm,
}

impl From<Algorithm> for CodecOptions {
    fn from(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}
