use thiserror::Error;

pub use stegobmp_crypto::CryptoError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a carrier that is not a bitmap at all, for example a PNG file
    #[error("Carrier is not a bitmap, invalid signature {0:#06x}")]
    InvalidSignature(u16),

    #[error("Unsupported bit depth {0}, only 24-bit bitmaps are supported")]
    UnsupportedBitDepth(u16),

    #[error("Compressed bitmaps are not supported, compression method {0}")]
    CompressedCarrier(u32),

    /// Represents a broken bitmap header, for example a truncated file
    #[error("Bitmap header is invalid: {0}")]
    InvalidCarrierHeader(&'static str),

    #[error("Invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error(
        "Capacity Error: the carrier offers {capacity_bits} bits but the payload requires {required_bits} bits"
    )]
    CapacityExceeded {
        required_bits: u64,
        capacity_bits: u64,
    },

    /// Represents a carrier stream that ended before the whole payload was embedded
    #[error("Embedding incomplete, only {written} of {required} bits were written")]
    IncompleteEmbedding { written: u64, required: u64 },

    /// Represents a size header that cannot be right for the carrier, for example an image without a secret
    #[error("Implausible payload size {size}, the carrier holds at most {max} bytes")]
    ImplausiblePayloadSize { size: u32, max: u64 },

    #[error("Payload is truncated")]
    TruncatedPayload,

    #[error("Payload extension is not terminated within {0} bytes")]
    MissingExtensionTerminator(usize),

    /// Represents a recovered extension that cannot be used as a file name suffix
    #[error("Payload extension is invalid")]
    InvalidExtension,

    #[error("The secret file is empty")]
    EmptySecret,

    /// Represents an error caused by an invalid filename, for example a non UTF-8 extension
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    #[error("The extension of the secret file exceeds {0} bytes")]
    ExtensionTooLong(usize),

    #[error("Payload of {0} bytes does not fit into the size header")]
    PayloadTooLarge(usize),

    #[error("Unsupported steganography algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(CryptoError),

    /// Represents an error when decrypting the data, a wrong password ends up here
    #[error("Decryption error")]
    DecryptionError(CryptoError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret file")]
    MissingSecret,

    #[error("The output file must not be the carrier itself")]
    OutputIsCarrier,
}
