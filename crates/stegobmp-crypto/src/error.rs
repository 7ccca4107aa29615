use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Represents an attempt to derive key material from an empty password
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Key derivation error")]
    KeyDerivationError,

    /// Represents key or IV material that does not fit the chosen cipher
    #[error("Invalid key or IV length for the chosen cipher")]
    InvalidKeyIvLength,

    /// Represents a failed decryption, for example caused by a wrong password or tampered data
    #[error("Decryption error, wrong password or corrupted data")]
    DecryptionError,

    #[error("Unsupported cipher algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported cipher mode: {0}")]
    UnsupportedMode(String),
}
