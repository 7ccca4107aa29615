use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::CryptoError;

/// Block ciphers available for protecting a payload
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    #[default]
    Aes128,
    Aes192,
    Aes256,
    /// Triple DES in EDE mode with three independent keys
    TripleDes,
}

impl CipherAlgorithm {
    pub fn key_len(&self) -> usize {
        match self {
            CipherAlgorithm::Aes128 => 16,
            CipherAlgorithm::Aes192 => 24,
            CipherAlgorithm::Aes256 => 32,
            CipherAlgorithm::TripleDes => 24,
        }
    }

    pub fn block_len(&self) -> usize {
        match self {
            CipherAlgorithm::TripleDes => 8,
            _ => 16,
        }
    }
}

impl FromStr for CipherAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes128" => Ok(CipherAlgorithm::Aes128),
            "aes192" => Ok(CipherAlgorithm::Aes192),
            "aes256" => Ok(CipherAlgorithm::Aes256),
            "3des" => Ok(CipherAlgorithm::TripleDes),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Display for CipherAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherAlgorithm::Aes128 => "aes128",
            CipherAlgorithm::Aes192 => "aes192",
            CipherAlgorithm::Aes256 => "aes256",
            CipherAlgorithm::TripleDes => "3des",
        };
        f.write_str(name)
    }
}

/// Block cipher modes of operation
///
/// `Ecb` and `Cbc` pad with PKCS#7, `Cfb` is the 8 bit feedback variant
/// and `Ofb` uses full block feedback. Only `Ecb` works without an IV.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    Ecb,
    #[default]
    Cbc,
    Cfb,
    Ofb,
}

impl CipherMode {
    pub fn needs_iv(&self) -> bool {
        !matches!(self, CipherMode::Ecb)
    }
}

impl FromStr for CipherMode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(CipherMode::Ecb),
            "cbc" => Ok(CipherMode::Cbc),
            "cfb" => Ok(CipherMode::Cfb),
            "ofb" => Ok(CipherMode::Ofb),
            _ => Err(CryptoError::UnsupportedMode(s.to_string())),
        }
    }
}

impl Display for CipherMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::Ecb => "ecb",
            CipherMode::Cbc => "cbc",
            CipherMode::Cfb => "cfb",
            CipherMode::Ofb => "ofb",
        };
        f.write_str(name)
    }
}

/// The pair of algorithm and mode, defaults to `aes128` in `cbc` mode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CipherSpec {
    pub algorithm: CipherAlgorithm,
    pub mode: CipherMode,
}

impl CipherSpec {
    pub fn new(algorithm: CipherAlgorithm, mode: CipherMode) -> Self {
        Self { algorithm, mode }
    }

    pub fn key_len(&self) -> usize {
        self.algorithm.key_len()
    }

    pub fn iv_len(&self) -> usize {
        if self.mode.needs_iv() {
            self.algorithm.block_len()
        } else {
            0
        }
    }
}

impl Display for CipherSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.algorithm, self.mode)
    }
}
