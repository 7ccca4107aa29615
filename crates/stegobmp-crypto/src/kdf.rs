use std::fmt::{self, Debug, Formatter};

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CipherSpec, CryptoError, Result};

/// All payloads are keyed with the same salt, so equal passwords always derive equal keys.
pub const FIXED_SALT: [u8; 8] = [0; 8];
pub const PBKDF2_ROUNDS: u32 = 10_000;

/// Key and IV for one cipher operation, wiped on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyIv {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl KeyIv {
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// empty for modes that take no IV
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl Debug for KeyIv {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "KeyIv(key: {} bytes, iv: {} bytes)", self.key.len(), self.iv.len())
    }
}

/// derives `key_len + iv_len` bytes with PBKDF2-HMAC-SHA256 and splits them into key and IV
pub fn derive_key_iv(password: &str, spec: CipherSpec) -> Result<KeyIv> {
    if password.is_empty() {
        return Err(CryptoError::EmptyPassword);
    }

    let key_len = spec.key_len();
    let mut material = vec![0u8; key_len + spec.iv_len()];
    pbkdf2::<Hmac<Sha256>>(password.as_bytes(), &FIXED_SALT, PBKDF2_ROUNDS, &mut material)
        .map_err(|_| CryptoError::KeyDerivationError)?;
    let iv = material.split_off(key_len);

    Ok(KeyIv { key: material, iv })
}
