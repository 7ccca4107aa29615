//! # Payload Encryption
//!
//! Symmetric encryption of hidden payloads with a password. Key and IV are
//! derived with PBKDF2-HMAC-SHA256 (see [`derive_key_iv`]), the cipher is one of
//! `aes128`, `aes192`, `aes256` or `3des` running in `ecb`, `cbc`, `cfb` or `ofb` mode.
//!
//! ```rust
//! use stegobmp_crypto::{decrypt_data, encrypt_data, CipherSpec};
//!
//! let spec: CipherSpec = CipherSpec::new("aes256".parse()?, "ofb".parse()?);
//! let cipher_data = encrypt_data("Secret42", spec, b"Hello World")?;
//! let plain_data = decrypt_data("Secret42", spec, &cipher_data)?;
//!
//! assert_eq!(plain_data, b"Hello World");
//! # Ok::<(), stegobmp_crypto::CryptoError>(())
//! ```

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{
    AsyncStreamCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher,
};

pub mod cipher;
pub mod error;
pub mod kdf;

pub use crate::cipher::{CipherAlgorithm, CipherMode, CipherSpec};
pub use crate::error::CryptoError;
pub use crate::kdf::{derive_key_iv, KeyIv};

pub type Result<T> = std::result::Result<T, CryptoError>;

/// binds `$c` to the block cipher type of the given algorithm for the body
macro_rules! with_block_cipher {
    ($algorithm:expr, |$c:ident| $body:block) => {
        match $algorithm {
            CipherAlgorithm::Aes128 => {
                type $c = aes::Aes128;
                $body
            }
            CipherAlgorithm::Aes192 => {
                type $c = aes::Aes192;
                $body
            }
            CipherAlgorithm::Aes256 => {
                type $c = aes::Aes256;
                $body
            }
            CipherAlgorithm::TripleDes => {
                type $c = des::TdesEde3;
                $body
            }
        }
    };
}

fn invalid_length<E>(_: E) -> CryptoError {
    CryptoError::InvalidKeyIvLength
}

/// encrypts `plaintext` with already derived key material
pub fn encrypt(plaintext: &[u8], spec: CipherSpec, key_iv: &KeyIv) -> Result<Vec<u8>> {
    let (key, iv) = (key_iv.key(), key_iv.iv());

    with_block_cipher!(spec.algorithm, |C| {
        let ciphertext = match spec.mode {
            CipherMode::Ecb => ecb::Encryptor::<C>::new_from_slice(key)
                .map_err(invalid_length)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            CipherMode::Cbc => cbc::Encryptor::<C>::new_from_slices(key, iv)
                .map_err(invalid_length)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            CipherMode::Cfb => {
                let mut buffer = plaintext.to_vec();
                cfb8::Encryptor::<C>::new_from_slices(key, iv)
                    .map_err(invalid_length)?
                    .encrypt(&mut buffer);
                buffer
            }
            CipherMode::Ofb => {
                let mut buffer = plaintext.to_vec();
                ofb::Ofb::<C>::new_from_slices(key, iv)
                    .map_err(invalid_length)?
                    .apply_keystream(&mut buffer);
                buffer
            }
        };
        Ok(ciphertext)
    })
}

/// decrypts `ciphertext` with already derived key material, broken padding is a [`CryptoError::DecryptionError`]
pub fn decrypt(ciphertext: &[u8], spec: CipherSpec, key_iv: &KeyIv) -> Result<Vec<u8>> {
    let (key, iv) = (key_iv.key(), key_iv.iv());

    with_block_cipher!(spec.algorithm, |C| {
        let plaintext = match spec.mode {
            CipherMode::Ecb => ecb::Decryptor::<C>::new_from_slice(key)
                .map_err(invalid_length)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CryptoError::DecryptionError)?,
            CipherMode::Cbc => cbc::Decryptor::<C>::new_from_slices(key, iv)
                .map_err(invalid_length)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CryptoError::DecryptionError)?,
            CipherMode::Cfb => {
                let mut buffer = ciphertext.to_vec();
                cfb8::Decryptor::<C>::new_from_slices(key, iv)
                    .map_err(invalid_length)?
                    .decrypt(&mut buffer);
                buffer
            }
            CipherMode::Ofb => {
                let mut buffer = ciphertext.to_vec();
                ofb::Ofb::<C>::new_from_slices(key, iv)
                    .map_err(invalid_length)?
                    .apply_keystream(&mut buffer);
                buffer
            }
        };
        Ok(plaintext)
    })
}

/// encrypt data with password, the key and IV are derived by [`derive_key_iv`]
pub fn encrypt_data(password: &str, spec: CipherSpec, data: &[u8]) -> Result<Vec<u8>> {
    let key_iv = derive_key_iv(password, spec)?;
    encrypt(data, spec, &key_iv)
}

/// decrypt data with password, the key and IV are derived by [`derive_key_iv`]
pub fn decrypt_data(password: &str, spec: CipherSpec, data: &[u8]) -> Result<Vec<u8>> {
    let key_iv = derive_key_iv(password, spec)?;
    decrypt(data, spec, &key_iv)
}
