use std::io::Read;

use log::debug;
use stegobmp_crypto::{decrypt_data, encrypt_data, CipherMode, CipherSpec, CryptoError};

use super::{
    read_data, read_size_header, write_frame, PayloadCodec, PayloadDecoder, PayloadEncoder,
    LENGTH_HEADER_SIZE,
};
use crate::result::Result;
use crate::{Message, StegoError};

/// Encrypts the whole plain payload and wraps it as `[size][ciphertext]`.
///
/// The extension only exists inside the ciphertext.
pub struct CryptedPayloadCodec {
    inner_encoder: Box<dyn PayloadCodec>,
    password: String,
    spec: CipherSpec,
}

impl CryptedPayloadCodec {
    pub fn new(inner_encoder: Box<dyn PayloadCodec>, password: String, spec: CipherSpec) -> Self {
        Self {
            inner_encoder,
            password,
            spec,
        }
    }
}

impl PayloadEncoder for CryptedPayloadCodec {
    fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        let plain = self.inner_encoder.encode(message)?;
        let cipher_data = encrypt_data(&self.password, self.spec, &plain)
            .map_err(StegoError::EncryptionError)?;

        let mut buffer = Vec::with_capacity(LENGTH_HEADER_SIZE + cipher_data.len());
        write_frame(&mut buffer, &cipher_data, None)?;

        Ok(buffer)
    }

    fn encoded_size(&self, message: &Message) -> usize {
        let plain_len = self.inner_encoder.encoded_size(message);
        let cipher_len = match self.spec.mode {
            CipherMode::Ecb | CipherMode::Cbc => {
                let block = self.spec.algorithm.block_len();
                (plain_len / block + 1) * block
            }
            _ => plain_len,
        };
        LENGTH_HEADER_SIZE + cipher_len
    }
}

impl PayloadDecoder for CryptedPayloadCodec {
    /// the decrypted plain payload
    fn decode_raw(&self, content: &mut dyn Read, max_size: u64) -> Result<Vec<u8>> {
        let size = read_size_header(content, max_size)?;
        let cipher_data = read_data(content, size)?;

        decrypt_data(&self.password, self.spec, &cipher_data).map_err(StegoError::DecryptionError)
    }

    fn decode(&self, content: &mut dyn Read, max_size: u64) -> Result<Message> {
        let plain = self.decode_raw(content, max_size)?;

        Message::parse(&plain, true).map_err(|e| {
            debug!("decrypted payload does not parse: {e}");
            StegoError::DecryptionError(CryptoError::DecryptionError)
        })
    }
}

impl PayloadCodec for CryptedPayloadCodec {}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use stegobmp_crypto::CipherAlgorithm;

    use super::*;
    use crate::payload::{FabCrypted, PayloadCodecFactory};

    #[test]
    fn test_encryption_codec() {
        let cipher = FabCrypted::new("password42", CipherSpec::default());
        let msg = Message::new(b"top secret".to_vec(), ".txt");
        let encrypted_data = msg.to_raw_data(&cipher).unwrap();

        let cipher_len = u32::from_be_bytes(encrypted_data[..4].try_into().unwrap()) as usize;
        assert_eq!(cipher_len, encrypted_data.len() - 4);
        // 10 data bytes + 4 size + 5 extension, padded to 2 aes blocks
        assert_eq!(cipher_len, 32);
        assert!(!encrypted_data.windows(4).any(|w| w == b".txt"));
        assert_eq!(
            cipher.create_codec().encoded_size(&msg),
            encrypted_data.len()
        );

        let msg_decrypted = Message::from_raw_data(
            &mut Cursor::new(encrypted_data),
            &cipher,
            u64::from(u32::MAX),
        )
        .unwrap();

        assert_eq!(msg_decrypted, msg);
    }

    #[test]
    fn should_report_wrong_passwords_as_decryption_error() {
        for mode in [CipherMode::Ecb, CipherMode::Cbc, CipherMode::Cfb, CipherMode::Ofb] {
            let spec = CipherSpec::new(CipherAlgorithm::Aes192, mode);
            let msg = Message::new(b"not for you".to_vec(), ".bin");
            let encrypted_data = msg.to_raw_data(&FabCrypted::new("right", spec)).unwrap();

            let result = Message::from_raw_data(
                &mut Cursor::new(encrypted_data),
                &FabCrypted::new("wrong", spec),
                1024,
            );

            assert!(
                matches!(result, Err(StegoError::DecryptionError(_))),
                "{mode} gave {result:?}"
            );
        }
    }

    #[test]
    fn should_apply_the_size_bound_to_the_ciphertext() {
        let cipher = FabCrypted::new("password42", CipherSpec::default());
        let encrypted_data = Message::new(b"data".to_vec(), "")
            .to_raw_data(&cipher)
            .unwrap();

        assert!(matches!(
            Message::from_raw_data(&mut Cursor::new(encrypted_data), &cipher, 15),
            Err(StegoError::ImplausiblePayloadSize { size: 16, max: 15 })
        ));
    }
}
