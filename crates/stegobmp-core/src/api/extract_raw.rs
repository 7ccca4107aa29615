use std::path::{Path, PathBuf};

use stegobmp_crypto::CipherSpec;

use super::{codec_factory, write_output, Password};
use crate::carrier::Carrier;
use crate::codec::{Algorithm, CodecOptions, Decoder};
use crate::{RawMessage, StegoError};

pub fn prepare() -> ExtractRawApi {
    ExtractRawApi::default()
}

/// Dumps the framed payload without interpreting it, for encrypted payloads the decrypted frame.
#[derive(Default, Debug)]
pub struct ExtractRawApi {
    secret_media: Option<PathBuf>,
    raw_file: Option<PathBuf>,
    password: Password,
    cipher: CipherSpec,
    options: CodecOptions,
}

impl ExtractRawApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.options.algorithm = algorithm;
        self
    }

    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn into_raw_file(mut self, raw_file: impl AsRef<Path>) -> Self {
        self.raw_file = Some(raw_file.as_ref().to_path_buf());
        self
    }

    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_cipher(mut self, cipher: CipherSpec) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(raw_file) = self.raw_file else {
            return Err(StegoError::TargetNotSet);
        };
        let algorithm = self.options.algorithm;

        let mut carrier = Carrier::open(&secret_media)?;
        let max_size = algorithm.max_payload_len(carrier.pixel_count());
        let fab = codec_factory(&self.password, self.cipher);

        let mut decoder = Decoder::new(carrier.pixels(), algorithm.unveiler());
        let raw = RawMessage::from_raw_data(&mut decoder, &*fab, max_size)?;

        write_output(&raw_file, &raw.content)
    }
}
