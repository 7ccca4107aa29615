use std::path::{Path, PathBuf};

use log::debug;
use stegobmp_crypto::CipherSpec;

use super::{codec_factory, write_output, Password};
use crate::carrier::Carrier;
use crate::codec::{Algorithm, CodecOptions, Decoder};
use crate::{Message, StegoError};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_media: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    cipher: CipherSpec,
    options: CodecOptions,
}

impl ExtractApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The algorithm the secret was embedded with
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.options.algorithm = algorithm;
        self
    }

    /// This is the bitmap that contains the data to be extracted
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The path of the extracted file without extension, the embedded extension gets appended
    pub fn into_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used for decrypting the data
    /// If `None` is passed, no password will be used, leads to no decryption used
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// The cipher the data was encrypted with, defaults to `aes128` in `cbc` mode
    pub fn with_cipher(mut self, cipher: CipherSpec) -> Self {
        self.cipher = cipher;
        self
    }

    /// Execute the extraction and blocks until it is finished, returns the path of the written file
    pub fn execute(self) -> Result<PathBuf, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let algorithm = self.options.algorithm;

        let mut carrier = Carrier::open(&secret_media)?;
        let max_size = algorithm.max_payload_len(carrier.pixel_count());
        let fab = codec_factory(&self.password, self.cipher);

        let mut decoder = Decoder::new(carrier.pixels(), algorithm.unveiler());
        let message = Message::from_raw_data(&mut decoder, &*fab, max_size)?;

        let target = message.target_path(&output);
        debug!(
            "{algorithm}: extracted {} bytes into {}",
            message.data.len(),
            target.display()
        );
        write_output(&target, &message.data)?;

        Ok(target)
    }
}
