use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{debug, error};
use stegobmp_crypto::CipherSpec;

use super::{codec_factory, discard_output, is_same_file, Password};
use crate::carrier::Carrier;
use crate::codec::{hide, Algorithm, CodecOptions, HideReport};
use crate::payload::{PayloadCodecFactory, PayloadEncoder};
use crate::{capacity, Message, StegoError};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    secret: Option<PathBuf>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    cipher: CipherSpec,
    options: CodecOptions,
}

impl EmbedApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.options.algorithm = algorithm;
        self
    }

    /// The file to hide, its extension travels along with its content
    pub fn with_secret_file<A: AsRef<Path>>(mut self, secret: A) -> Self {
        self.secret = Some(secret.as_ref().to_path_buf());
        self
    }

    /// The 24-bit bitmap that carries the secret, it is only read
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no encryption used
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// The cipher used when a password is set, defaults to `aes128` in `cbc` mode
    pub fn with_cipher(mut self, cipher: CipherSpec) -> Self {
        self.cipher = cipher;
        self
    }

    /// Execute the embedding and blocks until it is finished
    pub fn execute(self) -> Result<HideReport, StegoError> {
        let Some(secret) = self.secret else {
            return Err(StegoError::MissingSecret);
        };
        let Some(carrier_file) = self.carrier else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        if is_same_file(&carrier_file, &output) {
            return Err(StegoError::OutputIsCarrier);
        }
        let algorithm = self.options.algorithm;

        let message = Message::from_file(&secret)?;
        let fab = codec_factory(&self.password, self.cipher);
        let codec = fab.create_codec();

        let mut carrier = Carrier::open(&carrier_file)?;
        // before anything gets encrypted
        capacity::check(carrier.pixel_count(), algorithm, codec.encoded_size(&message))?;
        let payload = codec.encode(&message)?;
        let capacity = capacity::check(carrier.pixel_count(), algorithm, payload.len())?;
        debug!(
            "{algorithm}: {} of {} bits needed for {} ({:?})",
            capacity.required_bits,
            capacity.capacity_bits,
            secret.display(),
            fab
        );

        let target = File::create(&output).map_err(|source| StegoError::WriteError { source })?;
        let mut sink = BufWriter::new(target);

        match hide(&mut carrier, &mut sink, algorithm, payload) {
            Ok(report) => Ok(report),
            Err(e) => {
                error!("Embedding into {} failed: {e}", output.display());
                drop(sink);
                discard_output(&output);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::test_utils::{noisy_pixel, write_bmp, write_file};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_bmp(temp_dir.path(), "carrier.bmp", 32, 32, noisy_pixel);
        let secret = write_file(temp_dir.path(), "hello.txt", b"Hello, World!");

        let report = crate::api::embed::prepare()
            .with_secret_file(secret)
            .with_carrier(carrier)
            .with_algorithm(Algorithm::Lsbi)
            .with_password("SuperSecret42")
            .with_output(temp_dir.path().join("image-with-secret.bmp"))
            .execute()
            .expect("Failed to hide file in image");

        assert_eq!(report.algorithm, Algorithm::Lsbi);
        assert!(temp_dir.path().join("image-with-secret.bmp").exists());
    }

    #[test]
    fn should_not_create_the_output_when_the_payload_does_not_fit() {
        let temp_dir = tempdir().unwrap();
        let carrier = write_bmp(temp_dir.path(), "carrier.bmp", 8, 4, noisy_pixel);
        // 4 size + 4 data + 5 extension = 13 bytes, 1 byte more than 32 pixels with LSB1 take
        let secret = write_file(temp_dir.path(), "s.txt", b"abcd");
        let output = temp_dir.path().join("out.bmp");

        let result = prepare()
            .with_secret_file(secret)
            .with_carrier(carrier)
            .with_output(&output)
            .execute();

        assert!(matches!(
            result,
            Err(StegoError::CapacityExceeded {
                required_bits: 104,
                capacity_bits: 96
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn should_count_the_cipher_padding_against_the_capacity() {
        let temp_dir = tempdir().unwrap();
        let carrier = write_bmp(temp_dir.path(), "carrier.bmp", 8, 4, noisy_pixel);
        // 13 plain bytes grow to one aes block of 16 plus the 4 byte size
        let secret = write_file(temp_dir.path(), "s.txt", b"abcd");
        let output = temp_dir.path().join("out.bmp");

        let result = prepare()
            .with_secret_file(secret)
            .with_carrier(carrier)
            .with_password("pw")
            .with_output(&output)
            .execute();

        assert!(matches!(
            result,
            Err(StegoError::CapacityExceeded {
                required_bits: 160,
                capacity_bits: 96
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn should_remove_the_output_when_embedding_fails() {
        let temp_dir = tempdir().unwrap();
        let carrier = write_bmp(temp_dir.path(), "carrier.bmp", 16, 16, noisy_pixel);
        let bytes = std::fs::read(&carrier).unwrap();
        // declares 256 pixels but only holds 40
        std::fs::write(&carrier, &bytes[..54 + 120]).unwrap();
        let secret = write_file(temp_dir.path(), "s.bin", &[7; 20]);
        let output = temp_dir.path().join("out.bmp");

        let result = prepare()
            .with_secret_file(secret)
            .with_carrier(carrier)
            .with_output(&output)
            .execute();

        assert!(matches!(
            result,
            Err(StegoError::IncompleteEmbedding {
                written: 120,
                required: 232
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn should_refuse_to_overwrite_the_carrier() {
        let temp_dir = tempdir().unwrap();
        let carrier = write_bmp(temp_dir.path(), "carrier.bmp", 8, 8, noisy_pixel);
        let secret = write_file(temp_dir.path(), "s.txt", b"abc");

        let result = prepare()
            .with_secret_file(secret)
            .with_carrier(&carrier)
            .with_output(&carrier)
            .execute();

        assert!(matches!(result, Err(StegoError::OutputIsCarrier)));
    }

    #[test]
    fn should_require_all_files() {
        assert!(matches!(
            prepare().with_carrier("c.bmp").with_output("o.bmp").execute(),
            Err(StegoError::MissingSecret)
        ));
        assert!(matches!(
            prepare().with_secret_file("s.txt").with_output("o.bmp").execute(),
            Err(StegoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_secret_file("s.txt").with_carrier("c.bmp").execute(),
            Err(StegoError::TargetNotSet)
        ));
    }
}
