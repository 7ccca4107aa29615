pub mod capacity;
pub mod embed;
pub mod extract;
pub mod extract_raw;

use clap::Args;
use stegobmp_core::{Algorithm, CipherAlgorithm, CipherMode, CipherSpec, CodecOptions};

use crate::CliResult;

/// The algorithm and encryption flags shared by all commands that touch a payload
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Steganography algorithm: LSB1, LSB4 or LSBI
    #[arg(long = "steg", value_name = "algorithm", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Cipher used to encrypt the payload: aes128, aes192, aes256 or 3des [default: aes128]
    #[arg(short = 'a', value_name = "cipher", value_parser = parse_cipher_algorithm)]
    pub cipher: Option<CipherAlgorithm>,

    /// Block cipher mode: ecb, cbc, cfb or ofb [default: cbc]
    #[arg(short = 'm', value_name = "mode", value_parser = parse_cipher_mode)]
    pub mode: Option<CipherMode>,

    /// Password used to encrypt the payload, prompted for when only -a or -m are given
    #[arg(long = "pass", value_name = "password")]
    pub password: Option<String>,
}

impl PayloadArgs {
    pub fn options(&self) -> CodecOptions {
        CodecOptions::from(self.algorithm)
    }

    pub fn cipher_spec(&self) -> CipherSpec {
        CipherSpec::new(
            self.cipher.unwrap_or_default(),
            self.mode.unwrap_or_default(),
        )
    }

    /// the password to use, `None` means no encryption
    pub fn password(&self, confirm: bool) -> CliResult<Option<String>> {
        match (&self.password, self.cipher.is_some() || self.mode.is_some()) {
            (Some(password), _) => Ok(Some(password.clone())),
            (None, true) => crate::cli::ask_for_password(confirm).map(Some),
            (None, false) => Ok(None),
        }
    }
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_cipher_algorithm(s: &str) -> Result<CipherAlgorithm, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_cipher_mode(s: &str) -> Result<CipherMode, String> {
    s.parse().map_err(|e| format!("{e}"))
}
