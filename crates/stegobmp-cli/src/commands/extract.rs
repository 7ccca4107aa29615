use std::path::PathBuf;

use clap::Args;

use super::PayloadArgs;
use crate::CliResult;

/// Extracts a hidden file from a BMP image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// BMP image that contains the secret
    #[arg(short = 'p', value_name = "stego bmp", required = true)]
    pub media: PathBuf,

    /// Path of the extracted file, the hidden extension gets appended
    #[arg(long = "out", value_name = "output file", required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self.payload.password(false)?;
        let target = stegobmp_core::commands::extract(
            &self.media,
            &self.output,
            password,
            self.payload.cipher_spec(),
            self.payload.options(),
        )?;
        println!("{}", target.display());

        Ok(())
    }
}
