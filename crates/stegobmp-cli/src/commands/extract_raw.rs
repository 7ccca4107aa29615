use std::path::PathBuf;

use clap::Args;

use super::PayloadArgs;

/// Dumps the framed payload of a BMP image as binary file
#[derive(Args, Debug)]
pub struct ExtractRawArgs {
    /// BMP image that contains the secret
    #[arg(short = 'p', value_name = "stego bmp", required = true)]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

impl ExtractRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        let password = self.payload.password(false)?;

        stegobmp_core::commands::extract_raw(
            &self.media,
            &self.output_file,
            password,
            self.payload.cipher_spec(),
            self.payload.options(),
        )
    }
}
