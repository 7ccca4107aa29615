use std::path::PathBuf;

use clap::Args;
use log::info;

use super::PayloadArgs;
use crate::CliResult;

/// Hides a file in a 24-bit BMP image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// File to hide in the image
    #[arg(long = "in", value_name = "secret file", required = true)]
    pub secret: PathBuf,

    /// 24-bit BMP image carrying the secret, used readonly
    #[arg(short = 'p', value_name = "carrier bmp", required = true)]
    pub carrier: PathBuf,

    /// Final image will be stored as file
    #[arg(long = "out", value_name = "output bmp", required = true)]
    pub write_to_file: PathBuf,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self.payload.password(true)?;
        let report = stegobmp_core::commands::embed(
            &self.secret,
            &self.carrier,
            &self.write_to_file,
            password,
            self.payload.cipher_spec(),
            self.payload.options(),
        )?;
        info!(
            "{}: hid {} bits in {}",
            report.algorithm,
            report.bits_written,
            self.write_to_file.display()
        );

        Ok(())
    }
}
