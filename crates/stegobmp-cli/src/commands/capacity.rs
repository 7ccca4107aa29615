use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how large a secret file a BMP image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 24-bit BMP image to inspect
    #[arg(short = 'p', value_name = "carrier bmp", required = true)]
    pub carrier: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        for offer in stegobmp_core::commands::capacity(&self.carrier)? {
            println!(
                "{}: {} bits, secret files up to {} bytes without extension",
                offer.algorithm, offer.capacity_bits, offer.max_secret_len
            );
        }

        Ok(())
    }
}
