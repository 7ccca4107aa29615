use std::io;

use clap::{Parser, Subcommand};
use dialoguer::Password;
use stegobmp_core::StegoError;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Embed(embed::EmbedArgs),
    Extract(extract::ExtractArgs),
    ExtractRaw(extract_raw::ExtractRawArgs),
    Capacity(capacity::CapacityArgs),
}

/// prompts for the password on the terminal, `confirm` asks a second time when embedding
pub fn ask_for_password(confirm: bool) -> CliResult<String> {
    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt.interact().map_err(|e| StegoError::ReadError {
        source: io::Error::new(io::ErrorKind::Other, e),
    })
}
