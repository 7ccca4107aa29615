use std::process::ExitCode;

use clap::Parser;
use log::error;
use stegobmp_core::StegoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegoError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Embed(args) => args.run(),
        Commands::Extract(args) => args.run(),
        Commands::ExtractRaw(args) => args.run(),
        Commands::Capacity(args) => args.run(),
    };

    if let Err(e) = result {
        error!("{e:?}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use stegobmp_core::{Algorithm, CipherAlgorithm, CipherMode};

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_an_embed_command() {
        let args = CliArgs::try_parse_from([
            "stegobmp", "embed", "--in", "secret.txt", "-p", "carrier.bmp", "--out", "out.bmp",
            "--steg", "LSBI", "-a", "aes256", "-m", "ofb", "--pass", "secret",
        ])
        .unwrap();

        let Commands::Embed(embed) = args.command else {
            panic!("expected the embed command");
        };
        assert_eq!(embed.payload.algorithm, Algorithm::Lsbi);
        assert_eq!(embed.payload.cipher_spec().algorithm, CipherAlgorithm::Aes256);
        assert_eq!(embed.payload.cipher_spec().mode, CipherMode::Ofb);
        assert_eq!(embed.payload.password(true).unwrap(), Some("secret".to_string()));
    }

    #[test]
    fn should_default_the_cipher_when_only_a_password_is_given() {
        let args = CliArgs::try_parse_from([
            "stegobmp", "extract", "-p", "stego.bmp", "--out", "secret", "--steg", "lsb1",
            "--pass", "secret",
        ])
        .unwrap();

        let Commands::Extract(extract) = args.command else {
            panic!("expected the extract command");
        };
        assert_eq!(extract.payload.cipher_spec().to_string(), "aes128-cbc");
        assert_eq!(extract.payload.password(false).unwrap(), Some("secret".to_string()));
    }

    #[test]
    fn should_not_encrypt_without_any_cipher_flag() {
        let args = CliArgs::try_parse_from([
            "stegobmp", "extract-raw", "-p", "stego.bmp", "--out", "raw.bin", "--steg", "LSB4",
        ])
        .unwrap();

        let Commands::ExtractRaw(extract) = args.command else {
            panic!("expected the extract-raw command");
        };
        assert_eq!(extract.payload.password(false).unwrap(), None);
    }

    #[test]
    fn should_reject_unknown_algorithms() {
        assert!(CliArgs::try_parse_from([
            "stegobmp", "extract", "-p", "stego.bmp", "--out", "secret", "--steg", "LSB2",
        ])
        .is_err());
        assert!(CliArgs::try_parse_from([
            "stegobmp", "embed", "--in", "s", "-p", "c.bmp", "--out", "o.bmp", "--steg", "LSB1",
            "-a", "blowfish", "--pass", "x",
        ])
        .is_err());
    }
}
