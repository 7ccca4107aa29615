//! One function per CLI subcommand, thin wrappers around [`crate::api`].

use std::path::{Path, PathBuf};

use stegobmp_crypto::CipherSpec;

use crate::capacity::CarrierCapacity;
use crate::carrier::Carrier;
use crate::codec::{Algorithm, CodecOptions, HideReport};
use crate::StegoError;

pub fn embed(
    secret: &Path,
    carrier: &Path,
    write_to_file: &Path,
    password: Option<String>,
    cipher: CipherSpec,
    options: CodecOptions,
) -> Result<HideReport, StegoError> {
    crate::api::embed::prepare()
        .with_options(options)
        .with_secret_file(secret)
        .with_carrier(carrier)
        .with_output(write_to_file)
        .using_password(password)
        .with_cipher(cipher)
        .execute()
}

pub fn extract(
    secret_media: &Path,
    output_base: &Path,
    password: Option<String>,
    cipher: CipherSpec,
    options: CodecOptions,
) -> Result<PathBuf, StegoError> {
    crate::api::extract::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_output(output_base)
        .using_password(password)
        .with_cipher(cipher)
        .execute()
}

/// dumps the payload as it was framed, no content format interpretation is happening
pub fn extract_raw(
    secret_media: &Path,
    destination_file: &Path,
    password: Option<String>,
    cipher: CipherSpec,
    options: CodecOptions,
) -> Result<(), StegoError> {
    crate::api::extract_raw::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .using_password(password)
        .with_cipher(cipher)
        .execute()
}

/// the capacity of `carrier` for every algorithm
pub fn capacity(carrier: &Path) -> Result<Vec<CarrierCapacity>, StegoError> {
    let carrier = Carrier::open(carrier)?;
    let pixel_count = carrier.pixel_count();

    Ok(Algorithm::ALL
        .iter()
        .map(|algorithm| CarrierCapacity::new(pixel_count, *algorithm))
        .collect())
}
