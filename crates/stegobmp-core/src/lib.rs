//! # Stegobmp Core API
//!
//! Hides a file inside a 24-bit BMP image and recovers it again. There are 3 builders in [`api`]
//! - [`api::embed`] for writing a secret file into a bitmap
//! - [`api::extract`] for reading the secret file back, its extension included
//! - [`api::extract_raw`] for reading the framed payload bytes without interpreting them
//!
//! The color channels carry the secret with one of the [`Algorithm`]s `LSB1`, `LSB4` or `LSBI`,
//! optionally encrypted with a password, see [`CipherSpec`].
//!
//! # Usage Examples
//!
//! ## Hide a file inside a bitmap
//!
//! ```rust
//! use stegobmp_core::Algorithm;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! stegobmp_core::api::embed::prepare()
//!     .with_secret_file("tests/data/hello_world.txt") // will hide this file inside the image
//!     .with_carrier("tests/images/plain/carrier.bmp")
//!     .with_algorithm(Algorithm::Lsbi)
//!     .with_password("SuperSecret42")                 // will encrypt the data with aes128-cbc
//!     .with_output(temp_dir.path().join("image-with-a-file-inside.bmp"))
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Extract a file from a bitmap
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! let file = stegobmp_core::api::extract::prepare()
//!     .from_secret_file("tests/images/encrypted/hello_world.bmp")
//!     .using_password("Secret42")
//!     .into_output(temp_dir.path().join("hello_world"))
//!     .execute()
//!     .expect("Failed to extract file from image");
//!
//! assert_eq!(file.extension().unwrap(), "txt");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    // clippy::cast_lossless,
    // clippy::missing_panics_doc,
    clippy::redundant_else,
    // clippy::use_self,
)]

pub mod api;
pub mod capacity;
pub mod carrier;
pub mod codec;
pub mod commands;
pub mod error;
pub mod message;
pub mod payload;
pub mod raw_message;
pub mod result;

#[cfg(test)]
mod test_utils;

pub use message::*;
pub use raw_message::*;
pub use stegobmp_crypto::{CipherAlgorithm, CipherMode, CipherSpec};

pub use crate::codec::{Algorithm, CodecOptions};
pub use crate::error::StegoError;
pub use crate::result::Result;
