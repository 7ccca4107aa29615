//! The steganographic codecs, all of them work on the pixel stream of a [`Carrier`].
//!
//! | algorithm | bits per pixel | channels used                       |
//! |-----------|----------------|-------------------------------------|
//! | `LSB1`    | 3              | lowest bit of blue, green, red      |
//! | `LSB4`    | 12             | low nibble of blue, green, red      |
//! | `LSBI`    | 2              | lowest bit of blue, green, inverted per pattern |
//!
//! [`Carrier`]: crate::carrier::Carrier

mod bits;
mod decoder;
mod encoder;
mod lsb1;
mod lsb4;
pub mod lsbi;
mod options;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

pub use bits::BitCursor;
pub use decoder::Decoder;
pub use encoder::{hide, HideReport};
pub use lsb1::{Lsb1Hide, Lsb1Unveil};
pub use lsb4::{Lsb4Hide, Lsb4Unveil};
pub use lsbi::{InversionMap, LsbiHide, LsbiUnveil};
pub use options::CodecOptions;

use crate::carrier::{Channel, Pixel, PixelTransform};
use crate::StegoError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Lsb1,
    Lsb4,
    Lsbi,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Lsb1, Algorithm::Lsb4, Algorithm::Lsbi];

    pub fn bits_per_pixel(&self) -> u64 {
        match self {
            Algorithm::Lsb1 => 3,
            Algorithm::Lsb4 => 12,
            Algorithm::Lsbi => 2,
        }
    }

    /// bits spent once per carrier, independent of the payload
    pub fn overhead_bits(&self) -> u64 {
        match self {
            Algorithm::Lsbi => u64::from(lsbi::CONTROL_SLOTS),
            _ => 0,
        }
    }

    pub fn capacity_bits(&self, pixel_count: u64) -> u64 {
        pixel_count.saturating_mul(self.bits_per_pixel())
    }

    pub fn required_bits(&self, payload_len: usize) -> u64 {
        (payload_len as u64).saturating_mul(8) + self.overhead_bits()
    }

    /// upper bound for any size header found in a carrier of `pixel_count` pixels
    pub fn max_payload_len(&self, pixel_count: u64) -> u64 {
        self.capacity_bits(pixel_count) / 8
    }

    pub fn unveiler(&self) -> UnveilAlgorithms {
        match self {
            Algorithm::Lsb1 => Lsb1Unveil.into(),
            Algorithm::Lsb4 => Lsb4Unveil.into(),
            Algorithm::Lsbi => LsbiUnveil::default().into(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LSB1" => Ok(Algorithm::Lsb1),
            "LSB4" => Ok(Algorithm::Lsb4),
            "LSBI" => Ok(Algorithm::Lsbi),
            _ => Err(StegoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Lsb1 => "LSB1",
            Algorithm::Lsb4 => "LSB4",
            Algorithm::Lsbi => "LSBI",
        };
        f.write_str(name)
    }
}

/// what a single color channel contributes to the unveiled payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// the lowest `bits` bits of `value` belong to the payload
    Data { bits: u32, value: u8 },
    Skip,
}

#[enum_dispatch]
pub trait HideAlgorithm: PixelTransform {
    fn bits_written(&self) -> u64;

    fn bits_required(&self) -> u64;

    fn inversion_map(&self) -> Option<InversionMap> {
        None
    }
}

#[enum_dispatch]
pub trait UnveilAlgorithm {
    fn unveil(&mut self, channel: Channel, value: u8) -> Slot;
}

#[enum_dispatch(PixelTransform, HideAlgorithm)]
pub enum HideAlgorithms {
    Lsb1Hide,
    Lsb4Hide,
    LsbiHide,
}

#[enum_dispatch(UnveilAlgorithm)]
#[derive(Debug)]
pub enum UnveilAlgorithms {
    Lsb1Unveil,
    Lsb4Unveil,
    LsbiUnveil,
}
