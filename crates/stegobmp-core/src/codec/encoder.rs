use std::io::{Read, Seek, Write};

use log::{debug, error};

use super::{lsbi, Algorithm, HideAlgorithm, HideAlgorithms, InversionMap};
use super::{Lsb1Hide, Lsb4Hide, LsbiHide};
use crate::carrier::Carrier;
use crate::result::Result;
use crate::StegoError;

/// what [`hide`] did to the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideReport {
    pub algorithm: Algorithm,
    pub bits_written: u64,
    pub pixels: u64,
    /// only for [`Algorithm::Lsbi`]
    pub inversion_map: Option<InversionMap>,
}

/// Hides `payload` in the carrier and streams the resulting bitmap into `sink`.
///
/// Fails with [`StegoError::IncompleteEmbedding`] when the carrier ends
/// before all payload bits are placed.
pub fn hide<R, W>(
    carrier: &mut Carrier<R>,
    sink: &mut W,
    algorithm: Algorithm,
    payload: Vec<u8>,
) -> Result<HideReport>
where
    R: Read + Seek,
    W: Write,
{
    let mut hider: HideAlgorithms = match algorithm {
        Algorithm::Lsb1 => Lsb1Hide::new(payload).into(),
        Algorithm::Lsb4 => Lsb4Hide::new(payload).into(),
        Algorithm::Lsbi => {
            carrier.rewind_to_pixel_data()?;
            let map = lsbi::analyse(carrier.pixels(), &payload)
                .map_err(|source| StegoError::ReadError { source })?;
            debug!("LSBI inversion map {:04b}", map.bits());
            LsbiHide::new(map, payload).into()
        }
    };
    carrier.rewind_to_pixel_data()?;

    let pixels = carrier.embed_into(sink, &mut hider)?;

    let (written, required) = (hider.bits_written(), hider.bits_required());
    if written < required {
        error!("carrier ended after {written} of {required} bits");
        return Err(StegoError::IncompleteEmbedding { written, required });
    }
    debug!("{algorithm} embedded {written} bits into {pixels} pixels");

    Ok(HideReport {
        algorithm,
        bits_written: written,
        pixels,
        inversion_map: hider.inversion_map(),
    })
}
