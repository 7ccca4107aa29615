//! How many bits a carrier can take, and whether a payload fits.

use crate::codec::Algorithm;
use crate::payload::LENGTH_HEADER_SIZE;
use crate::result::Result;
use crate::StegoError;

/// `true` if `required_bits` fit into `pixel_count * bits_per_pixel`
pub fn fits(pixel_count: u64, bits_per_pixel: u64, required_bits: u64) -> bool {
    pixel_count
        .checked_mul(bits_per_pixel)
        .map_or(true, |capacity_bits| required_bits <= capacity_bits)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub algorithm: Algorithm,
    pub capacity_bits: u64,
    pub required_bits: u64,
}

/// checks a payload of `payload_len` bytes against the carrier, fails with [`StegoError::CapacityExceeded`]
pub fn check(pixel_count: u64, algorithm: Algorithm, payload_len: usize) -> Result<Capacity> {
    let capacity = Capacity {
        algorithm,
        capacity_bits: algorithm.capacity_bits(pixel_count),
        required_bits: algorithm.required_bits(payload_len),
    };

    if !fits(
        pixel_count,
        algorithm.bits_per_pixel(),
        capacity.required_bits,
    ) {
        return Err(StegoError::CapacityExceeded {
            required_bits: capacity.required_bits,
            capacity_bits: capacity.capacity_bits,
        });
    }

    Ok(capacity)
}

/// the biggest plain secret file, without extension, that fits into the carrier
pub fn max_secret_len(pixel_count: u64, algorithm: Algorithm) -> u64 {
    let usable_bits = algorithm
        .capacity_bits(pixel_count)
        .saturating_sub(algorithm.overhead_bits());
    (usable_bits / 8).saturating_sub(LENGTH_HEADER_SIZE as u64 + 1)
}

/// what a carrier offers to one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierCapacity {
    pub algorithm: Algorithm,
    pub capacity_bits: u64,
    pub max_secret_len: u64,
}

impl CarrierCapacity {
    pub fn new(pixel_count: u64, algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            capacity_bits: algorithm.capacity_bits(pixel_count),
            max_secret_len: max_secret_len(pixel_count, algorithm),
        }
    }
}
