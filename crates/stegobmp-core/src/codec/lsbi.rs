//! LSB improved: 1 bit per blue and green channel, red is never touched.
//!
//! Before embedding, the payload slots are analysed per pattern (bits 1 and 2
//! of the carrier channel). Whenever inverting the payload bits of a pattern
//! changes fewer carrier LSBs than plain insertion does, that pattern gets
//! its bit set in the [`InversionMap`]. The 4 bit map itself is stored in
//! the first 4 channels (blue, green, red, blue) by plain LSB1 insertion.

use std::io;

use super::{BitCursor, HideAlgorithm, Slot, UnveilAlgorithm};
use crate::carrier::{Channel, Pixel, PixelTransform};

/// number of channels at the start of the pixel data holding the inversion map
pub const CONTROL_SLOTS: u32 = 4;

/// 4 bits, bit `p` set means payload bits on channels with pattern `p` are inverted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InversionMap(u8);

impl InversionMap {
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn inverts(&self, pattern: u8) -> bool {
        (self.0 >> pattern) & 1 == 1
    }

    /// the map bit stored in control slot `slot`
    fn control_bit(&self, slot: u32) -> u8 {
        (self.0 >> slot) & 1
    }
}

/// bits 1 and 2 of a color value
pub fn pattern_of(value: u8) -> u8 {
    (value >> 1) & 0b11
}

/// per pattern counts of LSB changes for plain and for inverted insertion
#[derive(Debug, Default)]
pub struct PatternTally {
    normal: [u64; 4],
    inverted: [u64; 4],
}

impl PatternTally {
    pub fn record(&mut self, value: u8, bit: u8) {
        let pattern = pattern_of(value) as usize;
        if value & 1 == bit {
            self.inverted[pattern] += 1;
        } else {
            self.normal[pattern] += 1;
        }
    }

    /// inverts a pattern when that changes no more LSBs than plain insertion
    pub fn inversion_map(&self) -> InversionMap {
        let bits = (0..4)
            .filter(|&p| self.inverted[p] <= self.normal[p])
            .fold(0u8, |map, p| map | (1 << p));
        InversionMap::from_bits(bits)
    }
}

/// Walks the payload slots the way [`LsbiHide`] will and computes the inversion map.
///
/// `pixels` must start at the first pixel of the carrier.
pub fn analyse<I>(pixels: I, payload: &[u8]) -> io::Result<InversionMap>
where
    I: Iterator<Item = io::Result<Pixel>>,
{
    let mut bits = BitCursor::new(payload.to_vec());
    let mut tally = PatternTally::default();
    let mut control = CONTROL_SLOTS;

    'pixels: for pixel in pixels {
        let pixel = pixel?;
        for channel in Channel::ORDER {
            if control > 0 {
                control -= 1;
                continue;
            }
            if channel == Channel::Red {
                continue;
            }
            let Some(bit) = bits.next_bits(1) else {
                break 'pixels;
            };
            tally.record(pixel.channel(channel), bit);
        }
    }

    Ok(tally.inversion_map())
}

pub struct LsbiHide {
    map: InversionMap,
    control_written: u32,
    bits: BitCursor,
}

impl LsbiHide {
    /// `map` is the result of [`analyse`] over the same carrier and payload
    pub fn new(map: InversionMap, payload: Vec<u8>) -> Self {
        Self {
            map,
            control_written: 0,
            bits: BitCursor::new(payload),
        }
    }
}

impl PixelTransform for LsbiHide {
    fn transform(&mut self, mut pixel: Pixel) -> Pixel {
        for channel in Channel::ORDER {
            let color = pixel.channel_mut(channel);
            if self.control_written < CONTROL_SLOTS {
                *color = (*color & !1) | self.map.control_bit(self.control_written);
                self.control_written += 1;
                continue;
            }
            if channel == Channel::Red {
                continue;
            }
            let Some(mut bit) = self.bits.next_bits(1) else {
                break;
            };
            if self.map.inverts(pattern_of(*color)) {
                bit ^= 1;
            }
            *color = (*color & !1) | bit;
        }
        pixel
    }
}

impl HideAlgorithm for LsbiHide {
    fn bits_written(&self) -> u64 {
        self.bits.position()
    }

    fn bits_required(&self) -> u64 {
        self.bits.total()
    }

    fn inversion_map(&self) -> Option<InversionMap> {
        Some(self.map)
    }
}

#[derive(Debug, Default)]
pub struct LsbiUnveil {
    map: u8,
    control_read: u32,
}

impl LsbiUnveil {
    /// the map read so far, complete after the first 4 channels
    pub fn inversion_map(&self) -> InversionMap {
        InversionMap::from_bits(self.map)
    }
}

impl UnveilAlgorithm for LsbiUnveil {
    fn unveil(&mut self, channel: Channel, value: u8) -> Slot {
        if self.control_read < CONTROL_SLOTS {
            self.map |= (value & 1) << self.control_read;
            self.control_read += 1;
            return Slot::Skip;
        }
        if channel == Channel::Red {
            return Slot::Skip;
        }

        let mut bit = value & 1;
        if self.inversion_map().inverts(pattern_of(value)) {
            bit ^= 1;
        }
        Slot::Data { bits: 1, value: bit }
    }
}
