use super::{BitCursor, HideAlgorithm, Slot, UnveilAlgorithm};
use crate::carrier::{Channel, Pixel, PixelTransform};

/// one payload bit in the least significant bit of every color channel
pub struct Lsb1Hide {
    bits: BitCursor,
}

impl Lsb1Hide {
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            bits: BitCursor::new(payload),
        }
    }
}

impl PixelTransform for Lsb1Hide {
    fn transform(&mut self, mut pixel: Pixel) -> Pixel {
        for channel in Channel::ORDER {
            let Some(bit) = self.bits.next_bits(1) else {
                break;
            };
            let color = pixel.channel_mut(channel);
            *color = (*color & !1) | bit;
        }
        pixel
    }
}

impl HideAlgorithm for Lsb1Hide {
    fn bits_written(&self) -> u64 {
        self.bits.position()
    }

    fn bits_required(&self) -> u64 {
        self.bits.total()
    }
}

#[derive(Debug, Default)]
pub struct Lsb1Unveil;

impl UnveilAlgorithm for Lsb1Unveil {
    fn unveil(&mut self, _channel: Channel, value: u8) -> Slot {
        Slot::Data {
            bits: 1,
            value: value & 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_set_the_lowest_bit_of_every_channel() {
        let mut hide = Lsb1Hide::new(vec![0b1010_0000]);

        let pixel = hide.transform(Pixel::new(0b1111_1110, 0b0000_0001, 0b0000_0000));
        assert_eq!(pixel, Pixel::new(0b1111_1111, 0b0000_0000, 0b0000_0001));
        assert_eq!(hide.bits_written(), 3);
    }

    #[test]
    fn should_leave_pixels_alone_when_done() {
        let mut hide = Lsb1Hide::new(vec![0xFF]);
        for _ in 0..2 {
            hide.transform(Pixel::default());
        }

        // only 2 of 8 bits left, red stays untouched
        let pixel = hide.transform(Pixel::new(0, 0, 0));
        assert_eq!(pixel, Pixel::new(1, 1, 0));
        assert_eq!(hide.transform(Pixel::new(0, 0, 0)), Pixel::new(0, 0, 0));
        assert_eq!(hide.bits_written(), hide.bits_required());
    }
}
