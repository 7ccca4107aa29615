use super::{BitCursor, HideAlgorithm, Slot, UnveilAlgorithm};
use crate::carrier::{Channel, Pixel, PixelTransform};

/// one payload nibble in the low nibble of every color channel, high nibble first
pub struct Lsb4Hide {
    bits: BitCursor,
}

impl Lsb4Hide {
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            bits: BitCursor::new(payload),
        }
    }
}

impl PixelTransform for Lsb4Hide {
    fn transform(&mut self, mut pixel: Pixel) -> Pixel {
        for channel in Channel::ORDER {
            let Some(nibble) = self.bits.next_bits(4) else {
                break;
            };
            let color = pixel.channel_mut(channel);
            *color = (*color & 0xF0) | nibble;
        }
        pixel
    }
}

impl HideAlgorithm for Lsb4Hide {
    fn bits_written(&self) -> u64 {
        self.bits.position()
    }

    fn bits_required(&self) -> u64 {
        self.bits.total()
    }
}

#[derive(Debug, Default)]
pub struct Lsb4Unveil;

impl UnveilAlgorithm for Lsb4Unveil {
    fn unveil(&mut self, _channel: Channel, value: u8) -> Slot {
        Slot::Data {
            bits: 4,
            value: value & 0x0F,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_replace_the_low_nibbles() {
        let mut hide = Lsb4Hide::new(vec![0x12, 0x34]);

        let first = hide.transform(Pixel::new(0xAB, 0xCD, 0xEF));
        let second = hide.transform(Pixel::new(0xFF, 0xFF, 0xFF));

        assert_eq!(first, Pixel::new(0xA1, 0xC2, 0xE3));
        assert_eq!(second, Pixel::new(0xF4, 0xFF, 0xFF));
        assert_eq!(hide.bits_written(), 16);
    }

    #[test]
    fn should_unveil_the_low_nibble() {
        assert_eq!(
            Lsb4Unveil.unveil(Channel::Red, 0xA7),
            Slot::Data { bits: 4, value: 7 }
        );
    }
}
