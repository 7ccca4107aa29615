use std::io::{self, Read};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use super::{Slot, UnveilAlgorithm};
use crate::carrier::{Channels, Pixel};

/// Reads the hidden bytes back out of a pixel stream.
///
/// Bits are assembled most significant bit first; a trailing partial
/// byte at the end of the carrier is dropped.
pub struct Decoder<I, A>
where
    I: Iterator<Item = io::Result<Pixel>>,
    A: UnveilAlgorithm,
{
    channels: Channels<I>,
    algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = io::Result<Pixel>>,
    A: UnveilAlgorithm,
{
    pub fn new(pixels: I, algorithm: A) -> Self {
        Self {
            channels: Channels::new(pixels),
            algorithm,
        }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = io::Result<Pixel>>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let wanted = buf.len() as u64 * 8;
        let mut bit_buffer = BitWriter::endian(Vec::with_capacity(buf.len()), BigEndian);

        let mut bits_read = 0u64;
        while bits_read < wanted {
            let Some(channel) = self.channels.next() else {
                break;
            };
            let (channel, value) = channel?;
            if let Slot::Data { bits, value } = self.algorithm.unveil(channel, value) {
                bit_buffer.write(bits, value)?;
                bits_read += u64::from(bits);
            }
        }

        let complete = (bits_read / 8) as usize;
        bit_buffer.byte_align()?;
        let bytes = bit_buffer.into_writer();
        buf[..complete].copy_from_slice(&bytes[..complete]);

        Ok(complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Lsb1Unveil, Lsb4Unveil};

    fn pixels(values: &[[u8; 3]]) -> impl Iterator<Item = io::Result<Pixel>> + '_ {
        values.iter().map(|bgr| Ok(Pixel::from(*bgr)))
    }

    #[test]
    fn should_assemble_bits_msb_first() {
        // 0b0100_1000 = 'H'
        let values = [[0, 1, 0], [0, 1, 0], [0, 0, 0xFF]];
        let mut decoder = Decoder::new(pixels(&values), Lsb1Unveil);
        let mut buf = [0u8; 1];

        decoder.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"H");
    }

    #[test]
    fn should_assemble_nibbles_high_first() {
        let values = [[0xF4, 0x08, 0x36], [0x1F, 0, 0]];
        let mut decoder = Decoder::new(pixels(&values), Lsb4Unveil);
        let mut buf = [0u8; 2];

        decoder.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0x48, 0x6F]);
    }

    #[test]
    fn should_drop_a_partial_byte_at_the_end() {
        let values = [[1, 1, 1], [1, 1, 1], [1, 1, 1], [1, 1, 1]];
        let mut decoder = Decoder::new(pixels(&values), Lsb1Unveil);
        let mut buf = Vec::new();

        decoder.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, vec![0xFF]);
    }
}
