use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};

/// Hands out the bits of a payload, most significant bit first.
///
/// The position only moves forward; once all bits are handed out
/// every further request yields `None`.
pub struct BitCursor {
    reader: BitReader<Cursor<Vec<u8>>, BigEndian>,
    position: u64,
    total: u64,
}

impl BitCursor {
    pub fn new(payload: Vec<u8>) -> Self {
        let total = payload.len() as u64 * 8;
        Self {
            reader: BitReader::endian(Cursor::new(payload), BigEndian),
            position: 0,
            total,
        }
    }

    /// the next `bits` bits (1 to 8) as the low bits of a byte
    pub fn next_bits(&mut self, bits: u32) -> Option<u8> {
        if self.position + u64::from(bits) > self.total {
            return None;
        }
        let value = self.reader.read::<u8>(bits).ok()?;
        self.position += u64::from(bits);

        Some(value)
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.total
    }
}
