use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use super::Pixel;
use crate::result::Result;
use crate::StegoError;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_MIN_SIZE: usize = 40;
/// file header plus the smallest supported info header
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_MIN_SIZE;

/// `BM` in little endian
const SIGNATURE: u16 = 0x4D42;
const BITS_PER_PIXEL: u16 = 24;
const COMPRESSION_NONE: u32 = 0;

/// The fields of the bitmap file header and info header that matter for hiding data.
///
/// Resolution and palette fields are not interpreted, they travel along
/// untouched with the rest of the preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: u16,
    pub file_size: u32,
    pub pixel_data_offset: u32,
    pub info_header_size: u32,
    pub width: i32,
    /// negative for top-down bitmaps
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

impl BmpHeader {
    /// parses and validates the first [`HEADERS_SIZE`] bytes of a bitmap
    pub fn parse(bytes: &[u8; HEADERS_SIZE]) -> Result<Self> {
        let mut c = Cursor::new(&bytes[..]);
        let signature = c.read_u16::<LittleEndian>()?;
        let file_size = c.read_u32::<LittleEndian>()?;
        // two reserved u16
        c.read_u32::<LittleEndian>()?;
        let pixel_data_offset = c.read_u32::<LittleEndian>()?;
        let info_header_size = c.read_u32::<LittleEndian>()?;
        let width = c.read_i32::<LittleEndian>()?;
        let height = c.read_i32::<LittleEndian>()?;
        let planes = c.read_u16::<LittleEndian>()?;
        let bits_per_pixel = c.read_u16::<LittleEndian>()?;
        let compression = c.read_u32::<LittleEndian>()?;

        let header = Self {
            signature,
            file_size,
            pixel_data_offset,
            info_header_size,
            width,
            height,
            planes,
            bits_per_pixel,
            compression,
        };
        header.validate()?;

        Ok(header)
    }

    fn validate(&self) -> Result<()> {
        if self.signature != SIGNATURE {
            return Err(StegoError::InvalidSignature(self.signature));
        }
        if self.bits_per_pixel != BITS_PER_PIXEL {
            return Err(StegoError::UnsupportedBitDepth(self.bits_per_pixel));
        }
        if self.compression != COMPRESSION_NONE {
            return Err(StegoError::CompressedCarrier(self.compression));
        }
        if (self.info_header_size as usize) < INFO_HEADER_MIN_SIZE {
            return Err(StegoError::InvalidCarrierHeader(
                "info header is smaller than 40 bytes",
            ));
        }
        if u64::from(self.pixel_data_offset)
            < (FILE_HEADER_SIZE as u64 + u64::from(self.info_header_size))
        {
            return Err(StegoError::InvalidCarrierHeader(
                "pixel data offset points into the headers",
            ));
        }
        if self.width <= 0 || self.height == 0 {
            return Err(StegoError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// rows are aligned to 4 bytes
    pub fn row_padding(&self) -> usize {
        (4 - (self.width() as usize * Pixel::SIZE) % 4) % 4
    }

    pub fn row_len(&self) -> usize {
        self.width() as usize * Pixel::SIZE + self.row_padding()
    }
}
