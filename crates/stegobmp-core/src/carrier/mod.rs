//! Carrier accessor for 24-bit uncompressed bitmaps.
//!
//! The headers (and everything else before the pixel data) are kept as an
//! opaque preamble and written back untouched, only pixel bytes are ever
//! handed to a [`PixelTransform`].

mod header;
mod pixel;
mod pixels;

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use enum_dispatch::enum_dispatch;
use log::debug;

pub use header::*;
pub use pixel::*;
pub use pixels::{Channels, Pixels};
use pixels::read_fully;

use crate::result::Result;
use crate::StegoError;

/// per pixel transformation applied while a carrier is streamed into a sink
#[enum_dispatch]
pub trait PixelTransform {
    fn transform(&mut self, pixel: Pixel) -> Pixel;
}

/// pixels streamed at once by [`Carrier::for_each_pixel`]
const CHUNK_PIXELS: usize = 1024;

fn header_read_failure(source: io::Error) -> StegoError {
    if source.kind() == ErrorKind::UnexpectedEof {
        StegoError::InvalidCarrierHeader("file is truncated")
    } else {
        StegoError::ReadError { source }
    }
}

/// a validated bitmap with its read cursor inside the pixel data
#[derive(Debug)]
pub struct Carrier<R> {
    reader: R,
    header: BmpHeader,
    preamble: Vec<u8>,
}

impl Carrier<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|source| StegoError::ReadError { source })?;

        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Carrier<R> {
    /// reads and validates the headers, the reader must be at the beginning of the bitmap
    pub fn from_reader(mut reader: R) -> Result<Self> {
        let mut headers = [0u8; HEADERS_SIZE];
        reader
            .read_exact(&mut headers)
            .map_err(header_read_failure)?;
        let header = BmpHeader::parse(&headers)?;

        let mut preamble = headers.to_vec();
        let remaining = u64::from(header.pixel_data_offset) - HEADERS_SIZE as u64;
        (&mut reader)
            .take(remaining)
            .read_to_end(&mut preamble)
            .map_err(header_read_failure)?;
        if preamble.len() as u64 != u64::from(header.pixel_data_offset) {
            return Err(StegoError::InvalidCarrierHeader("file is truncated"));
        }

        debug!(
            "carrier {}x{} ({} pixels, {} padding bytes per row)",
            header.width(),
            header.height,
            header.pixel_count(),
            header.row_padding()
        );

        Ok(Self {
            reader,
            header,
            preamble,
        })
    }

    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// all bytes in front of the pixel data, the headers included
    pub fn preamble(&self) -> &[u8] {
        &self.preamble
    }

    pub fn pixel_count(&self) -> u64 {
        self.header.pixel_count()
    }

    /// moves the read cursor back to the first pixel
    pub fn rewind_to_pixel_data(&mut self) -> Result<()> {
        self.reader
            .seek(SeekFrom::Start(u64::from(self.header.pixel_data_offset)))
            .map_err(|source| StegoError::ReadError { source })?;

        Ok(())
    }

    /// pixels from the current read cursor on
    pub fn pixels(&mut self) -> Pixels<'_, R> {
        Pixels::new(&mut self.reader, &self.header)
    }

    /// writes the preamble and then all transformed pixels into `sink`, returns the number of pixels
    pub fn embed_into<W, T>(&mut self, sink: &mut W, transform: &mut T) -> Result<u64>
    where
        W: Write,
        T: PixelTransform + ?Sized,
    {
        sink.write_all(&self.preamble)
            .map_err(|source| StegoError::WriteError { source })?;
        let pixels = self.for_each_pixel(sink, transform)?;
        sink.flush()
            .map_err(|source| StegoError::WriteError { source })?;

        Ok(pixels)
    }

    /// Streams the pixels from the read cursor through `transform` into `sink`.
    ///
    /// Row padding and any bytes behind the pixel data are copied verbatim.
    /// Returns the number of pixels transformed, which is less than
    /// [`Carrier::pixel_count`] for a truncated carrier.
    pub fn for_each_pixel<W, T>(&mut self, sink: &mut W, transform: &mut T) -> Result<u64>
    where
        W: Write,
        T: PixelTransform + ?Sized,
    {
        let width = u64::from(self.header.width());
        let padding = self.header.row_padding();
        // the declared width is untrusted, rows are streamed in bounded chunks
        let mut chunk = [0u8; CHUNK_PIXELS * Pixel::SIZE];
        let mut pixels = 0;

        for _ in 0..self.header.height() {
            let mut left = width;
            while left > 0 {
                let len = left.min(CHUNK_PIXELS as u64) as usize * Pixel::SIZE;
                let filled = self.pass_through(sink, &mut chunk[..len], |bytes| {
                    for bgr in bytes.chunks_exact_mut(Pixel::SIZE) {
                        let pixel = transform.transform(Pixel::from_bgr(bgr));
                        bgr.copy_from_slice(&pixel.to_bgr());
                        pixels += 1;
                    }
                })?;
                if filled < len {
                    debug!("carrier ended after {pixels} pixels");
                    return Ok(pixels);
                }
                left -= (len / Pixel::SIZE) as u64;
            }

            let filled = self.pass_through(sink, &mut chunk[..padding], |_| {})?;
            if filled < padding {
                debug!("carrier ended after {pixels} pixels");
                return Ok(pixels);
            }
        }

        let mut trailing = 0;
        loop {
            let filled = self.pass_through(sink, &mut chunk, |_| {})?;
            trailing += filled;
            if filled < chunk.len() {
                break;
            }
        }
        if trailing > 0 {
            debug!("copied {trailing} bytes behind the pixel data");
        }

        Ok(pixels)
    }

    /// Fills `buf` from the carrier, hands the complete pixels in it to `edit`
    /// and writes everything that was read into `sink`.
    fn pass_through<W, F>(&mut self, sink: &mut W, buf: &mut [u8], edit: F) -> Result<usize>
    where
        W: Write,
        F: FnOnce(&mut [u8]),
    {
        let filled = read_fully(&mut self.reader, buf)
            .map_err(|source| StegoError::ReadError { source })?;
        let complete = filled / Pixel::SIZE * Pixel::SIZE;
        edit(&mut buf[..complete]);
        sink.write_all(&buf[..filled])
            .map_err(|source| StegoError::WriteError { source })?;

        Ok(filled)
    }
}
