use std::io::{self, ErrorKind, Read};

use super::{BmpHeader, Channel, Pixel};

/// reads until `buf` is full or the stream ends, returns the number of bytes read
pub(crate) fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// tracks the position inside of a pixel row, to know when padding follows
#[derive(Debug)]
pub(crate) struct RowCursor {
    width: u32,
    padding: usize,
    column: u32,
}

impl RowCursor {
    pub(crate) fn new(header: &BmpHeader) -> Self {
        Self {
            width: header.width(),
            padding: header.row_padding(),
            column: 0,
        }
    }

    /// moves on by one pixel and returns how many padding bytes follow it
    pub(crate) fn advance(&mut self) -> usize {
        self.column += 1;
        if self.column == self.width {
            self.column = 0;
            self.padding
        } else {
            0
        }
    }
}

/// Iterates the pixels of a carrier in storage order, row padding is skipped.
///
/// Ends after the last declared pixel or when the stream ends,
/// a trailing partial pixel is not yielded.
pub struct Pixels<'a, R> {
    reader: &'a mut R,
    row: RowCursor,
    remaining: u64,
}

impl<'a, R: Read> Pixels<'a, R> {
    pub(crate) fn new(reader: &'a mut R, header: &BmpHeader) -> Self {
        Self {
            reader,
            row: RowCursor::new(header),
            remaining: header.pixel_count(),
        }
    }

    /// flattens the pixels into their color channels
    pub fn channels(self) -> Channels<Self> {
        Channels::new(self)
    }
}

impl<R: Read> Iterator for Pixels<'_, R> {
    type Item = io::Result<Pixel>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let mut bgr = [0u8; Pixel::SIZE];
        match read_fully(self.reader, &mut bgr) {
            Ok(Pixel::SIZE) => {}
            Ok(_) => {
                self.remaining = 0;
                return None;
            }
            Err(e) => return Some(Err(e)),
        }
        self.remaining -= 1;

        let padding = self.row.advance();
        if padding > 0 && self.remaining > 0 {
            let mut skipped = [0u8; 3];
            if let Err(e) = read_fully(self.reader, &mut skipped[..padding]) {
                return Some(Err(e));
            }
        }

        Some(Ok(Pixel::from(bgr)))
    }
}

/// color channel iterator over pixels, blue, green and red for each pixel
pub struct Channels<I> {
    pixels: I,
    current: Option<Pixel>,
    next_channel: usize,
}

impl<I> Channels<I>
where
    I: Iterator<Item = io::Result<Pixel>>,
{
    pub fn new(pixels: I) -> Self {
        Self {
            pixels,
            current: None,
            next_channel: 0,
        }
    }
}

impl<I> Iterator for Channels<I>
where
    I: Iterator<Item = io::Result<Pixel>>,
{
    type Item = io::Result<(Channel, u8)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() || self.next_channel == Channel::ORDER.len() {
            match self.pixels.next()? {
                Ok(pixel) => {
                    self.current = Some(pixel);
                    self.next_channel = 0;
                }
                Err(e) => return Some(Err(e)),
            }
        }

        let pixel = self.current?;
        let channel = Channel::ORDER[self.next_channel];
        self.next_channel += 1;

        Some(Ok((channel, pixel.channel(channel))))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn header(width: i32, height: i32) -> BmpHeader {
        BmpHeader {
            signature: 0x4D42,
            file_size: 0,
            pixel_data_offset: 54,
            info_header_size: 40,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
        }
    }

    #[test]
    fn should_skip_the_row_padding() {
        // 2 pixels per row, 2 padding bytes
        let data = [1, 2, 3, 4, 5, 6, 0xEE, 0xEE, 7, 8, 9, 10, 11, 12, 0xEE, 0xEE];
        let mut reader = Cursor::new(&data[..]);
        let pixels: Vec<Pixel> = Pixels::new(&mut reader, &header(2, 2))
            .map(|p| p.unwrap())
            .collect();

        assert_eq!(
            pixels,
            vec![
                Pixel::new(1, 2, 3),
                Pixel::new(4, 5, 6),
                Pixel::new(7, 8, 9),
                Pixel::new(10, 11, 12)
            ]
        );
    }

    #[test]
    fn should_stop_at_the_end_of_the_stream() {
        let data = [1, 2, 3, 4, 5];
        let mut reader = Cursor::new(&data[..]);
        let pixels: Vec<Pixel> = Pixels::new(&mut reader, &header(4, 4))
            .map(|p| p.unwrap())
            .collect();

        assert_eq!(pixels, vec![Pixel::new(1, 2, 3)]);
    }

    #[test]
    fn should_yield_channels_in_storage_order() {
        let data = [1, 2, 3, 4, 5, 6, 0, 0];
        let mut reader = Cursor::new(&data[..]);
        let channels: Vec<(Channel, u8)> = Pixels::new(&mut reader, &header(2, 1))
            .channels()
            .map(|c| c.unwrap())
            .collect();

        assert_eq!(
            channels,
            vec![
                (Channel::Blue, 1),
                (Channel::Green, 2),
                (Channel::Red, 3),
                (Channel::Blue, 4),
                (Channel::Green, 5),
                (Channel::Red, 6),
            ]
        );
    }

    #[test]
    fn row_cursor_should_report_padding_at_row_end() {
        let mut row = RowCursor::new(&header(3, 1));
        assert_eq!(row.advance(), 0);
        assert_eq!(row.advance(), 0);
        assert_eq!(row.advance(), 3);
        assert_eq!(row.advance(), 0);
    }
}
