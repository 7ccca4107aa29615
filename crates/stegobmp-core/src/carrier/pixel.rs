/// color channels of a 24-bit pixel, in the order they are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    pub const ORDER: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];
}

/// one pixel of the carrier, little endian BGR as it appears in the file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Pixel {
    pub const SIZE: usize = 3;

    pub fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Blue => self.blue,
            Channel::Green => self.green,
            Channel::Red => self.red,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Blue => &mut self.blue,
            Channel::Green => &mut self.green,
            Channel::Red => &mut self.red,
        }
    }

    /// `bgr` is one item of `chunks_exact(Pixel::SIZE)`
    pub(crate) fn from_bgr(bgr: &[u8]) -> Self {
        Self::new(bgr[0], bgr[1], bgr[2])
    }

    pub fn to_bgr(self) -> [u8; Pixel::SIZE] {
        [self.blue, self.green, self.red]
    }
}

impl From<[u8; Pixel::SIZE]> for Pixel {
    fn from([blue, green, red]: [u8; Pixel::SIZE]) -> Self {
        Self { blue, green, red }
    }
}
