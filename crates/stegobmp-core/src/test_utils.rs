use std::fs;
use std::path::{Path, PathBuf};

/// value of the row padding bytes written by [`bmp_bytes`]
pub const PADDING_MARKER: u8 = 0xAB;

/// Builds a 24-bit bitmap in memory, `fill` returns the BGR bytes for a pixel at `(x, row)`.
///
/// Rows are numbered in storage order. Padding bytes are set to [`PADDING_MARKER`]
/// so that tests can tell whether they were touched.
pub fn bmp_bytes<F>(width: u32, height: i32, fill: F) -> Vec<u8>
where
    F: Fn(u32, u32) -> [u8; 3],
{
    let padding = (4 - (width as usize * 3) % 4) % 4;
    let row_len = width as usize * 3 + padding;
    let pixel_bytes = row_len * height.unsigned_abs() as usize;
    let file_size = 54 + pixel_bytes;

    let mut bmp = Vec::with_capacity(file_size);
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&(file_size as u32).to_le_bytes());
    bmp.extend_from_slice(&[0; 4]);
    bmp.extend_from_slice(&54u32.to_le_bytes());
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&(width as i32).to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&24u16.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&(pixel_bytes as u32).to_le_bytes());
    bmp.extend_from_slice(&2835i32.to_le_bytes());
    bmp.extend_from_slice(&2835i32.to_le_bytes());
    bmp.extend_from_slice(&[0; 8]);

    for y in 0..height.unsigned_abs() {
        for x in 0..width {
            bmp.extend_from_slice(&fill(x, y));
        }
        bmp.extend(std::iter::repeat(PADDING_MARKER).take(padding));
    }

    bmp
}

/// pixel values that differ a lot from each other, but are stable between runs
pub fn noisy_pixel(x: u32, y: u32) -> [u8; 3] {
    let seed = x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503);
    [
        (seed >> 3) as u8,
        (seed >> 11) as u8,
        (seed >> 19) as u8,
    ]
}

pub fn write_bmp<F>(dir: &Path, name: &str, width: u32, height: i32, fill: F) -> PathBuf
where
    F: Fn(u32, u32) -> [u8; 3],
{
    let path = dir.join(name);
    fs::write(&path, bmp_bytes(width, height, fill)).expect("Failed to write carrier");
    path
}

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write secret file");
    path
}
