use std::io::{self, ErrorKind, Read};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::result::Result;
use crate::{Message, StegoError};

pub const LENGTH_HEADER_SIZE: usize = 4;
/// the extension with its leading dot and the terminating NUL
pub const MAX_EXTENSION_LEN: usize = 256;

pub trait PayloadEncoder {
    fn encode(&self, message: &Message) -> Result<Vec<u8>>;

    fn encoded_size(&self, message: &Message) -> usize;
}

pub trait PayloadDecoder {
    /// Reads the framed payload as it was written, without interpreting it.
    ///
    /// `max_size` bounds the size header, anything bigger or zero is treated as corruption.
    fn decode_raw(&self, content: &mut dyn Read, max_size: u64) -> Result<Vec<u8>>;

    fn decode(&self, content: &mut dyn Read, max_size: u64) -> Result<Message> {
        let raw = self.decode_raw(content, max_size)?;
        Message::parse(&raw, true)
    }
}

pub trait PayloadCodec: PayloadEncoder + PayloadDecoder {}

fn read_failure(source: io::Error) -> StegoError {
    if source.kind() == ErrorKind::UnexpectedEof {
        StegoError::TruncatedPayload
    } else {
        StegoError::ReadError { source }
    }
}

/// appends `[size:u32 BE][data]` and, if given, `[extension][NUL]`
pub fn write_frame(buffer: &mut Vec<u8>, data: &[u8], extension: Option<&str>) -> Result<()> {
    let size = u32::try_from(data.len()).map_err(|_| StegoError::PayloadTooLarge(data.len()))?;
    buffer.write_u32::<BigEndian>(size)?;
    buffer.extend_from_slice(data);
    if let Some(extension) = extension {
        buffer.extend_from_slice(extension.as_bytes());
        buffer.write_u8(0)?;
    }

    Ok(())
}

/// reads the size header and checks it against `max_size`
pub fn read_size_header(content: &mut dyn Read, max_size: u64) -> Result<usize> {
    let size = content.read_u32::<BigEndian>().map_err(read_failure)?;
    if size == 0 || u64::from(size) > max_size {
        return Err(StegoError::ImplausiblePayloadSize {
            size,
            max: max_size,
        });
    }

    Ok(size as usize)
}

pub fn read_data(content: &mut dyn Read, size: usize) -> Result<Vec<u8>> {
    let mut data = vec![0; size];
    content.read_exact(&mut data).map_err(read_failure)?;

    Ok(data)
}

/// reads the raw extension bytes up to the NUL terminator, which is consumed but not returned
pub fn read_extension(content: &mut dyn Read) -> Result<Vec<u8>> {
    let mut extension = Vec::new();
    loop {
        let byte = content.read_u8().map_err(read_failure)?;
        if byte == 0 {
            return Ok(extension);
        }
        extension.push(byte);
        if extension.len() >= MAX_EXTENSION_LEN {
            return Err(StegoError::MissingExtensionTerminator(MAX_EXTENSION_LEN));
        }
    }
}

/// `[size][data][.ext\0]`, the plain payload format
#[derive(Debug, Default)]
pub struct LengthHeaderCodec;

impl PayloadEncoder for LengthHeaderCodec {
    fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_size(message));
        write_frame(&mut buffer, &message.data, Some(&message.extension))?;

        Ok(buffer)
    }

    fn encoded_size(&self, message: &Message) -> usize {
        LENGTH_HEADER_SIZE + message.data.len() + message.extension.len() + 1
    }
}

impl PayloadDecoder for LengthHeaderCodec {
    fn decode_raw(&self, content: &mut dyn Read, max_size: u64) -> Result<Vec<u8>> {
        let size = read_size_header(content, max_size)?;
        let data = read_data(content, size)?;
        let extension = read_extension(content)?;

        let mut raw = Vec::with_capacity(LENGTH_HEADER_SIZE + size + extension.len() + 1);
        raw.write_u32::<BigEndian>(size as u32)?;
        raw.extend_from_slice(&data);
        raw.extend_from_slice(&extension);
        raw.write_u8(0)?;

        Ok(raw)
    }
}

impl PayloadCodec for LengthHeaderCodec {}
