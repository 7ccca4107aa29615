use std::ffi::OsString;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use crate::payload::{
    read_data, read_extension, read_size_header, PayloadCodecFactory, LENGTH_HEADER_SIZE,
    MAX_EXTENSION_LEN,
};
use crate::result::Result;
use crate::StegoError;

/// The secret file, its bytes and its extension with the leading dot.
///
/// The extension is empty for files without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub data: Vec<u8>,
    pub extension: String,
}

impl Message {
    pub fn new<S: Into<String>>(data: Vec<u8>, extension: S) -> Self {
        Self {
            data,
            extension: extension.into(),
        }
    }

    /// Reads the secret file into memory and takes the extension from its name.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let extension = Self::extension_of(file)?;

        let mut fd = File::open(file).map_err(|source| StegoError::ReadError { source })?;
        let mut data = Vec::new();
        fd.read_to_end(&mut data)
            .map_err(|source| StegoError::ReadError { source })?;
        if data.is_empty() {
            return Err(StegoError::EmptySecret);
        }

        Ok(Self { data, extension })
    }

    /// `.` plus the extension of `file`, or an empty string
    pub fn extension_of(file: &Path) -> Result<String> {
        let Some(extension) = file.extension() else {
            return Ok(String::new());
        };
        let extension = extension.to_str().ok_or(StegoError::InvalidFileName)?;
        let extension = format!(".{extension}");
        if extension.len() + 1 > MAX_EXTENSION_LEN {
            return Err(StegoError::ExtensionTooLong(MAX_EXTENSION_LEN));
        }

        Ok(extension)
    }

    /// Creates a new message from the payload read by `dec`, see [`PayloadDecoder::decode`].
    ///
    /// [`PayloadDecoder::decode`]: crate::payload::PayloadDecoder::decode
    pub fn from_raw_data(
        dec: &mut dyn Read,
        codec_factory: &dyn PayloadCodecFactory,
        max_size: u64,
    ) -> Result<Self> {
        codec_factory.create_codec().decode(dec, max_size)
    }

    pub fn to_raw_data(&self, codec_factory: &dyn PayloadCodecFactory) -> Result<Vec<u8>> {
        codec_factory.create_codec().encode(self)
    }

    /// Parses a complete plain payload buffer.
    ///
    /// Without `had_extension` the buffer ends after the data and the extension stays empty.
    pub fn parse(raw: &[u8], had_extension: bool) -> Result<Self> {
        let mut content = Cursor::new(raw);
        let max_size = raw.len().saturating_sub(LENGTH_HEADER_SIZE) as u64;
        let size = read_size_header(&mut content, max_size)?;
        let data = read_data(&mut content, size)?;
        let extension = if had_extension {
            validate_extension(read_extension(&mut content)?)?
        } else {
            String::new()
        };

        Ok(Self { data, extension })
    }

    /// the output path for this message, `base` with the extension appended
    pub fn target_path<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        let mut target = OsString::from(base.as_ref().as_os_str());
        target.push(&self.extension);
        PathBuf::from(target)
    }
}

/// recovered extensions are appended to a path, so they must not lead anywhere else
fn validate_extension(extension: Vec<u8>) -> Result<String> {
    let extension = String::from_utf8(extension).map_err(|_| StegoError::InvalidExtension)?;
    if extension.is_empty() {
        return Ok(extension);
    }
    if !extension.starts_with('.') || extension.contains(|c| c == '/' || c == '\\') {
        return Err(StegoError::InvalidExtension);
    }

    Ok(extension)
}
