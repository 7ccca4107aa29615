mod password;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::warn;
use stegobmp_crypto::CipherSpec;

use crate::payload::{FabCrypted, FabPlain, PayloadCodecFactory};
use crate::result::Result;
use crate::StegoError;

pub use password::*;

pub(crate) fn codec_factory(password: &Password, spec: CipherSpec) -> Box<dyn PayloadCodecFactory> {
    if let Some(password) = password.get() {
        Box::new(FabCrypted::new(password, spec))
    } else {
        Box::new(FabPlain)
    }
}

/// removes a partially written output, a failure to do so is only logged
pub(crate) fn discard_output(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to remove incomplete output {}: {e}", path.display());
    }
}

/// writes `content` into a new file at `path`, nothing is left behind on failure
pub(crate) fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let mut target = File::create(path).map_err(|source| StegoError::WriteError { source })?;

    if let Err(source) = target.write_all(content).and_then(|_| target.flush()) {
        drop(target);
        discard_output(path);
        return Err(StegoError::WriteError { source });
    }

    Ok(())
}

pub(crate) fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
