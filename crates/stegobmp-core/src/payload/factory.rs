use std::fmt::{self, Debug, Formatter};

use stegobmp_crypto::CipherSpec;

use super::*;

pub trait PayloadCodecFactory: Debug {
    fn create_codec(&self) -> Box<dyn PayloadCodec>;
}

/// plain payloads
#[derive(Debug, PartialEq, Eq)]
pub struct FabPlain;

impl PayloadCodecFactory for FabPlain {
    fn create_codec(&self) -> Box<dyn PayloadCodec> {
        Box::new(LengthHeaderCodec)
    }
}

/// encrypted payloads, the plain payload is encrypted as a whole
#[derive(Clone, PartialEq, Eq)]
pub struct FabCrypted {
    pub password: String,
    pub spec: CipherSpec,
}

impl FabCrypted {
    pub fn new<I: Into<String>>(password: I, spec: CipherSpec) -> Self {
        FabCrypted {
            password: password.into(),
            spec,
        }
    }
}

impl Debug for FabCrypted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FabCrypted({})", self.spec)
    }
}

impl PayloadCodecFactory for FabCrypted {
    fn create_codec(&self) -> Box<dyn PayloadCodec> {
        Box::new(CryptedPayloadCodec::new(
            FabPlain.create_codec(),
            self.password.clone(),
            self.spec,
        ))
    }
}
