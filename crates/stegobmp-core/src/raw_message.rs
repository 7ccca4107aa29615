use std::io::Read;

use crate::payload::PayloadCodecFactory;
use crate::result::Result;

/// The payload bytes as they were framed, size header included.
///
/// For encrypted payloads this is the decrypted plain payload.
#[derive(Debug, Default)]
pub struct RawMessage {
    pub content: Vec<u8>,
}

impl RawMessage {
    pub fn from_raw_data(
        dec: &mut dyn Read,
        codec_factory: &dyn PayloadCodecFactory,
        max_size: u64,
    ) -> Result<Self> {
        Ok(Self {
            content: codec_factory.create_codec().decode_raw(dec, max_size)?,
        })
    }
}

#[cfg(test)]
mod raw_message_tests {
    use std::io::BufReader;

    use stegobmp_crypto::CipherSpec;

    use super::*;
    use crate::payload::{FabCrypted, FabPlain};
    use crate::Message;

    #[test]
    fn should_instantiate_from_read_trait_from_message_buffer() {
        const BUF: [u8; 10] = [0, 0, 0, 2, b'H', b'e', b'.', b'a', 0, 0xcd];
        // ------------------------------^^^^^^^^^^-------------------------
        //                               | this is the message content

        let mut r = BufReader::new(&BUF[..]);
        let m = RawMessage::from_raw_data(&mut r, &FabPlain, 100)
            .expect("Failed to create RawMessage from buffer");

        assert_eq!(
            m.content,
            &BUF[..9],
            "RawMessage.content should stop after the extension"
        );
    }

    #[test]
    fn should_hold_the_decrypted_payload() {
        let fab = FabCrypted::new("Secret42", CipherSpec::default());
        let message = Message::new(b"He".to_vec(), ".a");
        let encrypted = message.to_raw_data(&fab).unwrap();

        let m = RawMessage::from_raw_data(&mut &encrypted[..], &fab, 100).unwrap();

        assert_eq!(m.content, message.to_raw_data(&FabPlain).unwrap());
    }
}
