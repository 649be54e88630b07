//! CBOR codec shared by every key schema.
//!
//! Schemas are plain serde structs encoded as self-describing CBOR maps. A
//! schema is identified on the wire by its type URL: [`TYPE_URL_PREFIX`]
//! followed by [`Message::TYPE_NAME`].
//!
//! # Invariants
//!
//! - Decoding produces an owned value. Nothing in the decoded struct borrows
//!   from the input buffer.
//! - Decoding consumes the whole input. Trailing bytes after the first CBOR
//!   item are rejected rather than ignored.

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{ProtocolError, Result};

/// Namespace prefix shared by every Keyframe type URL.
pub const TYPE_URL_PREFIX: &str = "type.keyframe.dev/";

/// Hard upper bound on any serialized schema, checked before parsing.
///
/// Key managers usually apply a tighter, configurable limit on top of this.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// A key schema with a stable name and a CBOR encoding.
pub trait Message: Serialize + DeserializeOwned {
    /// Schema name, e.g. `keyframe.AesGcmSivKey`.
    const TYPE_NAME: &'static str;

    /// Fully qualified type URL for this schema.
    fn type_url() -> String {
        format!("{TYPE_URL_PREFIX}{}", Self::TYPE_NAME)
    }

    /// Encode to CBOR.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborEncode` if serialization fails
    fn encode(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(self, &mut bytes).map_err(|e| ProtocolError::CborEncode {
            schema: Self::TYPE_NAME,
            reason: e.to_string(),
        })?;
        Ok(bytes)
    }

    /// Decode from CBOR.
    ///
    /// # Security
    ///
    /// The size check happens before the CBOR parser sees the input, so
    /// oversized adversarial buffers are never parsed.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::MessageTooLarge` if `bytes` exceeds
    ///   [`MAX_MESSAGE_SIZE`]
    /// - `ProtocolError::CborDecode` if the bytes are not a complete, valid
    ///   encoding of this schema
    fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_MESSAGE_SIZE {
            return Err(ProtocolError::MessageTooLarge {
                schema: Self::TYPE_NAME,
                size: bytes.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let mut reader = bytes;
        let value = ciborium::de::from_reader(&mut reader).map_err(|e| {
            ProtocolError::CborDecode { schema: Self::TYPE_NAME, reason: e.to_string() }
        })?;

        if !reader.is_empty() {
            return Err(ProtocolError::CborDecode {
                schema: Self::TYPE_NAME,
                reason: format!("{} trailing bytes", reader.len()),
            });
        }

        Ok(value)
    }
}
