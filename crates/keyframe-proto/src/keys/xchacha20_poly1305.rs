//! XChaCha20-Poly1305 key schemas.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::message::Message;

/// XChaCha20-Poly1305 key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XChaCha20Poly1305Key {
    /// Key schema version
    pub version: u32,
    /// Raw 32-byte key
    #[serde(with = "serde_bytes")]
    pub key_value: Vec<u8>,
}

/// Request for a new [`XChaCha20Poly1305Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XChaCha20Poly1305KeyFormat {
    /// Requested key length in bytes
    pub key_size: u32,
}

impl Message for XChaCha20Poly1305Key {
    const TYPE_NAME: &'static str = "keyframe.XChaCha20Poly1305Key";
}

impl Message for XChaCha20Poly1305KeyFormat {
    const TYPE_NAME: &'static str = "keyframe.XChaCha20Poly1305KeyFormat";
}

impl fmt::Debug for XChaCha20Poly1305Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XChaCha20Poly1305Key")
            .field("version", &self.version)
            .field("key_value", &format_args!("<{} bytes>", self.key_value.len()))
            .finish()
    }
}

impl Drop for XChaCha20Poly1305Key {
    fn drop(&mut self) {
        self.key_value.zeroize();
    }
}
