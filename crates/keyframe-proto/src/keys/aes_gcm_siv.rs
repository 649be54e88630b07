//! AES-GCM-SIV key schemas.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::message::Message;

/// AES-GCM-SIV key.
///
/// `key_value` is the raw AES key; its length selects AES-128 or AES-256.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AesGcmSivKey {
    /// Key schema version
    pub version: u32,
    /// Raw AES key bytes
    #[serde(with = "serde_bytes")]
    pub key_value: Vec<u8>,
}

/// Request for a new [`AesGcmSivKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AesGcmSivKeyFormat {
    /// Requested key length in bytes
    pub key_size: u32,
}

impl Message for AesGcmSivKey {
    const TYPE_NAME: &'static str = "keyframe.AesGcmSivKey";
}

impl Message for AesGcmSivKeyFormat {
    const TYPE_NAME: &'static str = "keyframe.AesGcmSivKeyFormat";
}

impl fmt::Debug for AesGcmSivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesGcmSivKey")
            .field("version", &self.version)
            .field("key_value", &format_args!("<{} bytes>", self.key_value.len()))
            .finish()
    }
}

impl Drop for AesGcmSivKey {
    fn drop(&mut self) {
        self.key_value.zeroize();
    }
}
