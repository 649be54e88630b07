//! Transportable key envelope.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::message::Message;

/// Classification of the key material carried in a [`KeyData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyMaterialType {
    /// Unclassified material
    Unknown,
    /// Symmetric secret key
    Symmetric,
    /// Private half of an asymmetric key pair
    AsymmetricPrivate,
    /// Public half of an asymmetric key pair
    AsymmetricPublic,
    /// Key held by a remote service, referenced rather than embedded
    Remote,
}

/// Self-describing envelope pairing a type URL with serialized key bytes.
///
/// Produced once (by a key factory, or by whoever stored the key) and read
/// thereafter. Key managers decode `value` into their own owned schema and
/// never alias this buffer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyData {
    /// Type URL naming the schema `value` was encoded under
    pub type_url: String,
    /// CBOR-encoded key schema
    #[serde(with = "serde_bytes")]
    pub value: Vec<u8>,
    /// Material classification
    pub key_material_type: KeyMaterialType,
}

impl KeyData {
    /// Build an envelope from its parts.
    pub fn new(
        type_url: impl Into<String>,
        value: Vec<u8>,
        key_material_type: KeyMaterialType,
    ) -> Self {
        Self { type_url: type_url.into(), value, key_material_type }
    }
}

impl Message for KeyData {
    const TYPE_NAME: &'static str = "keyframe.KeyData";
}

impl fmt::Debug for KeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyData")
            .field("type_url", &self.type_url)
            .field("value", &format_args!("<{} bytes>", self.value.len()))
            .field("key_material_type", &self.key_material_type)
            .finish()
    }
}

impl Drop for KeyData {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
