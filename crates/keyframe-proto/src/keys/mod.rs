//! Key and key-format schemas.
//!
//! [`KeyProto`] and [`KeyFormatProto`] are closed sum types over every schema
//! this workspace knows. A key manager accepts exactly one arm of each and
//! rejects the others by name, so "wrong schema" is decided where bytes are
//! decoded rather than deep inside validation.
//!
//! # Invariants
//!
//! - Each variant maps to exactly one schema name (enforced by match
//!   exhaustiveness in `type_name()`).
//! - `decode(type_url, bytes)` only ever decodes under the schema named by
//!   `type_url`. Unknown URLs fail without touching `bytes`.

pub mod aes_gcm_siv;
pub mod xchacha20_poly1305;

use self::{
    aes_gcm_siv::{AesGcmSivKey, AesGcmSivKeyFormat},
    xchacha20_poly1305::{XChaCha20Poly1305Key, XChaCha20Poly1305KeyFormat},
};
use crate::{
    errors::{ProtocolError, Result},
    message::{Message, TYPE_URL_PREFIX},
};

/// Any decoded key schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyProto {
    /// AES-GCM-SIV key
    AesGcmSiv(AesGcmSivKey),
    /// XChaCha20-Poly1305 key
    XChaCha20Poly1305(XChaCha20Poly1305Key),
}

impl KeyProto {
    /// Schema name of the wrapped key.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AesGcmSiv(_) => AesGcmSivKey::TYPE_NAME,
            Self::XChaCha20Poly1305(_) => XChaCha20Poly1305Key::TYPE_NAME,
        }
    }

    /// Type URL of the wrapped key.
    pub fn type_url(&self) -> String {
        format!("{TYPE_URL_PREFIX}{}", self.type_name())
    }

    /// Encode the wrapped key (no variant tag; the type URL carries it).
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborEncode` if serialization fails
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::AesGcmSiv(inner) => inner.encode(),
            Self::XChaCha20Poly1305(inner) => inner.encode(),
        }
    }

    /// Decode `bytes` under the schema named by `type_url`.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::UnknownSchema` if `type_url` names no key schema
    /// - `ProtocolError::CborDecode` / `MessageTooLarge` if decoding fails
    pub fn decode(type_url: &str, bytes: &[u8]) -> Result<Self> {
        if type_url == AesGcmSivKey::type_url() {
            AesGcmSivKey::decode(bytes).map(Self::AesGcmSiv)
        } else if type_url == XChaCha20Poly1305Key::type_url() {
            XChaCha20Poly1305Key::decode(bytes).map(Self::XChaCha20Poly1305)
        } else {
            Err(ProtocolError::UnknownSchema(type_url.to_string()))
        }
    }
}

impl From<AesGcmSivKey> for KeyProto {
    fn from(key: AesGcmSivKey) -> Self {
        Self::AesGcmSiv(key)
    }
}

impl From<XChaCha20Poly1305Key> for KeyProto {
    fn from(key: XChaCha20Poly1305Key) -> Self {
        Self::XChaCha20Poly1305(key)
    }
}

/// Any decoded key-format schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormatProto {
    /// AES-GCM-SIV key format
    AesGcmSiv(AesGcmSivKeyFormat),
    /// XChaCha20-Poly1305 key format
    XChaCha20Poly1305(XChaCha20Poly1305KeyFormat),
}

impl KeyFormatProto {
    /// Schema name of the wrapped format.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AesGcmSiv(_) => AesGcmSivKeyFormat::TYPE_NAME,
            Self::XChaCha20Poly1305(_) => XChaCha20Poly1305KeyFormat::TYPE_NAME,
        }
    }

    /// Encode the wrapped format.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborEncode` if serialization fails
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::AesGcmSiv(inner) => inner.encode(),
            Self::XChaCha20Poly1305(inner) => inner.encode(),
        }
    }

    /// Decode `bytes` under the format schema named by `type_url`.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::UnknownSchema` if `type_url` names no format schema
    /// - `ProtocolError::CborDecode` / `MessageTooLarge` if decoding fails
    pub fn decode(type_url: &str, bytes: &[u8]) -> Result<Self> {
        if type_url == AesGcmSivKeyFormat::type_url() {
            AesGcmSivKeyFormat::decode(bytes).map(Self::AesGcmSiv)
        } else if type_url == XChaCha20Poly1305KeyFormat::type_url() {
            XChaCha20Poly1305KeyFormat::decode(bytes).map(Self::XChaCha20Poly1305)
        } else {
            Err(ProtocolError::UnknownSchema(type_url.to_string()))
        }
    }
}

impl From<AesGcmSivKeyFormat> for KeyFormatProto {
    fn from(format: AesGcmSivKeyFormat) -> Self {
        Self::AesGcmSiv(format)
    }
}

impl From<XChaCha20Poly1305KeyFormat> for KeyFormatProto {
    fn from(format: XChaCha20Poly1305KeyFormat) -> Self {
        Self::XChaCha20Poly1305(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aes_key() -> AesGcmSivKey {
        AesGcmSivKey { version: 0, key_value: vec![0x61; 16] }
    }

    #[test]
    fn key_proto_names_match_schemas() {
        let key = KeyProto::from(aes_key());
        assert_eq!(key.type_name(), "keyframe.AesGcmSivKey");
        assert_eq!(key.type_url(), "type.keyframe.dev/keyframe.AesGcmSivKey");

        let other = KeyProto::from(XChaCha20Poly1305Key { version: 0, key_value: vec![0; 32] });
        assert_eq!(other.type_name(), "keyframe.XChaCha20Poly1305Key");
    }

    #[test]
    fn decode_dispatches_on_type_url() {
        let bytes = aes_key().encode().unwrap();
        let decoded = KeyProto::decode(&AesGcmSivKey::type_url(), &bytes).unwrap();

        assert_eq!(decoded, KeyProto::AesGcmSiv(aes_key()));
    }

    #[test]
    fn decode_unknown_type_url() {
        let result = KeyProto::decode("type.keyframe.dev/keyframe.SomeOtherKey", &[]);
        assert_eq!(
            result,
            Err(ProtocolError::UnknownSchema("type.keyframe.dev/keyframe.SomeOtherKey".into()))
        );
    }

    #[test]
    fn decode_garbage_is_parse_failure() {
        let result = AesGcmSivKey::decode(b"some bad serialized key");
        assert!(matches!(
            result,
            Err(err @ ProtocolError::CborDecode { .. }) if err.to_string().contains("could not parse")
        ));
    }

    #[test]
    fn format_names_match_schemas() {
        let format = KeyFormatProto::from(AesGcmSivKeyFormat { key_size: 16 });
        assert_eq!(format.type_name(), "keyframe.AesGcmSivKeyFormat");

        let other = KeyFormatProto::from(XChaCha20Poly1305KeyFormat { key_size: 32 });
        assert_eq!(other.type_name(), "keyframe.XChaCha20Poly1305KeyFormat");
    }

    #[test]
    fn format_decode_dispatches_on_type_url() {
        let bytes = XChaCha20Poly1305KeyFormat { key_size: 32 }.encode().unwrap();
        let decoded =
            KeyFormatProto::decode(&XChaCha20Poly1305KeyFormat::type_url(), &bytes).unwrap();

        assert_eq!(decoded, KeyFormatProto::from(XChaCha20Poly1305KeyFormat { key_size: 32 }));
        assert!(matches!(
            KeyFormatProto::decode(&AesGcmSivKey::type_url(), &bytes),
            Err(ProtocolError::UnknownSchema(_))
        ));
    }

    #[test]
    fn key_schema_rejects_format_bytes() {
        let bytes = AesGcmSivKeyFormat { key_size: 16 }.encode().unwrap();
        assert!(AesGcmSivKey::decode(&bytes).is_err());
    }
}
