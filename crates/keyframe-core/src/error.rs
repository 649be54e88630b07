//! Error types for key managers and key factories.
//!
//! Every variant belongs to one "invalid argument" class at the boundary (see
//! the `io::Error` conversion below); the variant is the internal kind. None
//! of them is retryable: the caller has to fix the key, the format, or the
//! routing.
//!
//! Messages are matched on by downstream tooling, so their phrases are part
//! of the contract:
//!
//! - wrong schema: offending type name and "not supported"
//! - decode failure: "could not parse"
//! - size failure: "`<N> bytes`" and "supported sizes"
//! - version failure: "version"

use std::io;

use keyframe_crypto::CipherError;
use keyframe_proto::ProtocolError;
use thiserror::Error;

/// Convenience alias for key manager results.
pub type Result<T> = std::result::Result<T, KeyManagerError>;

/// Errors from key managers and key factories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyManagerError {
    /// Key belongs to a schema this manager does not handle
    #[error("key type not supported: {type_name}")]
    WrongKeyType {
        /// Type URL or schema name that was supplied
        type_name: String,
    },

    /// Key format belongs to a schema this factory does not handle
    #[error("key format not supported: {type_name}")]
    WrongFormatType {
        /// Schema name that was supplied
        type_name: String,
    },

    /// Serialized key did not decode
    #[error("could not parse key {schema}: {reason}")]
    MalformedKey {
        /// Schema the bytes were decoded as
        schema: &'static str,
        /// Decoder failure description
        reason: String,
    },

    /// Serialized key format did not decode
    #[error("could not parse key format {schema}: {reason}")]
    MalformedFormat {
        /// Schema the bytes were decoded as
        schema: &'static str,
        /// Decoder failure description
        reason: String,
    },

    /// Key declares a version this manager does not support
    #[error("key version {version} not supported, expected version {expected}")]
    BadVersion {
        /// Version found in the key
        version: u32,
        /// Only version this manager accepts
        expected: u32,
    },

    /// Key or requested format has a length outside the whitelist
    #[error("invalid key size: {size} bytes, supported sizes: {supported:?}")]
    BadKeySize {
        /// Actual or requested key length in bytes
        size: usize,
        /// Whitelisted key lengths
        supported: &'static [usize],
    },

    /// Cipher rejected otherwise-valid key bytes
    #[error("primitive construction failed: {0}")]
    Construction(#[from] CipherError),

    /// Freshly generated key could not be serialized
    #[error("could not serialize key: {0}")]
    Serialization(String),
}

impl KeyManagerError {
    /// Map a decoder failure on key bytes to `MalformedKey`.
    ///
    /// Encoder failures are not parse failures and map to `Serialization`.
    pub fn malformed_key(err: ProtocolError) -> Self {
        match split_decode_error(err) {
            Ok((schema, reason)) => Self::MalformedKey { schema, reason },
            Err(err) => err,
        }
    }

    /// Map a decoder failure on format bytes to `MalformedFormat`.
    ///
    /// Encoder failures are not parse failures and map to `Serialization`.
    pub fn malformed_format(err: ProtocolError) -> Self {
        match split_decode_error(err) {
            Ok((schema, reason)) => Self::MalformedFormat { schema, reason },
            Err(err) => err,
        }
    }
}

fn split_decode_error(err: ProtocolError) -> std::result::Result<(&'static str, String), KeyManagerError> {
    match err {
        ProtocolError::CborDecode { schema, reason } => Ok((schema, reason)),
        ProtocolError::MessageTooLarge { schema, size, max } => {
            Ok((schema, format!("input of {size} bytes exceeds limit of {max}")))
        },
        ProtocolError::UnknownSchema(name) => Ok(("unknown", format!("unknown schema {name}"))),
        err @ ProtocolError::CborEncode { .. } => Err(KeyManagerError::Serialization(err.to_string())),
    }
}

/// Convert `KeyManagerError` to `io::Error` for callers that surface a
/// single error class.
///
/// This is only for boundary conversion - internally we use
/// `KeyManagerError`.
impl From<KeyManagerError> for io::Error {
    fn from(err: KeyManagerError) -> Self {
        let kind = match &err {
            KeyManagerError::WrongKeyType { .. }
            | KeyManagerError::WrongFormatType { .. }
            | KeyManagerError::MalformedKey { .. }
            | KeyManagerError::MalformedFormat { .. }
            | KeyManagerError::BadVersion { .. }
            | KeyManagerError::BadKeySize { .. }
            | KeyManagerError::Construction(_) => io::ErrorKind::InvalidInput,
            KeyManagerError::Serialization(_) => io::ErrorKind::Other,
        };
        Self::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_key_type_names_the_type() {
        let err = KeyManagerError::WrongKeyType {
            type_name: "type.keyframe.dev/keyframe.SomeOtherKey".to_string(),
        };
        let message = err.to_string();

        assert!(message.contains("not supported"));
        assert!(message.contains("type.keyframe.dev/keyframe.SomeOtherKey"));
    }

    #[test]
    fn bad_key_size_message_shape() {
        let err = KeyManagerError::BadKeySize { size: 8, supported: &[16, 32] };
        assert_eq!(err.to_string(), "invalid key size: 8 bytes, supported sizes: [16, 32]");
    }

    #[test]
    fn bad_version_mentions_version() {
        let err = KeyManagerError::BadVersion { version: 1, expected: 0 };
        assert_eq!(err.to_string(), "key version 1 not supported, expected version 0");
    }

    #[test]
    fn malformed_key_keeps_decoder_reason() {
        let err = KeyManagerError::malformed_key(ProtocolError::CborDecode {
            schema: "keyframe.AesGcmSivKey",
            reason: "unexpected end of input".to_string(),
        });

        assert_eq!(
            err.to_string(),
            "could not parse key keyframe.AesGcmSivKey: unexpected end of input"
        );
    }

    #[test]
    fn oversized_format_is_malformed() {
        let err = KeyManagerError::malformed_format(ProtocolError::MessageTooLarge {
            schema: "keyframe.AesGcmSivKeyFormat",
            size: 5000,
            max: 4096,
        });

        assert!(matches!(err, KeyManagerError::MalformedFormat { .. }));
        assert!(err.to_string().contains("could not parse"));
    }

    #[test]
    fn encoder_failure_is_not_reported_as_parse_failure() {
        let encode_error = ProtocolError::CborEncode {
            schema: "keyframe.AesGcmSivKey",
            reason: "writer closed".to_string(),
        };

        for err in [
            KeyManagerError::malformed_key(encode_error.clone()),
            KeyManagerError::malformed_format(encode_error.clone()),
        ] {
            assert_eq!(
                err,
                KeyManagerError::Serialization(
                    "could not encode keyframe.AesGcmSivKey: writer closed".to_string()
                )
            );
            assert!(!err.to_string().contains("could not parse"));
        }

        let err: io::Error = KeyManagerError::malformed_key(encode_error).into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn boundary_conversion_is_invalid_input() {
        let err: io::Error = KeyManagerError::BadVersion { version: 1, expected: 0 }.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err: io::Error = KeyManagerError::Construction(CipherError::AuthenticationFailed).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
