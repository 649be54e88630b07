//! Error types for key schema encoding and decoding.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors from encoding or decoding key schemas.
///
/// Decode failures are reported uniformly as "could not parse", whether the
/// bytes are corrupt or were produced under a different schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Bytes did not decode under the requested schema
    #[error("could not parse {schema}: {reason}")]
    CborDecode {
        /// Schema the bytes were decoded as
        schema: &'static str,
        /// Decoder failure description
        reason: String,
    },

    /// Serialized input is larger than the schema allows
    #[error("could not parse {schema}: input of {size} bytes exceeds limit of {max}")]
    MessageTooLarge {
        /// Schema the bytes were decoded as
        schema: &'static str,
        /// Actual input size in bytes
        size: usize,
        /// Maximum accepted size in bytes
        max: usize,
    },

    /// Value could not be serialized
    #[error("could not encode {schema}: {reason}")]
    CborEncode {
        /// Schema being encoded
        schema: &'static str,
        /// Encoder failure description
        reason: String,
    },

    /// Type identifier does not name any known schema
    #[error("unknown schema: {0}")]
    UnknownSchema(String),
}
