//! Validation shared by every key manager and key factory.
//!
//! Each check fails at the first violated rule and reports the offending
//! value alongside the constraint, so callers can diagnose without
//! re-deriving internal state.

use keyframe_proto::{Message, ProtocolError};

use crate::error::{KeyManagerError, Result};

/// Reject any key version other than the single supported one.
///
/// There is no forward or backward compatibility: `version` must equal
/// `expected` exactly.
pub fn validate_version(version: u32, expected: u32) -> Result<()> {
    if version == expected {
        return Ok(());
    }

    tracing::debug!(version, expected, "rejecting key with unsupported version");
    Err(KeyManagerError::BadVersion { version, expected })
}

/// Reject key lengths outside the whitelist.
pub fn validate_key_size(size: usize, supported: &'static [usize]) -> Result<()> {
    if supported.contains(&size) {
        return Ok(());
    }

    tracing::debug!(size, ?supported, "rejecting unsupported key size");
    Err(KeyManagerError::BadKeySize { size, supported })
}

/// Decode `bytes` as `M`, rejecting inputs longer than `max_len` before the
/// parser sees them.
///
/// The decoded value is owned; it never aliases `bytes`.
pub fn decode_bounded<M: Message>(bytes: &[u8], max_len: usize) -> std::result::Result<M, ProtocolError> {
    if bytes.len() > max_len {
        tracing::debug!(schema = M::TYPE_NAME, size = bytes.len(), max_len, "rejecting oversized input");
        return Err(ProtocolError::MessageTooLarge {
            schema: M::TYPE_NAME,
            size: bytes.len(),
            max: max_len,
        });
    }

    M::decode(bytes).inspect_err(|e| {
        tracing::debug!(schema = M::TYPE_NAME, error = %e, "rejecting undecodable input");
    })
}
