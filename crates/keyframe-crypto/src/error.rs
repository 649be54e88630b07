//! Error types for cipher operations

use thiserror::Error;

/// Errors from AEAD cipher construction, sealing, and opening
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key length not accepted by the cipher
    #[error("invalid key length: {actual} bytes, supported sizes: {supported:?}")]
    InvalidKeyLength {
        /// Actual key length
        actual: usize,
        /// Key lengths the cipher accepts
        supported: &'static [usize],
    },

    /// Nonce length does not match the cipher's nonce size
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Required nonce length
        expected: usize,
        /// Actual nonce length
        actual: usize,
    },

    /// Ciphertext cannot hold a nonce and a tag
    #[error("ciphertext too short: {actual} bytes, need at least {minimum}")]
    CiphertextTooShort {
        /// Actual ciphertext length
        actual: usize,
        /// Nonce plus tag length
        minimum: usize,
    },

    /// Plaintext exceeds the cipher's limits
    #[error("encryption failed: {reason}")]
    EncryptionFailed {
        /// Reason for encryption failure
        reason: String,
    },

    /// Authentication tag did not verify (wrong key, wrong aad, or tamper)
    #[error("decryption failed: authentication failed")]
    AuthenticationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CipherError::InvalidKeyLength { actual: 8, supported: &[16, 32] };
        assert_eq!(err.to_string(), "invalid key length: 8 bytes, supported sizes: [16, 32]");

        let err = CipherError::CiphertextTooShort { actual: 3, minimum: 28 };
        assert_eq!(err.to_string(), "ciphertext too short: 3 bytes, need at least 28");
    }
}
