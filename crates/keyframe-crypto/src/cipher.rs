//! Common shape of the AEAD ciphers in this crate.
//!
//! Sealed output is self-contained: `nonce || ciphertext || tag`. The nonce
//! is supplied by the caller, so every cipher here is a pure function of its
//! inputs and can be tested deterministically.

use crate::error::CipherError;

/// Authentication tag size shared by every cipher in this crate (16 bytes)
pub const TAG_SIZE: usize = 16;

/// An AEAD cipher keyed once at construction.
///
/// # Invariants
///
/// - `seal` output is exactly `NONCE_SIZE + plaintext.len() + TAG_SIZE` bytes
/// - `open(seal(n, m, a), a) == m` for every nonce `n` of the right size
/// - `open` fails with `AuthenticationFailed` if the key, the associated data,
///   or any byte of the sealed message differs
pub trait AeadCipher: Send + Sync + Sized {
    /// Nonce length in bytes
    const NONCE_SIZE: usize;

    /// Key lengths accepted by [`AeadCipher::new`]
    const KEY_SIZES: &'static [usize];

    /// Key the cipher.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength` if `key.len()` is not in `KEY_SIZES`
    fn new(key: &[u8]) -> Result<Self, CipherError>;

    /// Encrypt `plaintext` bound to `aad` under `nonce`.
    ///
    /// # Security
    ///
    /// Caller MUST NOT reuse a nonce under the same key and MUST provide
    /// cryptographically secure random nonces in production.
    ///
    /// # Errors
    ///
    /// - `InvalidNonceLength` if `nonce.len() != NONCE_SIZE`
    /// - `EncryptionFailed` if the plaintext exceeds the cipher's limits
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Decrypt a message produced by [`AeadCipher::seal`].
    ///
    /// # Errors
    ///
    /// - `CiphertextTooShort` if `sealed` cannot hold a nonce and a tag
    /// - `AuthenticationFailed` if the tag does not verify
    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub(crate) fn check_key_size(key: &[u8], supported: &'static [usize]) -> Result<(), CipherError> {
    if supported.contains(&key.len()) {
        Ok(())
    } else {
        Err(CipherError::InvalidKeyLength { actual: key.len(), supported })
    }
}

pub(crate) fn check_nonce(nonce: &[u8], expected: usize) -> Result<(), CipherError> {
    if nonce.len() == expected {
        Ok(())
    } else {
        Err(CipherError::InvalidNonceLength { expected, actual: nonce.len() })
    }
}

/// Split sealed bytes into `(nonce, ciphertext || tag)`.
pub(crate) fn split_sealed(sealed: &[u8], nonce_size: usize) -> Result<(&[u8], &[u8]), CipherError> {
    let minimum = nonce_size + TAG_SIZE;
    if sealed.len() < minimum {
        return Err(CipherError::CiphertextTooShort { actual: sealed.len(), minimum });
    }
    Ok(sealed.split_at(nonce_size))
}

/// Prepend `nonce` to `ciphertext`.
pub(crate) fn join_sealed(nonce: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut sealed = Vec::with_capacity(nonce.len() + ciphertext.len());
    sealed.extend_from_slice(nonce);
    sealed.extend_from_slice(ciphertext);
    sealed
}
