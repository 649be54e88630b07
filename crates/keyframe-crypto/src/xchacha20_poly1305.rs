//! XChaCha20-Poly1305 with a 24-byte random nonce

use std::fmt;

use chacha20poly1305::{
    XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit, Payload},
};

use crate::{
    cipher::{AeadCipher, check_key_size, check_nonce, join_sealed, split_sealed},
    error::CipherError,
};

/// `XChaCha20` nonce size (24 bytes)
pub const XCHACHA20_POLY1305_NONCE_SIZE: usize = 24;

/// XChaCha20-Poly1305 only takes 32-byte keys
pub const XCHACHA20_POLY1305_KEY_SIZES: &[usize] = &[32];

/// XChaCha20-Poly1305 cipher keyed with a 32-byte key.
pub struct XChaCha20Poly1305Cipher {
    cipher: XChaCha20Poly1305,
}

impl AeadCipher for XChaCha20Poly1305Cipher {
    const NONCE_SIZE: usize = XCHACHA20_POLY1305_NONCE_SIZE;
    const KEY_SIZES: &'static [usize] = XCHACHA20_POLY1305_KEY_SIZES;

    fn new(key: &[u8]) -> Result<Self, CipherError> {
        check_key_size(key, Self::KEY_SIZES)?;

        let cipher = XChaCha20Poly1305::new_from_slice(key).map_err(|_| {
            CipherError::InvalidKeyLength { actual: key.len(), supported: Self::KEY_SIZES }
        })?;

        Ok(Self { cipher })
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_nonce(nonce, Self::NONCE_SIZE)?;

        let ciphertext = self
            .cipher
            .encrypt(XNonce::from_slice(nonce), Payload { msg: plaintext, aad })
            .map_err(|_| CipherError::EncryptionFailed {
                reason: format!("{} byte plaintext exceeds XChaCha20-Poly1305 limits", plaintext.len()),
            })?;

        Ok(join_sealed(nonce, &ciphertext))
    }

    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError> {
        let (nonce, ciphertext) = split_sealed(sealed, Self::NONCE_SIZE)?;

        self.cipher
            .decrypt(XNonce::from_slice(nonce), Payload { msg: ciphertext, aad })
            .map_err(|_| CipherError::AuthenticationFailed)
    }
}

impl fmt::Debug for XChaCha20Poly1305Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XChaCha20Poly1305Cipher").finish_non_exhaustive()
    }
}
