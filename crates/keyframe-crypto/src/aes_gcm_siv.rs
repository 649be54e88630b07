//! AES-GCM-SIV (RFC 8452) with 128 or 256-bit keys
//!
//! Nonce-misuse resistant: repeating a nonce leaks only whether two
//! (plaintext, aad) pairs were equal, never the key stream.

use std::fmt;

use aes_gcm_siv::{
    Aes128GcmSiv, Aes256GcmSiv, Nonce,
    aead::{Aead, KeyInit, Payload},
};

use crate::{
    cipher::{AeadCipher, check_key_size, check_nonce, join_sealed, split_sealed},
    error::CipherError,
};

/// AES-GCM-SIV nonce size (12 bytes)
pub const AES_GCM_SIV_NONCE_SIZE: usize = 12;

/// Key lengths accepted by AES-GCM-SIV: AES-128 and AES-256
pub const AES_GCM_SIV_KEY_SIZES: &[usize] = &[16, 32];

enum Variant {
    Aes128(Aes128GcmSiv),
    Aes256(Aes256GcmSiv),
}

/// AES-GCM-SIV cipher keyed with a 16 or 32-byte key.
pub struct AesGcmSivCipher {
    variant: Variant,
}

impl AesGcmSivCipher {
    /// Key length this cipher was built with.
    pub fn key_size(&self) -> usize {
        match self.variant {
            Variant::Aes128(_) => 16,
            Variant::Aes256(_) => 32,
        }
    }
}

impl AeadCipher for AesGcmSivCipher {
    const NONCE_SIZE: usize = AES_GCM_SIV_NONCE_SIZE;
    const KEY_SIZES: &'static [usize] = AES_GCM_SIV_KEY_SIZES;

    fn new(key: &[u8]) -> Result<Self, CipherError> {
        check_key_size(key, Self::KEY_SIZES)?;

        let invalid = |_| CipherError::InvalidKeyLength { actual: key.len(), supported: Self::KEY_SIZES };
        let variant = if key.len() == 16 {
            Variant::Aes128(Aes128GcmSiv::new_from_slice(key).map_err(invalid)?)
        } else {
            Variant::Aes256(Aes256GcmSiv::new_from_slice(key).map_err(invalid)?)
        };

        Ok(Self { variant })
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_nonce(nonce, Self::NONCE_SIZE)?;

        let payload = Payload { msg: plaintext, aad };
        let nonce_ref = Nonce::from_slice(nonce);
        let ciphertext = match &self.variant {
            Variant::Aes128(cipher) => cipher.encrypt(nonce_ref, payload),
            Variant::Aes256(cipher) => cipher.encrypt(nonce_ref, payload),
        }
        .map_err(|_| CipherError::EncryptionFailed {
            reason: format!("{} byte plaintext exceeds AES-GCM-SIV limits", plaintext.len()),
        })?;

        Ok(join_sealed(nonce, &ciphertext))
    }

    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError> {
        let (nonce, ciphertext) = split_sealed(sealed, Self::NONCE_SIZE)?;

        let payload = Payload { msg: ciphertext, aad };
        let nonce_ref = Nonce::from_slice(nonce);
        match &self.variant {
            Variant::Aes128(cipher) => cipher.decrypt(nonce_ref, payload),
            Variant::Aes256(cipher) => cipher.decrypt(nonce_ref, payload),
        }
        .map_err(|_| CipherError::AuthenticationFailed)
    }
}

impl fmt::Debug for AesGcmSivCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesGcmSivCipher").field("key_size", &self.key_size()).finish_non_exhaustive()
    }
}
