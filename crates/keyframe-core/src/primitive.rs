//! AEAD primitive handed out by key managers.

use std::fmt;

use keyframe_crypto::{AeadCipher, CipherError};

use crate::env::Environment;

/// Authenticated encryption with associated data.
///
/// Ciphertexts are self-contained (`nonce || ciphertext || tag`); decryption
/// needs only the primitive and the same associated data.
pub trait Aead: Send + Sync {
    /// Encrypt `plaintext`, binding it to `associated_data`.
    ///
    /// # Errors
    ///
    /// - `EncryptionFailed` if the plaintext exceeds the cipher's limits
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Decrypt `ciphertext`, checking it was bound to `associated_data`.
    ///
    /// # Errors
    ///
    /// - `CiphertextTooShort` if the input cannot hold a nonce and a tag
    /// - `AuthenticationFailed` on any key, aad, or ciphertext mismatch
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// [`Aead`] over any keyed cipher, drawing a fresh nonce from `E` per
/// encryption.
///
/// Holds only the keyed cipher and the environment. Nothing refers back to
/// the key schema it was built from.
pub struct AeadPrimitive<C, E> {
    cipher: C,
    env: E,
}

impl<C: AeadCipher, E: Environment> AeadPrimitive<C, E> {
    /// Wrap a keyed cipher.
    pub fn new(cipher: C, env: E) -> Self {
        Self { cipher, env }
    }
}

impl<C: AeadCipher, E: Environment> Aead for AeadPrimitive<C, E> {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut nonce = vec![0u8; C::NONCE_SIZE];
        self.env.random_bytes(&mut nonce);
        self.cipher.seal(&nonce, plaintext, associated_data)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.cipher.open(ciphertext, associated_data)
    }
}

impl<C: fmt::Debug, E> fmt::Debug for AeadPrimitive<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeadPrimitive").field("cipher", &self.cipher).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    };

    use keyframe_crypto::{AES_GCM_SIV_NONCE_SIZE, AesGcmSivCipher};

    use super::*;

    // Each draw fills the buffer with the next counter value
    #[derive(Clone, Default)]
    struct CountingEnv {
        next: Arc<AtomicU8>,
    }

    impl Environment for CountingEnv {
        fn random_bytes(&self, buffer: &mut [u8]) {
            buffer.fill(self.next.fetch_add(1, Ordering::Relaxed));
        }
    }

    fn primitive() -> AeadPrimitive<AesGcmSivCipher, CountingEnv> {
        AeadPrimitive::new(AesGcmSivCipher::new(&[0x42; 16]).unwrap(), CountingEnv::default())
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let aead = primitive();
        let ciphertext = aead.encrypt(b"some plaintext", b"some aad").unwrap();

        assert_eq!(aead.decrypt(&ciphertext, b"some aad").unwrap(), b"some plaintext");
    }

    #[test]
    fn each_encryption_draws_a_fresh_nonce() {
        let aead = primitive();

        let first = aead.encrypt(b"test", b"").unwrap();
        let second = aead.encrypt(b"test", b"").unwrap();

        assert_eq!(&first[..AES_GCM_SIV_NONCE_SIZE], &[0u8; AES_GCM_SIV_NONCE_SIZE]);
        assert_eq!(&second[..AES_GCM_SIV_NONCE_SIZE], &[1u8; AES_GCM_SIV_NONCE_SIZE]);
        assert_ne!(first, second);
    }

    #[test]
    fn decrypt_with_different_aad_fails() {
        let aead = primitive();
        let ciphertext = aead.encrypt(b"some plaintext", b"some aad").unwrap();

        assert_eq!(aead.decrypt(&ciphertext, b"different aad"), Err(CipherError::AuthenticationFailed));
    }

    #[test]
    fn debug_hides_key() {
        let rendered = format!("{:?}", primitive());
        assert_eq!(rendered, "AeadPrimitive { cipher: AesGcmSivCipher { key_size: 16, .. }, .. }");
    }
}
