//! Property-based tests for the AEAD ciphers
//!
//! 1. **Round-trip**: open(seal(m, a), a) == m for all messages and aad
//! 2. **Binding**: changing the aad or flipping any bit rejects the message

use keyframe_crypto::{
    AES_GCM_SIV_NONCE_SIZE, AeadCipher, AesGcmSivCipher, CipherError,
    XCHACHA20_POLY1305_NONCE_SIZE, XChaCha20Poly1305Cipher,
};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16..=16),
        prop::collection::vec(any::<u8>(), 32..=32),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_aes_gcm_siv_roundtrip(
        key in key_strategy(),
        nonce in prop::collection::vec(any::<u8>(), AES_GCM_SIV_NONCE_SIZE..=AES_GCM_SIV_NONCE_SIZE),
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        aad in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let cipher = AesGcmSivCipher::new(&key).unwrap();
        let sealed = cipher.seal(&nonce, &plaintext, &aad).unwrap();

        prop_assert_eq!(cipher.open(&sealed, &aad).unwrap(), plaintext);
    }

    #[test]
    fn prop_xchacha_roundtrip(
        key in prop::collection::vec(any::<u8>(), 32..=32),
        nonce in prop::collection::vec(any::<u8>(), XCHACHA20_POLY1305_NONCE_SIZE..=XCHACHA20_POLY1305_NONCE_SIZE),
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        aad in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let cipher = XChaCha20Poly1305Cipher::new(&key).unwrap();
        let sealed = cipher.seal(&nonce, &plaintext, &aad).unwrap();

        prop_assert_eq!(cipher.open(&sealed, &aad).unwrap(), plaintext);
    }

    #[test]
    fn prop_any_bit_flip_is_rejected(
        key in key_strategy(),
        plaintext in prop::collection::vec(any::<u8>(), 0..200),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let cipher = AesGcmSivCipher::new(&key).unwrap();
        let mut sealed = cipher.seal(&[7u8; AES_GCM_SIV_NONCE_SIZE], &plaintext, b"aad").unwrap();

        let position = flip.index(sealed.len());
        sealed[position] ^= 1 << bit;

        prop_assert_eq!(cipher.open(&sealed, b"aad"), Err(CipherError::AuthenticationFailed));
    }
}
