//! Fuzz target for AeadCipher::open
//!
//! # Strategy
//!
//! - Arbitrary sealed input (shorter than, equal to, longer than nonce+tag)
//! - Single bit flips in a genuine sealed message
//! - Arbitrary associated data
//!
//! # Invariants
//!
//! - NEVER panic on any input
//! - Input shorter than nonce + tag fails with CiphertextTooShort
//! - Any bit flip in a sealed message fails authentication

#![no_main]

use arbitrary::Arbitrary;
use keyframe_crypto::{
    AeadCipher, AesGcmSivCipher, CipherError, XChaCha20Poly1305Cipher, TAG_SIZE,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct OpenScenario {
    key: [u8; 32],
    nonce: [u8; 24],
    plaintext: Vec<u8>,
    aad: Vec<u8>,
    garbage: Vec<u8>,
    flip_index: usize,
    flip_bit: u8,
}

fn exercise<C: AeadCipher>(scenario: &OpenScenario) {
    let Ok(cipher) = C::new(&scenario.key) else {
        return;
    };

    match cipher.open(&scenario.garbage, &scenario.aad) {
        Err(CipherError::CiphertextTooShort { .. }) => {
            assert!(scenario.garbage.len() < C::NONCE_SIZE + TAG_SIZE);
        }
        Err(_) | Ok(_) => {
            assert!(scenario.garbage.len() >= C::NONCE_SIZE + TAG_SIZE);
        }
    }

    let nonce = &scenario.nonce[..C::NONCE_SIZE];
    let sealed = cipher
        .seal(nonce, &scenario.plaintext, &scenario.aad)
        .expect("seal with valid nonce");
    assert_eq!(cipher.open(&sealed, &scenario.aad).ok().as_deref(), Some(&scenario.plaintext[..]));

    let mut tampered = sealed;
    let index = scenario.flip_index % tampered.len();
    tampered[index] ^= 1 << (scenario.flip_bit % 8);
    assert!(cipher.open(&tampered, &scenario.aad).is_err());
}

fuzz_target!(|scenario: OpenScenario| {
    exercise::<AesGcmSivCipher>(&scenario);
    exercise::<XChaCha20Poly1305Cipher>(&scenario);
});
