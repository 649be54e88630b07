//! Fuzz target for KeyManager::primitive_from_key_data
//!
//! # Strategy
//!
//! - Arbitrary type URLs (own, sibling schema, garbage)
//! - Arbitrary serialized key bytes
//! - Structured keys with arbitrary version and key length
//!
//! # Invariants
//!
//! - NEVER panic on any envelope
//! - A foreign type URL is rejected before the value is parsed
//! - Any accepted key has version 0 and a whitelisted length
//! - Any primitive built from an accepted key round-trips

#![no_main]

use arbitrary::Arbitrary;
use keyframe_core::{
    AesGcmSivKeyManager, KeyManager, KeyManagerError, XChaCha20Poly1305KeyManager,
};
use keyframe_proto::{AesGcmSivKey, KeyData, KeyMaterialType, Message, XChaCha20Poly1305Key};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum TypeUrl {
    AesGcmSiv,
    XChaCha20Poly1305,
    Other(String),
}

#[derive(Debug, Clone, Arbitrary)]
enum Value {
    Raw(Vec<u8>),
    Structured { version: u32, key_value: Vec<u8> },
}

#[derive(Debug, Clone, Arbitrary)]
struct Envelope {
    type_url: TypeUrl,
    value: Value,
    plaintext: Vec<u8>,
    aad: Vec<u8>,
}

fuzz_target!(|envelope: Envelope| {
    let type_url = match &envelope.type_url {
        TypeUrl::AesGcmSiv => AesGcmSivKey::type_url(),
        TypeUrl::XChaCha20Poly1305 => XChaCha20Poly1305Key::type_url(),
        TypeUrl::Other(url) => url.clone(),
    };

    let value = match envelope.value {
        Value::Raw(bytes) => bytes,
        Value::Structured { version, key_value } => {
            match (AesGcmSivKey { version, key_value }).encode() {
                Ok(bytes) => bytes,
                Err(_) => return,
            }
        }
    };

    let key_data = KeyData::new(type_url.clone(), value, KeyMaterialType::Symmetric);

    let aes = AesGcmSivKeyManager::default();
    let xchacha = XChaCha20Poly1305KeyManager::default();

    for manager in [&aes as &dyn KeyManager<_>, &xchacha as &dyn KeyManager<_>] {
        match manager.primitive_from_key_data(&key_data) {
            Ok(aead) => {
                assert!(manager.does_support(&type_url));

                let ciphertext = aead
                    .encrypt(&envelope.plaintext, &envelope.aad)
                    .expect("encrypt with accepted key");
                let decrypted = aead
                    .decrypt(&ciphertext, &envelope.aad)
                    .expect("decrypt own ciphertext");
                assert_eq!(decrypted, envelope.plaintext);
            }
            Err(KeyManagerError::WrongKeyType { .. }) => {
                assert!(!manager.does_support(&type_url));
            }
            Err(_) => {
                assert!(manager.does_support(&type_url));
            }
        }
    }
});
