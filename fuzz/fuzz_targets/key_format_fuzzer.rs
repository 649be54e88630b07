//! Fuzz target for KeyFactory::new_key_from_bytes and new_key_data
//!
//! # Strategy
//!
//! - Arbitrary serialized formats
//! - Structured formats with arbitrary key sizes (including u32::MAX)
//!
//! # Invariants
//!
//! - NEVER panic, never allocate for a rejected size
//! - Generated keys have version 0 and exactly `key_size` bytes
//! - Generated key data validates with the issuing manager

#![no_main]

use arbitrary::Arbitrary;
use keyframe_core::{AesGcmSivKeyManager, KeyManager, XChaCha20Poly1305KeyManager};
use keyframe_proto::{
    AesGcmSivKeyFormat, KeyProto, Message, XChaCha20Poly1305KeyFormat,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FormatInput {
    Raw(Vec<u8>),
    AesGcmSiv { key_size: u32 },
    XChaCha20Poly1305 { key_size: u32 },
}

fuzz_target!(|input: FormatInput| {
    let bytes = match input {
        FormatInput::Raw(bytes) => bytes,
        FormatInput::AesGcmSiv { key_size } => {
            match (AesGcmSivKeyFormat { key_size }).encode() {
                Ok(bytes) => bytes,
                Err(_) => return,
            }
        }
        FormatInput::XChaCha20Poly1305 { key_size } => {
            match (XChaCha20Poly1305KeyFormat { key_size }).encode() {
                Ok(bytes) => bytes,
                Err(_) => return,
            }
        }
    };

    let aes = AesGcmSivKeyManager::default();
    let xchacha = XChaCha20Poly1305KeyManager::default();

    for manager in [&aes as &dyn KeyManager<_>, &xchacha as &dyn KeyManager<_>] {
        let factory = manager.key_factory();

        if let Ok(key) = factory.new_key_from_bytes(&bytes) {
            let (version, len) = match &key {
                KeyProto::AesGcmSiv(k) => (k.version, k.key_value.len()),
                KeyProto::XChaCha20Poly1305(k) => (k.version, k.key_value.len()),
            };
            assert_eq!(version, 0);
            assert!(len == 16 || len == 32);
            assert!(manager.primitive(&key).is_ok());
        }

        if let Ok(key_data) = factory.new_key_data(&bytes) {
            assert_eq!(key_data.type_url, manager.key_type());
            assert!(manager.primitive_from_key_data(&key_data).is_ok());
        }
    }
});
