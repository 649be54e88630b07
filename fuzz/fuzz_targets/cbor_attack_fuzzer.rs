//! Fuzz target for CBOR deserialization attacks on key schemas
//!
//! # Strategy
//!
//! - Deeply nested: Arrays/maps nested to arbitrary depth (stack overflow)
//! - Huge lengths: CBOR claiming massive byte/string/array lengths (memory)
//! - Random bytes: Completely arbitrary CBOR data (general malformation)
//! - Duplicate keys: CBOR maps with repeated field names
//! - Trailing bytes: A valid key followed by garbage
//!
//! # Invariants
//!
//! - Deserialization completes quickly (no infinite loops)
//! - Huge claimed lengths rejected (not allocated)
//! - Trailing bytes always rejected
//! - NEVER panic on malformed CBOR

#![no_main]

use arbitrary::Arbitrary;
use keyframe_proto::{
    AesGcmSivKey, AesGcmSivKeyFormat, KeyData, KeyProto, Message, XChaCha20Poly1305Key,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum CborAttack {
    DeeplyNested { depth: u8, map: bool },
    HugeLength { claimed_len_exponent: u8 },
    RandomBytes { bytes: Vec<u8> },
    DuplicateKeys { count: u8 },
    TrailingBytes { key_value: Vec<u8>, trailer: Vec<u8> },
}

fn decode_all(bytes: &[u8]) {
    let _ = AesGcmSivKey::decode(bytes);
    let _ = AesGcmSivKeyFormat::decode(bytes);
    let _ = KeyData::decode(bytes);
    let _ = KeyProto::decode(&AesGcmSivKey::type_url(), bytes);
    let _ = KeyProto::decode(&XChaCha20Poly1305Key::type_url(), bytes);
}

fuzz_target!(|attack: CborAttack| {
    match attack {
        CborAttack::DeeplyNested { depth, map } => {
            let depth = (depth % 50) as usize;
            let mut bytes = Vec::new();
            for _ in 0..depth {
                if map {
                    bytes.extend_from_slice(&[0xA1, 0x61, b'a']);
                } else {
                    bytes.push(0x81);
                }
            }
            bytes.push(0x01);
            decode_all(&bytes);
        }

        CborAttack::HugeLength { claimed_len_exponent } => {
            let exponent = (claimed_len_exponent % 21) as u32;
            let claimed_length = if exponent < 20 { 1u32 << exponent } else { u32::MAX };

            for major in [0x5A, 0x7A, 0x9A] {
                let mut bytes = vec![major];
                bytes.extend_from_slice(&claimed_length.to_be_bytes());
                bytes.extend(vec![0x01; (claimed_length as usize).min(10)]);
                decode_all(&bytes);
            }
        }

        CborAttack::RandomBytes { bytes } => decode_all(&bytes),

        CborAttack::DuplicateKeys { count } => {
            let count = (count % 10).max(2);
            let mut bytes = vec![0xA0 | count];
            for _ in 0..count {
                bytes.push(0x67);
                bytes.extend_from_slice(b"version");
                bytes.push(0x00);
            }
            decode_all(&bytes);
        }

        CborAttack::TrailingBytes { key_value, trailer } => {
            let Ok(mut bytes) = (AesGcmSivKey { version: 0, key_value }).encode() else {
                return;
            };
            let had_trailer = !trailer.is_empty();
            bytes.extend_from_slice(&trailer);

            if had_trailer {
                assert!(AesGcmSivKey::decode(&bytes).is_err());
            }
        }
    }
});
