//! Property-based tests for key managers and key factories
//!
//! These tests verify the invariants every manager must hold:
//!
//! 1. **Generation**: factories only produce whitelisted sizes at version 0
//! 2. **Rejection**: every non-whitelisted size fails with the size in the
//!    message, for both generation and validation
//! 3. **Round-trip**: decrypt(encrypt(m, a), a) == m through either entry
//!    point
//! 4. **Envelope**: `new_key_data` output validates like direct `new_key`

use keyframe_core::{
    AesGcmSivKeyManager, Environment, KeyManager, KeyManagerError, XChaCha20Poly1305KeyManager,
};
use keyframe_proto::{
    AesGcmSivKey, AesGcmSivKeyFormat, KeyData, KeyMaterialType, KeyProto, Message,
    XChaCha20Poly1305KeyFormat,
};
use proptest::prelude::*;

// Test environment backed by the thread-local RNG
#[derive(Clone)]
struct TestEnv;

impl Environment for TestEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        use rand::RngCore;
        rand::thread_rng().fill_bytes(buffer);
    }
}

fn supported_size() -> impl Strategy<Value = u32> {
    prop_oneof![Just(16u32), Just(32u32)]
}

fn unsupported_size() -> impl Strategy<Value = u32> {
    (0u32..42).prop_filter("whitelisted size", |len| *len != 16 && *len != 32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_new_key_supported_sizes(key_size in supported_size()) {
        let manager = AesGcmSivKeyManager::new(TestEnv);

        let key = manager.factory().new_aes_gcm_siv_key(&AesGcmSivKeyFormat { key_size }).unwrap();

        prop_assert_eq!(key.version, 0);
        prop_assert_eq!(key.key_value.len(), key_size as usize);
    }

    #[test]
    fn prop_new_key_unsupported_sizes(key_size in unsupported_size()) {
        let manager = AesGcmSivKeyManager::new(TestEnv);

        let err = manager.key_factory().new_key(&AesGcmSivKeyFormat { key_size }.into()).unwrap_err();
        let message = err.to_string();

        prop_assert!(
            matches!(err, KeyManagerError::BadKeySize { .. }),
            "unexpected error: {}",
            message
        );
        let expected = format!("{key_size} bytes");
        prop_assert!(message.contains(&expected));
        prop_assert!(message.contains("supported sizes"));
    }

    #[test]
    fn prop_unsupported_size_rejected_at_validation(
        key_value in prop::collection::vec(any::<u8>(), 0..42)
            .prop_filter("whitelisted size", |v| v.len() != 16 && v.len() != 32),
    ) {
        let manager = AesGcmSivKeyManager::new(TestEnv);
        let len = key_value.len();

        let err = manager.primitive(&KeyProto::from(AesGcmSivKey { version: 0, key_value })).err();

        prop_assert!(
            matches!(err, Some(KeyManagerError::BadKeySize { size, .. }) if size == len),
            "unexpected result for {} byte key: {:?}",
            len,
            err
        );
    }

    #[test]
    fn prop_nonzero_version_rejected(version in 1u32.., key_size in supported_size()) {
        let manager = AesGcmSivKeyManager::new(TestEnv);
        let key = AesGcmSivKey { version, key_value: vec![0; key_size as usize] };

        let err = manager.primitive_from_key(&key).err();

        prop_assert!(
            matches!(err, Some(KeyManagerError::BadVersion { version: v, .. }) if v == version),
            "unexpected result for version {}: {:?}",
            version,
            err
        );
    }

    #[test]
    fn prop_roundtrip_through_both_entry_points(
        key_value in supported_size().prop_flat_map(|n| prop::collection::vec(any::<u8>(), n as usize)),
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        aad in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let manager = AesGcmSivKeyManager::new(TestEnv);
        let key = AesGcmSivKey { version: 0, key_value };
        let key_data = KeyData::new(
            AesGcmSivKey::type_url(),
            key.encode().unwrap(),
            KeyMaterialType::Symmetric,
        );

        let direct = manager.primitive_from_key(&key).unwrap();
        let enveloped = manager.primitive_from_key_data(&key_data).unwrap();

        let ciphertext = direct.encrypt(&plaintext, &aad).unwrap();
        prop_assert_eq!(direct.decrypt(&ciphertext, &aad).unwrap(), plaintext.clone());
        prop_assert_eq!(enveloped.decrypt(&ciphertext, &aad).unwrap(), plaintext);
    }

    #[test]
    fn prop_new_key_data_satisfies_key_invariants(key_size in supported_size()) {
        let manager = AesGcmSivKeyManager::new(TestEnv);
        let format = AesGcmSivKeyFormat { key_size }.encode().unwrap();

        let key_data = manager.key_factory().new_key_data(&format).unwrap();

        prop_assert_eq!(key_data.type_url.as_str(), manager.key_type());
        prop_assert_eq!(key_data.key_material_type, KeyMaterialType::Symmetric);

        let key = AesGcmSivKey::decode(&key_data.value).unwrap();
        prop_assert_eq!(key.version, 0);
        prop_assert_eq!(key.key_value.len(), key_size as usize);
        prop_assert!(manager.primitive_from_key_data(&key_data).is_ok());
    }

    #[test]
    fn prop_xchacha_factory_and_manager_agree(
        plaintext in prop::collection::vec(any::<u8>(), 0..500),
        aad in prop::collection::vec(any::<u8>(), 0..50),
    ) {
        let manager = XChaCha20Poly1305KeyManager::new(TestEnv);
        let format = XChaCha20Poly1305KeyFormat { key_size: 32 }.encode().unwrap();

        let key_data = manager.key_factory().new_key_data(&format).unwrap();
        let aead = manager.primitive_from_key_data(&key_data).unwrap();

        let ciphertext = aead.encrypt(&plaintext, &aad).unwrap();
        prop_assert_eq!(aead.decrypt(&ciphertext, &aad).unwrap(), plaintext);
    }
}

#[test]
fn managers_reject_each_others_key_data() {
    let aes = AesGcmSivKeyManager::new(TestEnv);
    let xchacha = XChaCha20Poly1305KeyManager::new(TestEnv);

    let aes_key_data = aes
        .key_factory()
        .new_key_data(&AesGcmSivKeyFormat { key_size: 32 }.encode().unwrap())
        .unwrap();
    let xchacha_key_data = xchacha
        .key_factory()
        .new_key_data(&XChaCha20Poly1305KeyFormat { key_size: 32 }.encode().unwrap())
        .unwrap();

    assert!(matches!(
        aes.primitive_from_key_data(&xchacha_key_data),
        Err(KeyManagerError::WrongKeyType { .. })
    ));
    assert!(matches!(
        xchacha.primitive_from_key_data(&aes_key_data),
        Err(KeyManagerError::WrongKeyType { .. })
    ));
}
