//! XChaCha20-Poly1305 key manager and key factory.
//!
//! Accepts version 0 keys of exactly 32 bytes.

use keyframe_crypto::{AeadCipher, XCHACHA20_POLY1305_KEY_SIZES, XChaCha20Poly1305Cipher};
use keyframe_proto::{
    KeyData, KeyFormatProto, KeyMaterialType, KeyProto, Message, XChaCha20Poly1305Key,
    XChaCha20Poly1305KeyFormat,
};

use super::{AeadBox, generate_key_value};
use crate::{
    config::KeyManagerConfig,
    env::{Environment, SystemEnv},
    error::{KeyManagerError, Result},
    manager::{KeyFactory, KeyManager},
    primitive::AeadPrimitive,
    validation::{decode_bounded, validate_key_size, validate_version},
};

/// Only key version accepted by [`XChaCha20Poly1305KeyManager`]
pub const XCHACHA20_POLY1305_KEY_VERSION: u32 = 0;

/// Builds XChaCha20-Poly1305 primitives from [`XChaCha20Poly1305Key`]s.
#[derive(Debug, Clone)]
pub struct XChaCha20Poly1305KeyManager<E> {
    key_type: String,
    config: KeyManagerConfig,
    env: E,
    factory: XChaCha20Poly1305KeyFactory<E>,
}

impl<E: Environment> XChaCha20Poly1305KeyManager<E> {
    /// Create a manager with default configuration.
    pub fn new(env: E) -> Self {
        Self::with_config(env, KeyManagerConfig::default())
    }

    /// Create a manager with explicit configuration.
    pub fn with_config(env: E, config: KeyManagerConfig) -> Self {
        Self {
            key_type: XChaCha20Poly1305Key::type_url(),
            config,
            factory: XChaCha20Poly1305KeyFactory::with_config(env.clone(), config),
            env,
        }
    }

    /// Typed factory for this manager's keys.
    pub fn factory(&self) -> &XChaCha20Poly1305KeyFactory<E> {
        &self.factory
    }

    /// Validate `key` and build a primitive from it.
    ///
    /// # Errors
    ///
    /// - `BadVersion` if `key.version` is not 0
    /// - `BadKeySize` if `key.key_value` is not 32 bytes
    /// - `Construction` if the cipher rejects the key
    pub fn primitive_from_key(&self, key: &XChaCha20Poly1305Key) -> Result<AeadBox> {
        validate_version(key.version, XCHACHA20_POLY1305_KEY_VERSION)?;
        validate_key_size(key.key_value.len(), XCHACHA20_POLY1305_KEY_SIZES)?;

        let cipher = XChaCha20Poly1305Cipher::new(&key.key_value)?;
        Ok(Box::new(AeadPrimitive::new(cipher, self.env.clone())))
    }
}

impl Default for XChaCha20Poly1305KeyManager<SystemEnv> {
    fn default() -> Self {
        Self::new(SystemEnv::new())
    }
}

impl<E: Environment> KeyManager<AeadBox> for XChaCha20Poly1305KeyManager<E> {
    fn key_type(&self) -> &str {
        &self.key_type
    }

    fn version(&self) -> u32 {
        XCHACHA20_POLY1305_KEY_VERSION
    }

    fn primitive_from_key_data(&self, key_data: &KeyData) -> Result<AeadBox> {
        if !self.does_support(&key_data.type_url) {
            tracing::debug!(type_url = %key_data.type_url, "rejecting key data of unsupported type");
            return Err(KeyManagerError::WrongKeyType { type_name: key_data.type_url.clone() });
        }

        let key: XChaCha20Poly1305Key =
            decode_bounded(&key_data.value, self.config.effective_max_serialized_len())
                .map_err(KeyManagerError::malformed_key)?;

        self.primitive_from_key(&key)
    }

    fn primitive(&self, key: &KeyProto) -> Result<AeadBox> {
        match key {
            KeyProto::XChaCha20Poly1305(key) => self.primitive_from_key(key),
            other => {
                tracing::debug!(schema = other.type_name(), "rejecting key of unsupported schema");
                Err(KeyManagerError::WrongKeyType { type_name: other.type_name().to_string() })
            },
        }
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

/// Generates [`XChaCha20Poly1305Key`]s.
#[derive(Debug, Clone)]
pub struct XChaCha20Poly1305KeyFactory<E> {
    key_type: String,
    config: KeyManagerConfig,
    env: E,
}

impl<E: Environment> XChaCha20Poly1305KeyFactory<E> {
    /// Create a factory with default configuration.
    pub fn new(env: E) -> Self {
        Self::with_config(env, KeyManagerConfig::default())
    }

    /// Create a factory with explicit configuration.
    pub fn with_config(env: E, config: KeyManagerConfig) -> Self {
        Self { key_type: XChaCha20Poly1305Key::type_url(), config, env }
    }

    /// Generate a version 0 key of `format.key_size` random bytes.
    ///
    /// # Errors
    ///
    /// - `BadKeySize` if `format.key_size` is not 32
    pub fn new_xchacha20_poly1305_key(
        &self,
        format: &XChaCha20Poly1305KeyFormat,
    ) -> Result<XChaCha20Poly1305Key> {
        let key_size = format.key_size as usize;
        validate_key_size(key_size, XCHACHA20_POLY1305_KEY_SIZES)?;

        Ok(XChaCha20Poly1305Key {
            version: XCHACHA20_POLY1305_KEY_VERSION,
            key_value: generate_key_value(&self.env, key_size),
        })
    }
}

impl<E: Environment> KeyFactory for XChaCha20Poly1305KeyFactory<E> {
    fn new_key(&self, format: &KeyFormatProto) -> Result<KeyProto> {
        match format {
            KeyFormatProto::XChaCha20Poly1305(format) => {
                self.new_xchacha20_poly1305_key(format).map(KeyProto::from)
            },
            other => {
                tracing::debug!(schema = other.type_name(), "rejecting key format of unsupported schema");
                Err(KeyManagerError::WrongFormatType { type_name: other.type_name().to_string() })
            },
        }
    }

    fn new_key_from_bytes(&self, serialized_format: &[u8]) -> Result<KeyProto> {
        let format: XChaCha20Poly1305KeyFormat =
            decode_bounded(serialized_format, self.config.effective_max_serialized_len())
                .map_err(KeyManagerError::malformed_format)?;

        self.new_xchacha20_poly1305_key(&format).map(KeyProto::from)
    }

    fn new_key_data(&self, serialized_format: &[u8]) -> Result<KeyData> {
        let key = self.new_key_from_bytes(serialized_format)?;
        let value = key.encode().map_err(|e| KeyManagerError::Serialization(e.to_string()))?;

        Ok(KeyData::new(self.key_type.clone(), value, KeyMaterialType::Symmetric))
    }
}
