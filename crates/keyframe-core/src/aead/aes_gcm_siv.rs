//! AES-GCM-SIV key manager and key factory.
//!
//! Accepts version 0 keys of 16 or 32 bytes (AES-128 / AES-256).

use keyframe_crypto::{AES_GCM_SIV_KEY_SIZES, AeadCipher, AesGcmSivCipher};
use keyframe_proto::{
    AesGcmSivKey, AesGcmSivKeyFormat, KeyData, KeyFormatProto, KeyMaterialType, KeyProto, Message,
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

/// Only key version accepted by [`AesGcmSivKeyManager`]
pub const AES_GCM_SIV_KEY_VERSION: u32 = 0;

/// Builds AES-GCM-SIV primitives from [`AesGcmSivKey`]s.
#[derive(Debug, Clone)]
pub struct AesGcmSivKeyManager<E> {
    /// Type URL claimed by this manager
    key_type: String,
    /// Input limits
    config: KeyManagerConfig,
    /// Nonce source handed to every primitive
    env: E,
    /// Factory for keys this manager accepts
    factory: AesGcmSivKeyFactory<E>,
}

impl<E: Environment> AesGcmSivKeyManager<E> {
    /// Create a manager with default configuration.
    pub fn new(env: E) -> Self {
        Self::with_config(env, KeyManagerConfig::default())
    }

    /// Create a manager with explicit configuration.
    pub fn with_config(env: E, config: KeyManagerConfig) -> Self {
        Self {
            key_type: AesGcmSivKey::type_url(),
            config,
            factory: AesGcmSivKeyFactory::with_config(env.clone(), config),
            env,
        }
    }

    /// Typed factory for this manager's keys.
    pub fn factory(&self) -> &AesGcmSivKeyFactory<E> {
        &self.factory
    }

    /// Validate `key` and build a primitive from it.
    ///
    /// # Errors
    ///
    /// - `BadVersion` if `key.version` is not 0
    /// - `BadKeySize` if `key.key_value` is not 16 or 32 bytes
    /// - `Construction` if the cipher rejects the key
    pub fn primitive_from_key(&self, key: &AesGcmSivKey) -> Result<AeadBox> {
        validate_key(key)?;

        let cipher = AesGcmSivCipher::new(&key.key_value)?;
        Ok(Box::new(AeadPrimitive::new(cipher, self.env.clone())))
    }
}

impl Default for AesGcmSivKeyManager<SystemEnv> {
    fn default() -> Self {
        Self::new(SystemEnv::new())
    }
}

impl<E: Environment> KeyManager<AeadBox> for AesGcmSivKeyManager<E> {
    fn key_type(&self) -> &str {
        &self.key_type
    }

    fn version(&self) -> u32 {
        AES_GCM_SIV_KEY_VERSION
    }

    fn primitive_from_key_data(&self, key_data: &KeyData) -> Result<AeadBox> {
        if !self.does_support(&key_data.type_url) {
            tracing::debug!(type_url = %key_data.type_url, "rejecting key data of unsupported type");
            return Err(KeyManagerError::WrongKeyType { type_name: key_data.type_url.clone() });
        }

        let key: AesGcmSivKey =
            decode_bounded(&key_data.value, self.config.effective_max_serialized_len())
                .map_err(KeyManagerError::malformed_key)?;

        self.primitive_from_key(&key)
    }

    fn primitive(&self, key: &KeyProto) -> Result<AeadBox> {
        match key {
            KeyProto::AesGcmSiv(key) => self.primitive_from_key(key),
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

/// Generates [`AesGcmSivKey`]s.
#[derive(Debug, Clone)]
pub struct AesGcmSivKeyFactory<E> {
    /// Type URL stamped on generated envelopes
    key_type: String,
    /// Input limits
    config: KeyManagerConfig,
    /// Key material source
    env: E,
}

impl<E: Environment> AesGcmSivKeyFactory<E> {
    /// Create a factory with default configuration.
    pub fn new(env: E) -> Self {
        Self::with_config(env, KeyManagerConfig::default())
    }

    /// Create a factory with explicit configuration.
    pub fn with_config(env: E, config: KeyManagerConfig) -> Self {
        Self { key_type: AesGcmSivKey::type_url(), config, env }
    }

    /// Generate a version 0 key of `format.key_size` random bytes.
    ///
    /// # Errors
    ///
    /// - `BadKeySize` if `format.key_size` is not 16 or 32
    pub fn new_aes_gcm_siv_key(&self, format: &AesGcmSivKeyFormat) -> Result<AesGcmSivKey> {
        validate_format(format)?;

        Ok(AesGcmSivKey {
            version: AES_GCM_SIV_KEY_VERSION,
            key_value: generate_key_value(&self.env, format.key_size as usize),
        })
    }
}

impl<E: Environment> KeyFactory for AesGcmSivKeyFactory<E> {
    fn new_key(&self, format: &KeyFormatProto) -> Result<KeyProto> {
        match format {
            KeyFormatProto::AesGcmSiv(format) => self.new_aes_gcm_siv_key(format).map(KeyProto::from),
            other => {
                tracing::debug!(schema = other.type_name(), "rejecting key format of unsupported schema");
                Err(KeyManagerError::WrongFormatType { type_name: other.type_name().to_string() })
            },
        }
    }

    fn new_key_from_bytes(&self, serialized_format: &[u8]) -> Result<KeyProto> {
        let format: AesGcmSivKeyFormat =
            decode_bounded(serialized_format, self.config.effective_max_serialized_len())
                .map_err(KeyManagerError::malformed_format)?;

        self.new_aes_gcm_siv_key(&format).map(KeyProto::from)
    }

    fn new_key_data(&self, serialized_format: &[u8]) -> Result<KeyData> {
        let key = self.new_key_from_bytes(serialized_format)?;
        let value = key.encode().map_err(|e| KeyManagerError::Serialization(e.to_string()))?;

        Ok(KeyData::new(self.key_type.clone(), value, KeyMaterialType::Symmetric))
    }
}

fn validate_key(key: &AesGcmSivKey) -> Result<()> {
    validate_version(key.version, AES_GCM_SIV_KEY_VERSION)?;
    validate_key_size(key.key_value.len(), AES_GCM_SIV_KEY_SIZES)
}

fn validate_format(format: &AesGcmSivKeyFormat) -> Result<()> {
    validate_key_size(format.key_size as usize, AES_GCM_SIV_KEY_SIZES)
}
