//! Key manager and key factory contracts.
//!
//! A [`KeyManager`] is the trusted boundary between serialized key bytes and
//! live primitives: it checks the type URL, decodes into an owned key,
//! validates it, and only then hands key bytes to a cipher. A [`KeyFactory`]
//! runs the same validation in the other direction, turning a format request
//! into fresh key material.
//!
//! Both are stateless after construction and safe to share across threads.
//! A registry holding many managers keyed by type URL would call these
//! traits; looking managers up is not their concern.

use keyframe_proto::{KeyData, KeyFormatProto, KeyProto};

use crate::error::Result;

/// Validates keys of one schema and builds primitives of type `P` from them.
///
/// # Invariants
///
/// - `key_type()` is fixed for the lifetime of the manager
/// - `does_support(t)` is exact, case-sensitive equality with `key_type()`
/// - No partial primitive is ever returned: every rule is checked before
///   key bytes reach the cipher
pub trait KeyManager<P>: Send + Sync {
    /// Type URL this manager claims.
    fn key_type(&self) -> &str;

    /// The only key version this manager accepts.
    fn version(&self) -> u32;

    /// Whether `type_url` is exactly this manager's type URL.
    fn does_support(&self, type_url: &str) -> bool {
        type_url == self.key_type()
    }

    /// Build a primitive from a serialized envelope.
    ///
    /// Checks, in order: type URL, decoding, version, key size.
    ///
    /// # Errors
    ///
    /// - `WrongKeyType` if `key_data.type_url` is not `key_type()`
    /// - `MalformedKey` if `key_data.value` does not decode
    /// - `BadVersion` / `BadKeySize` from key validation
    /// - `Construction` if the cipher rejects the key
    fn primitive_from_key_data(&self, key_data: &KeyData) -> Result<P>;

    /// Build a primitive from an already decoded key.
    ///
    /// # Errors
    ///
    /// - `WrongKeyType` naming the schema if `key` is not this manager's
    ///   schema
    /// - `BadVersion` / `BadKeySize` / `Construction` as for
    ///   [`KeyManager::primitive_from_key_data`]
    fn primitive(&self, key: &KeyProto) -> Result<P>;

    /// Factory producing keys this manager accepts.
    fn key_factory(&self) -> &dyn KeyFactory;
}

/// Generates fresh key material for one schema.
pub trait KeyFactory: Send + Sync {
    /// Generate a key satisfying `format`.
    ///
    /// # Errors
    ///
    /// - `WrongFormatType` naming the schema if `format` is not this
    ///   factory's schema
    /// - `BadKeySize` if the requested size is not whitelisted
    fn new_key(&self, format: &KeyFormatProto) -> Result<KeyProto>;

    /// Decode a serialized format and generate a key satisfying it.
    ///
    /// # Errors
    ///
    /// - `MalformedFormat` if `serialized_format` does not decode
    /// - any error from [`KeyFactory::new_key`]
    fn new_key_from_bytes(&self, serialized_format: &[u8]) -> Result<KeyProto>;

    /// Generate a key and wrap it in a transportable envelope.
    ///
    /// # Errors
    ///
    /// - any error from [`KeyFactory::new_key_from_bytes`]
    /// - `Serialization` if the generated key cannot be encoded
    fn new_key_data(&self, serialized_format: &[u8]) -> Result<KeyData>;
}
