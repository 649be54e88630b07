//! Key managers for AEAD primitives.
//!
//! One manager per cipher family. Each pairs with a factory that generates
//! keys its manager will accept, so `manager.primitive(factory.new_key(f)?)`
//! succeeds for every well-formed format `f`.

pub mod aes_gcm_siv;
pub mod xchacha20_poly1305;

use crate::{env::Environment, primitive::Aead};

/// Primitive type produced by the managers in this module.
pub type AeadBox = Box<dyn Aead>;

/// Draw `size` fresh key bytes from `env`.
///
/// `size` has already been checked against the whitelist, so the allocation
/// is bounded.
pub(crate) fn generate_key_value<E: Environment>(env: &E, size: usize) -> Vec<u8> {
    let mut key_value = vec![0u8; size];
    env.random_bytes(&mut key_value);
    tracing::debug!(size, "generated key material");
    key_value
}
