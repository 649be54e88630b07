//! Keyframe key management core
//!
//! The trusted boundary between serialized key material and live AEAD
//! primitives. Nothing reaches a cipher until its type URL, encoding,
//! version, and size have all been checked.
//!
//! # Flow
//!
//! ```text
//! KeyData { type_url, value }                 KeyFormat bytes
//!        │                                          │
//!        ▼ type URL check (WrongKeyType)            ▼ decode (MalformedFormat)
//!        ▼ decode         (MalformedKey)            ▼ size check (BadKeySize)
//!        ▼ version check  (BadVersion)              ▼ Environment::random_bytes
//!        ▼ size check     (BadKeySize)              ▼
//!        ▼ cipher         (Construction)       Key { version: 0, key_value }
//!        ▼                                          │
//!   Box<dyn Aead>                                   ▼ encode
//!                                             KeyData { Symmetric }
//! ```
//!
//! # Concurrency
//!
//! Managers and factories hold no mutable state after construction. They are
//! `Send + Sync` and can be shared across threads without locking. The only
//! shared resource is the injected [`Environment`], which must produce
//! independent draws per call.
//!
//! # Security
//!
//! - Decoded keys are owned copies; the envelope buffer is never aliased
//! - Key schemas zeroize their key bytes on drop and redact them in `Debug`
//! - Inputs over [`KeyManagerConfig::max_serialized_len`] are rejected before
//!   parsing

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod config;
pub mod env;
pub mod error;
pub mod manager;
pub mod primitive;
pub mod validation;

pub use aead::{
    AeadBox,
    aes_gcm_siv::{AES_GCM_SIV_KEY_VERSION, AesGcmSivKeyFactory, AesGcmSivKeyManager},
    xchacha20_poly1305::{
        XCHACHA20_POLY1305_KEY_VERSION, XChaCha20Poly1305KeyFactory, XChaCha20Poly1305KeyManager,
    },
};
pub use config::{DEFAULT_MAX_SERIALIZED_LEN, KeyManagerConfig};
pub use env::{Environment, SystemEnv};
pub use error::{KeyManagerError, Result};
pub use manager::{KeyFactory, KeyManager};
pub use primitive::{Aead, AeadPrimitive};
