//! Keyframe AEAD ciphers
//!
//! Thin, validated wrappers over RustCrypto AEAD implementations. These are
//! the primitive constructors that key managers hand validated key bytes to.
//! Pure functions with deterministic outputs: callers provide nonces, so the
//! randomness policy lives with the caller.
//!
//! # Sealed Layout
//!
//! ```text
//! ┌──────────────┬─────────────────────────┬──────────────┐
//! │ nonce        │ ciphertext              │ tag (16)     │
//! │ 12 or 24     │ len(plaintext)          │              │
//! └──────────────┴─────────────────────────┴──────────────┘
//! ```
//!
//! # Security
//!
//! - AES-GCM-SIV (RFC 8452): nonce-misuse resistant, 128 or 256-bit keys
//! - XChaCha20-Poly1305: 192-bit nonces, safe to draw at random
//! - Any change to key, nonce, ciphertext, tag, or associated data fails
//!   authentication. Partial plaintext is never returned.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aes_gcm_siv;
pub mod cipher;
pub mod error;
pub mod xchacha20_poly1305;

pub use aes_gcm_siv::{AES_GCM_SIV_KEY_SIZES, AES_GCM_SIV_NONCE_SIZE, AesGcmSivCipher};
pub use cipher::{AeadCipher, TAG_SIZE};
pub use error::CipherError;
pub use xchacha20_poly1305::{
    XCHACHA20_POLY1305_KEY_SIZES, XCHACHA20_POLY1305_NONCE_SIZE, XChaCha20Poly1305Cipher,
};
