//! Keyframe key schemas
//!
//! Serialized forms of keys, key-generation requests, and the envelope that
//! carries a key between storage and a key manager. Everything here is plain
//! data plus a CBOR codec; validation of the decoded values belongs to the
//! key managers in `keyframe-core`.
//!
//! ```text
//! KeyData { type_url, value, key_material_type }
//!                       │
//!                       ▼ KeyProto::decode(type_url, value)
//!          KeyProto::AesGcmSiv(AesGcmSivKey { version, key_value })
//! ```
//!
//! We chose CBOR because it is self-describing, compact, and needs no code
//! generation. Decoding never borrows from the input buffer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod errors;
pub mod key_data;
pub mod keys;
pub mod message;

pub use errors::{ProtocolError, Result};
pub use key_data::{KeyData, KeyMaterialType};
pub use keys::{
    KeyFormatProto, KeyProto,
    aes_gcm_siv::{AesGcmSivKey, AesGcmSivKeyFormat},
    xchacha20_poly1305::{XChaCha20Poly1305Key, XChaCha20Poly1305KeyFormat},
};
pub use message::{MAX_MESSAGE_SIZE, Message, TYPE_URL_PREFIX};
