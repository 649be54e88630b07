//! Key manager configuration

use keyframe_proto::MAX_MESSAGE_SIZE;

/// Default upper bound on serialized keys and key formats (4 KiB).
///
/// Real keys and formats are tens of bytes; anything near this limit is
/// corrupt or adversarial.
pub const DEFAULT_MAX_SERIALIZED_LEN: usize = 4096;

/// Key manager and key factory configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyManagerConfig {
    /// Serialized keys and formats longer than this are rejected before
    /// parsing. Clamped to the codec's own [`MAX_MESSAGE_SIZE`].
    pub max_serialized_len: usize,
}

impl KeyManagerConfig {
    /// Effective limit after clamping to the codec maximum.
    pub fn effective_max_serialized_len(&self) -> usize {
        self.max_serialized_len.min(MAX_MESSAGE_SIZE)
    }
}

impl Default for KeyManagerConfig {
    fn default() -> Self {
        Self { max_serialized_len: DEFAULT_MAX_SERIALIZED_LEN }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(KeyManagerConfig::default().effective_max_serialized_len(), 4096);
    }

    #[test]
    fn limit_is_clamped_to_codec_maximum() {
        let config = KeyManagerConfig { max_serialized_len: usize::MAX };
        assert_eq!(config.effective_max_serialized_len(), MAX_MESSAGE_SIZE);
    }
}
