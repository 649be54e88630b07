//! Randomness capability.
//!
//! Decouples key generation and nonce selection from the system RNG. The
//! production [`SystemEnv`] draws from the OS; tests substitute deterministic
//! environments so generated keys and ciphertexts are reproducible.

/// Source of cryptographic randomness injected into managers and factories.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// - `random_bytes()` uses cryptographically secure entropy in production
/// - Concurrent callers never observe correlated output (each call is an
///   independent draw, not a shared stream position)
/// - Methods are infallible except in exceptional circumstances (e.g., OS
///   entropy exhaustion)
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random fixed-size array.
    fn random_array<const N: usize>(&self) -> [u8; N] {
        let mut bytes = [0u8; N];
        self.random_bytes(&mut bytes);
        bytes
    }
}

/// Production environment backed by the OS cryptographic RNG.
///
/// # Security
///
/// Uses getrandom, which provides OS-level cryptographic randomness (e.g.,
/// `getrandom(2)` or /dev/urandom on Linux, `BCryptGenRandom` on Windows).
/// Every call is an independent draw, so the environment can be cloned and
/// shared across threads freely.
///
/// # Panics
///
/// Panics if the OS RNG fails. Key generation without functioning
/// cryptographic randomness cannot be made safe, and RNG failure indicates an
/// OS-level fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer)
            .expect("invariant: OS RNG failure is unrecoverable - keys cannot be generated securely");
    }
}
