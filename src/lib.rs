//! Keyframe workspace root.
//!
//! Carries workspace-wide development tooling (git hooks via cargo-husky).
//! The key managers live in `crates/keyframe-core`.
