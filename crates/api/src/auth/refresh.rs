//! Renewal-secret generation and digesting.
//!
//! Refresh tokens are opaque random strings; only their SHA-256 digest is
//! stored server-side, so a database leak does not hand out live sessions.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Bytes of CSPRNG entropy behind each renewal secret.
const SECRET_BYTES: usize = 64;

/// Generate a cryptographically random renewal secret.
///
/// 64 random bytes, URL-safe base64 without padding. The plaintext goes to
/// the client exactly once; persist only [`digest`] of it.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compute the SHA-256 hex digest of a renewal secret.
///
/// Deterministic, so an incoming secret matches against the stored digest
/// without the secret ever being persisted.
pub fn digest(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
