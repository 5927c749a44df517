//! Password hashing and verification.
//!
//! Deterministic unsalted SHA-256, base64-encoded. No salt means two accounts
//! with the same password share a digest — a documented weakness of the
//! original prototype, kept for fidelity. This is not a security boundary:
//! there is no session expiry, rate limiting, or token model.

use base64::Engine;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Username of the bootstrap account present before any user action.
pub const SEED_USERNAME: &str = "doctor";

/// Password of the bootstrap account (prototype credential).
pub const SEED_PASSWORD: &str = "password123";

/// Compute the SHA-256 digest of a password, base64-encoded.
///
/// Same algorithm at seed time and at login, so digests compare equal iff
/// the passwords match.
pub fn hash_password(password: &str) -> String {
    let hash = Sha256::digest(password.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(hash)
}

/// Verify a password against a stored digest in constant time.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let candidate = hash_password(password);
    candidate.as_bytes().ct_eq(stored_hash.as_bytes()).unwrap_u8() == 1
}
