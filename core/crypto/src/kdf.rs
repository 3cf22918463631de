//! Key derivation from a password.
//!
//! The container format derives its key as a single unsalted SHA-256 of the
//! UTF-8 password: no salt, no iteration count, no memory-hardening. This is
//! deliberately weaker than a password-hardening KDF and is preserved exactly
//! for compatibility with containers already produced by this format. Do not
//! strengthen it here; a salted scheme would be a new, incompatible format.
//!
//! Consequence worth knowing: the key is a pure function of the password, so
//! two files encrypted with the same password share a key. Fresh nonces keep
//! GCM's confidentiality and integrity per file, but an observer holding
//! several containers can tell that they used the same password.

use sha2::{Digest, Sha256};

use crate::keys::{DerivedKey, KEY_LENGTH};

/// Derive the 32-byte container key from a password.
///
/// Deterministic: the same password always yields the same key.
pub fn derive_key(password: &str) -> DerivedKey {
    let digest = Sha256::digest(password.as_bytes());

    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest);
    DerivedKey::from_bytes(key)
}
