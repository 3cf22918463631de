//! Authenticated encryption using AES-256-GCM.
//!
//! The whole plaintext is processed as one buffer; the primitive appends a
//! 16-byte authentication tag to the ciphertext. Nonces are 12 bytes and
//! must be freshly random for every encryption under a given key.

use aes_gcm::{
    aead::{generic_array::GenericArray, Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm,
};

use crate::keys::DerivedKey;
use yjcrypt_common::{Error, Result};

/// Nonce size for AES-GCM (12 bytes).
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size (16 bytes).
pub const TAG_SIZE: usize = 16;

/// Generate a fresh random nonce from the operating system RNG.
pub fn generate_nonce() -> [u8; NONCE_SIZE] {
    Aes256Gcm::generate_nonce(&mut OsRng).into()
}

/// Encrypt plaintext under `key` with the given nonce, no associated data.
///
/// # Preconditions
/// - `nonce` must be unique for every encryption under `key`
///
/// # Postconditions
/// - Returns ciphertext with the 16-byte tag appended, so the output is
///   exactly `plaintext.len() + TAG_SIZE` bytes
pub fn encrypt(key: &DerivedKey, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .encrypt(GenericArray::from_slice(nonce), plaintext)
        .map_err(|_| Error::InvalidInput("Encryption failed".to_string()))
}

/// Decrypt ciphertext+tag under `key` with the given nonce.
///
/// # Errors
/// - `Error::Authentication` on any verification failure. A wrong key and a
///   tampered ciphertext are indistinguishable here: both produce the same
///   error with no further detail.
pub fn decrypt(key: &DerivedKey, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < TAG_SIZE {
        return Err(Error::Authentication);
    }

    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| Error::Authentication)
}
