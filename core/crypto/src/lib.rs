//! Cryptographic primitives for yjcrypt.
//!
//! This crate provides:
//! - Key derivation from a password (SHA-256, see [`kdf`] for the caveats)
//! - Authenticated encryption using AES-256-GCM
//! - A key type with automatic zeroization
//!
//! # Security Guarantees
//! - Key material is automatically zeroized on drop
//! - No plaintext, password, or key material is ever logged
//! - Decryption failures never reveal whether the key was wrong or the
//!   ciphertext was tampered with

pub mod aead;
pub mod kdf;
pub mod keys;

pub use aead::{decrypt, encrypt, generate_nonce, NONCE_SIZE, TAG_SIZE};
pub use kdf::derive_key;
pub use keys::{DerivedKey, KEY_LENGTH};
