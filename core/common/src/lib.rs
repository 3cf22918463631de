//! Common types shared across yjcrypt crates.
//!
//! This crate provides the error taxonomy used throughout the codebase,
//! ensuring every layer reports failures consistently.

pub mod error;

pub use error::{Error, Result};
