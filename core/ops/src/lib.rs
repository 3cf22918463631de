//! File lifecycle management for yjcrypt.
//!
//! This crate ties the container codec, the cipher engine, and the
//! breach-check client together into the encrypt/decrypt workflows:
//! precondition checks, the password/breach loop, overwrite and delete
//! confirmations, and the decrypt retry loop.
//!
//! # Architecture
//! All interactive decision points go through the injected [`Prompter`]
//! capability, so the workflows are deterministic and unit-testable
//! without a terminal. Likewise the breach check is consumed through the
//! `PasswordAudit` trait rather than the concrete network client.

pub mod config;
pub mod operations;
pub mod prompt;

pub use config::{BreachPolicy, LifecycleConfig};
pub use operations::{FileOperations, Outcome};
pub use prompt::Prompter;
