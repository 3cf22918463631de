//! k-anonymity password-breach check for yjcrypt.
//!
//! Tests a candidate password against a remote credential-breach service
//! without ever revealing it: only the first 5 hex characters of the
//! password's SHA-1 hash leave the process. The service answers with every
//! known hash suffix sharing that prefix and the membership test happens
//! locally.
//!
//! The check is advisory. A service failure yields an inconclusive result
//! (`queried == false`), never a "not breached".

pub mod client;
pub mod hash;

pub use client::{BreachCheckResult, BreachClient, PasswordAudit, DEFAULT_BASE_URL};
pub use hash::{hash_password, suffix_in_ranges, PREFIX_LEN};
