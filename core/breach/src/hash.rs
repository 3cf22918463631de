//! Hash splitting and range-response parsing.
//!
//! Pure functions, independent of any transport, so the protocol logic is
//! testable without a network.

use sha1::{Digest, Sha1};

/// Number of hex characters sent to the remote service.
pub const PREFIX_LEN: usize = 5;

/// Hash a password and split the uppercase-hex SHA-1 digest into the
/// 5-character prefix (sent to the service) and the 35-character suffix
/// (kept local).
pub fn hash_password(password: &str) -> (String, String) {
    let digest = Sha1::digest(password.as_bytes());
    let hex = hex::encode_upper(digest);

    let (prefix, suffix) = hex.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Test whether `suffix` appears in a range-query response body.
///
/// The body is newline-separated records of the form `SUFFIX:COUNT`; the
/// password is breached iff `suffix` exactly matches the suffix field of
/// one record. The occurrence count is ignored.
pub fn suffix_in_ranges(suffix: &str, body: &str) -> bool {
    body.lines()
        .filter_map(|line| line.trim_end().split(':').next())
        .any(|candidate| candidate == suffix)
}
