//! Blocking range-query client for the breach service.

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::hash::{hash_password, suffix_in_ranges};
use yjcrypt_common::{Error, Result};

/// Base URL of the public Pwned Passwords range API.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

/// Outcome of a breach check.
///
/// `queried == false` means the check could not be completed; `breached`
/// must then be treated as unknown, not as false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachCheckResult {
    /// Whether the remote service was successfully queried.
    pub queried: bool,
    /// Whether the password appeared in the breach corpus.
    pub breached: bool,
}

impl BreachCheckResult {
    /// An inconclusive result: the service could not be reached.
    pub fn inconclusive() -> Self {
        Self {
            queried: false,
            breached: false,
        }
    }
}

/// Capability for auditing a candidate password against a breach corpus.
///
/// The file lifecycle depends on this trait rather than on the concrete
/// client so workflows stay testable without a network.
pub trait PasswordAudit {
    /// Check a password. Never fails: service problems come back as an
    /// inconclusive result.
    fn check(&self, password: &str) -> BreachCheckResult;
}

/// Client for the k-anonymity range endpoint.
pub struct BreachClient {
    http: Client,
    base_url: String,
}

impl BreachClient {
    /// Create a client against the public breach service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL (testing, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent("yjcrypt/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the suffix list for a 5-character hash prefix.
    ///
    /// One blocking request, no retry, no backoff. Only `prefix` is ever
    /// transmitted.
    ///
    /// # Errors
    /// - `Error::Network` on transport failure or any non-success status
    fn query_range(&self, prefix: &str) -> Result<String> {
        let url = format!("{}/range/{}", self.base_url, prefix);
        debug!(prefix, "Querying breach-check range");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| Error::Network(format!("Breach service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Breach service returned {}",
                response.status()
            )));
        }

        response
            .text()
            .map_err(|e| Error::Network(format!("Failed to read breach response: {}", e)))
    }
}

impl Default for BreachClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordAudit for BreachClient {
    fn check(&self, password: &str) -> BreachCheckResult {
        let (prefix, suffix) = hash_password(password);

        match self.query_range(&prefix) {
            Ok(body) => BreachCheckResult {
                queried: true,
                breached: suffix_in_ranges(&suffix, &body),
            },
            Err(e) => {
                warn!("Password breach check unavailable: {}", e);
                BreachCheckResult::inconclusive()
            }
        }
    }
}
