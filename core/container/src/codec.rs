//! Serialization and parsing of the container layout.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use yjcrypt_common::{Error, Result};

/// Format signature at the start of every container.
pub const SIGNATURE: [u8; 8] = *b"YJCHGCM1";

/// Length of the signature in bytes.
pub const SIGNATURE_LEN: usize = SIGNATURE.len();

/// Length of the nonce field in bytes.
pub const NONCE_LEN: usize = 12;

/// File extension (without the dot) used for container files.
pub const FILE_EXTENSION: &str = "yjch";

/// Serialize a container: signature ‖ nonce ‖ ciphertext+tag.
///
/// # Postconditions
/// - Output length is `SIGNATURE_LEN + NONCE_LEN + ciphertext.len()`
pub fn encode(nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(SIGNATURE_LEN + NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(nonce);
    out.extend_from_slice(ciphertext);
    out
}

/// Parse container bytes into the nonce and the ciphertext+tag region.
///
/// # Errors
/// - `Error::Format` if the input is shorter than signature + nonce
/// - `Error::Format` if the leading bytes do not match the signature
pub fn decode(bytes: &[u8]) -> Result<([u8; NONCE_LEN], &[u8])> {
    if bytes.len() < SIGNATURE_LEN + NONCE_LEN {
        return Err(Error::Format(format!(
            "Truncated container: {} bytes, need at least {}",
            bytes.len(),
            SIGNATURE_LEN + NONCE_LEN
        )));
    }

    if bytes[..SIGNATURE_LEN] != SIGNATURE {
        return Err(Error::Format("Signature mismatch".to_string()));
    }

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&bytes[SIGNATURE_LEN..SIGNATURE_LEN + NONCE_LEN]);

    Ok((nonce, &bytes[SIGNATURE_LEN + NONCE_LEN..]))
}

/// Check whether the file at `path` starts with the container signature.
///
/// Reads only the first `SIGNATURE_LEN` bytes. A missing, unreadable, or
/// shorter file yields `false`, never an error: probing a foreign file is
/// a normal outcome of detection, not a failure.
pub fn probe_is_container(path: impl AsRef<Path>) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut header = [0u8; SIGNATURE_LEN];
    match file.read_exact(&mut header) {
        Ok(()) => header == SIGNATURE,
        Err(_) => false,
    }
}
