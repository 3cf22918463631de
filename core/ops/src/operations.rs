//! Encrypt/decrypt workflows over container files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::{BreachPolicy, LifecycleConfig};
use crate::prompt::Prompter;
use yjcrypt_breach::{BreachCheckResult, PasswordAudit};
use yjcrypt_common::{Error, Result};
use yjcrypt_container::{codec, FILE_EXTENSION};
use yjcrypt_crypto::{aead, kdf, DerivedKey};

/// How a lifecycle operation finished.
///
/// A declined confirmation or an abandoned retry loop is a graceful
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation completed and wrote the given output file.
    Completed(PathBuf),
    /// The operator aborted; nothing was written.
    Aborted,
}

/// Encrypt/decrypt workflow driver.
///
/// Owns no state beyond its configuration; every run loads the whole file
/// into memory, performs one cryptographic pass, and writes the result
/// atomically. Strictly sequential: callers must not run two operations
/// against the same path at once.
pub struct FileOperations<'a, P: Prompter, A: PasswordAudit> {
    config: LifecycleConfig,
    prompter: &'a mut P,
    audit: &'a A,
}

impl<'a, P: Prompter, A: PasswordAudit> FileOperations<'a, P, A> {
    /// Create a workflow driver with the given collaborators.
    pub fn new(config: LifecycleConfig, prompter: &'a mut P, audit: &'a A) -> Self {
        Self {
            config,
            prompter,
            audit,
        }
    }

    /// Encrypt `path` into `path.yjch`.
    ///
    /// # Preconditions
    /// - `path` exists and is a regular file
    /// - `path` is not already a container
    ///
    /// # Postconditions
    /// - On `Outcome::Completed`, the container was written atomically and
    ///   the original file still exists unless its deletion was confirmed
    /// - On `Outcome::Aborted`, nothing was written or deleted
    ///
    /// # Errors
    /// - `Error::AlreadyEncrypted` if `path` carries the container signature
    /// - `Error::Io` / `Error::InvalidInput` on precondition failures
    pub fn encrypt_file(&mut self, path: &Path) -> Result<Outcome> {
        require_regular_file(path)?;

        if codec::probe_is_container(path) {
            return Err(Error::AlreadyEncrypted(path.to_path_buf()));
        }

        let password = self.choose_encryption_password()?;

        let output = container_path(path);
        if output.exists() {
            let overwrite = self
                .prompter
                .confirm(&format!("{} exists. Overwrite?", output.display()))?;
            if !overwrite {
                info!("Encryption cancelled, nothing written");
                return Ok(Outcome::Aborted);
            }
        }

        let plaintext = fs::read(path)?;
        debug!(path = %path.display(), bytes = plaintext.len(), "Encrypting file");

        let key = kdf::derive_key(&password);
        let nonce = aead::generate_nonce();
        let ciphertext = aead::encrypt(&key, &nonce, &plaintext)?;

        write_atomic(&output, &codec::encode(&nonce, &ciphertext))?;
        info!(output = %output.display(), "Container written");

        self.offer_deletion(path, "original")?;

        Ok(Outcome::Completed(output))
    }

    /// Decrypt the container at `path`.
    ///
    /// The output path defaults to `path` with the `.yjch` suffix stripped
    /// and can be overridden through the prompter. Wrong passwords drive a
    /// retry loop; abandoning it ends the operation without writing.
    ///
    /// # Errors
    /// - `Error::NotAContainer` if `path` lacks the container signature
    /// - `Error::Io` / `Error::InvalidInput` on precondition failures
    pub fn decrypt_file(&mut self, path: &Path) -> Result<Outcome> {
        require_regular_file(path)?;

        if !codec::probe_is_container(path) {
            return Err(Error::NotAContainer(path.to_path_buf()));
        }

        let default = default_plaintext_path(path);
        let output = self.prompter.output_path(&default)?;

        // Bounded only by the operator: each failed attempt asks whether
        // to try another password.
        loop {
            let password = self.prompter.secret("Password")?;
            if password.is_empty() {
                warn!("Empty password, try again");
                continue;
            }

            let key = kdf::derive_key(&password);
            match self.try_decrypt(path, &key) {
                Ok(plaintext) => {
                    write_atomic(&output, &plaintext)?;
                    info!(output = %output.display(), "File decrypted");

                    self.offer_deletion(path, "encrypted")?;

                    return Ok(Outcome::Completed(output));
                }
                Err(_) => {
                    warn!("Wrong password or corrupted container");
                    let retry = self.prompter.confirm("Retry with another password?")?;
                    if !retry {
                        info!("Decryption abandoned, nothing written");
                        return Ok(Outcome::Aborted);
                    }
                }
            }
        }
    }

    /// One decryption attempt: read, parse, verify.
    ///
    /// Every failure here lands in the retry loop; only the final output
    /// write can abort the operation.
    fn try_decrypt(&self, path: &Path, key: &DerivedKey) -> Result<Vec<u8>> {
        let bytes = fs::read(path)?;
        let (nonce, ciphertext) = codec::decode(&bytes)?;
        aead::decrypt(key, &nonce, ciphertext)
    }

    /// Password acquisition loop for encryption.
    ///
    /// Empty passwords re-prompt. Breached passwords warn and, depending
    /// on policy, either offer an explicit override or force a new choice.
    /// An inconclusive check warns and proceeds.
    fn choose_encryption_password(&mut self) -> Result<String> {
        loop {
            let password = self.prompter.secret("Password")?;
            if password.is_empty() {
                warn!("Empty password, try again");
                continue;
            }

            match self.audit.check(&password) {
                BreachCheckResult { queried: false, .. } => {
                    warn!("Breach check could not be completed; proceeding without it");
                    return Ok(password);
                }
                BreachCheckResult { breached: true, .. } => {
                    warn!("This password appears in known data breaches");
                    match self.config.breach_policy {
                        BreachPolicy::BlockOnBreach => {
                            warn!("Breached passwords are not accepted, choose another");
                            continue;
                        }
                        BreachPolicy::WarnOnly => {
                            if self.prompter.confirm("Use this password anyway?")? {
                                return Ok(password);
                            }
                        }
                    }
                }
                BreachCheckResult { .. } => return Ok(password),
            }
        }
    }

    /// Offer the confirmed, irreversible deletion of a source file.
    fn offer_deletion(&mut self, path: &Path, role: &str) -> Result<()> {
        let delete = self
            .prompter
            .confirm(&format!("Delete the {} file {}?", role, path.display()))?;
        if delete {
            fs::remove_file(path)?;
            info!(path = %path.display(), "Source file deleted");
        }
        Ok(())
    }
}

/// Check that `path` names an existing regular file.
fn require_regular_file(path: &Path) -> Result<()> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(Error::InvalidInput(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    Ok(())
}

/// Output path for encryption: the input path with `.yjch` appended.
fn container_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".");
    os.push(FILE_EXTENSION);
    PathBuf::from(os)
}

/// Default output path for decryption: the input path with the `.yjch`
/// suffix stripped. A container that does not carry the suffix gets
/// `.dec` appended instead, so the input is never overwritten in place.
fn default_plaintext_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == FILE_EXTENSION => path.with_extension(""),
        _ => {
            let mut os = path.as_os_str().to_os_string();
            os.push(".dec");
            PathBuf::from(os)
        }
    }
}

/// Write `bytes` to `dest` through a temporary file in the destination
/// directory, flushed and atomically renamed into place. The temporary
/// file is removed on every failure path, so a crash never leaves a
/// truncated destination.
fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(dest).map_err(|e| Error::Io(e.error))?;

    Ok(())
}
