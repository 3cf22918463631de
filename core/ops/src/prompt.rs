//! Injected decision provider for interactive choices.

use std::path::{Path, PathBuf};

use yjcrypt_common::Result;

/// Capability for asking the operator questions.
///
/// The lifecycle core never reads a terminal directly; every password
/// entry, confirmation, and path override goes through this trait. The
/// surrounding application supplies the real implementation.
pub trait Prompter {
    /// Ask for a secret (a password). The input must not be echoed or
    /// logged by the implementation.
    fn secret(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Ask for an output path, offering `default`. Implementations may
    /// return the default unchanged.
    fn output_path(&mut self, default: &Path) -> Result<PathBuf>;
}
