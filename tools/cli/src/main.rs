//! yjcrypt CLI - encrypt and decrypt `.yjch` container files.
//!
//! Thin interactive glue over the lifecycle crate: argument parsing,
//! logging setup, and a terminal-backed prompter. All business logic
//! lives in `yjcrypt-ops`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use yjcrypt_breach::BreachClient;
use yjcrypt_ops::{BreachPolicy, FileOperations, LifecycleConfig, Outcome, Prompter};

#[derive(Parser)]
#[command(name = "yjcrypt")]
#[command(about = "yjcrypt - authenticated single-file encryption")]
#[command(version)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// How to handle passwords found in known breaches.
    #[arg(long, value_enum, default_value = "warn-only")]
    breach_policy: PolicyArg,

    /// Base URL of the breach-check service.
    #[arg(long, default_value = yjcrypt_breach::DEFAULT_BASE_URL)]
    breach_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Warn about breached passwords but allow an explicit override.
    WarnOnly,
    /// Refuse breached passwords outright.
    BlockOnBreach,
}

impl From<PolicyArg> for BreachPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::WarnOnly => BreachPolicy::WarnOnly,
            PolicyArg::BlockOnBreach => BreachPolicy::BlockOnBreach,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a `.yjch` container.
    Encrypt {
        /// File to encrypt.
        path: PathBuf,
    },

    /// Decrypt a `.yjch` container.
    Decrypt {
        /// Container to decrypt.
        path: PathBuf,

        /// Output path (default: input with the `.yjch` suffix stripped).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = LifecycleConfig {
        breach_policy: cli.breach_policy.into(),
    };
    let audit = BreachClient::with_base_url(cli.breach_url);

    let outcome = match cli.command {
        Commands::Encrypt { path } => {
            let mut prompter = TerminalPrompter::new(None);
            FileOperations::new(config, &mut prompter, &audit).encrypt_file(&path)?
        }
        Commands::Decrypt { path, output } => {
            let mut prompter = TerminalPrompter::new(output);
            FileOperations::new(config, &mut prompter, &audit).decrypt_file(&path)?
        }
    };

    match outcome {
        Outcome::Completed(path) => println!("Done: {}", path.display()),
        Outcome::Aborted => println!("Operation cancelled."),
    }

    Ok(())
}

/// Prompter backed by the terminal.
struct TerminalPrompter {
    /// Output override from the command line; wins over the interactive
    /// question when present.
    output: Option<PathBuf>,
}

impl TerminalPrompter {
    fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }
}

impl Prompter for TerminalPrompter {
    fn secret(&mut self, prompt: &str) -> yjcrypt_common::Result<String> {
        let password = rpassword::prompt_password(format!("{}: ", prompt))?;
        Ok(password)
    }

    fn confirm(&mut self, prompt: &str) -> yjcrypt_common::Result<bool> {
        print!("{} [y/N] ", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn output_path(&mut self, default: &Path) -> yjcrypt_common::Result<PathBuf> {
        if let Some(path) = self.output.take() {
            return Ok(path);
        }

        print!("Output path [{}]: ", default.display());
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.to_path_buf())
        } else {
            Ok(PathBuf::from(answer))
        }
    }
}
