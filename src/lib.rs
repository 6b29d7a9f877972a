//! Passgen library crate
//!
//! This crate provides the core functionality for the `passgen` CLI. It is
//! organized into small modules: `charset` (the fixed character classes),
//! `config` (length and class flags), `generate` (the password generator),
//! `clipboard` (clipboard capability), `session` (form state: last password
//! and the "copied" indicator), `shell` (line-driven front end) and `entropy`
//! (strength estimate for a config). The binary `src/main.rs` calls
//! `passgen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `generate::generate()` — pure config → password function.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod charset;
pub mod clipboard;
pub mod config;
pub mod entropy;
pub mod generate;
pub mod session;
pub mod shell;

use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn};

use crate::clipboard::SystemClipboard;
use crate::config::{GenerationConfig, MAX_LENGTH, MIN_LENGTH, clamp_length};
use crate::session::{CopyOutcome, Session};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Character-class switches shared by every command. All classes are on by
/// default; lowercase cannot be disabled.
#[derive(clap::Args, Debug, Clone)]
struct ClassArgs {
    /// Password length (4-32, out-of-range values are clamped)
    #[arg(short = 'l', long = "length", default_value_t = config::DEFAULT_LENGTH)]
    length: usize,

    /// Leave out uppercase letters (A-Z)
    #[arg(long = "no-uppercase", action = ArgAction::SetTrue)]
    no_uppercase: bool,

    /// Leave out numbers (0-9)
    #[arg(long = "no-numbers", action = ArgAction::SetTrue)]
    no_numbers: bool,

    /// Leave out symbols (!@#$%^&*...)
    #[arg(long = "no-symbols", action = ArgAction::SetTrue)]
    no_symbols: bool,
}

impl ClassArgs {
    fn to_config(&self) -> GenerationConfig {
        let length = clamp_length(self.length);
        if length != self.length {
            warn!(
                "length {} outside {}..={}, using {}",
                self.length, MIN_LENGTH, MAX_LENGTH, length
            );
        }
        GenerationConfig::new(
            length,
            !self.no_uppercase,
            !self.no_numbers,
            !self.no_symbols,
        )
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate passwords
    Generate {
        #[command(flatten)]
        classes: ClassArgs,

        /// Number of passwords to generate
        #[arg(short = 'n', long = "count", default_value_t = 1usize)]
        count: usize,

        /// Copy the last result to the clipboard
        #[arg(long = "clipboard", action = ArgAction::SetTrue)]
        clipboard: bool,

        /// Print an entropy estimate for the chosen settings to stderr
        #[arg(long = "strength", action = ArgAction::SetTrue)]
        strength: bool,
    },
    /// Interactive session: generate, copy and adjust settings line by line
    Interactive {
        #[command(flatten)]
        classes: ClassArgs,
    },
}

/// Initialize `env_logger` from `RUST_LOG`, defaulting to warnings so clamp
/// and clipboard problems are visible without configuration.
fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// Run the Passgen CLI.
///
/// This function is the high-level entrypoint used by the `passgen` binary.
/// It parses CLI arguments and dispatches to module functions.
///
/// Behavior summary:
/// - `generate` — print one or more passwords, optionally copy the last one
///   to the clipboard. A failed copy is a warning, not an error.
/// - `interactive` — read form actions from stdin (see [`shell::HELP`]).
///
/// Example:
///
/// ```no_run
/// passgen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            classes,
            count,
            clipboard,
            strength,
        } => {
            let config = classes.to_config();
            let mut session = Session::new(config, SystemClipboard::new());

            for _ in 0..count {
                println!("{}", session.generate());
            }

            if strength {
                let s = entropy::estimate(&config);
                eprintln!(
                    "Estimated entropy: {:.2} bits ({} symbols, {:.3} bits/char)",
                    s.bits, s.pool_size, s.per_char
                );
                eprintln!("Verdict: {}", s.verdict);
            }

            if clipboard {
                match session.copy() {
                    CopyOutcome::Copied => eprintln!("✓ Copied!"),
                    CopyOutcome::NothingToCopy => info!("nothing generated, clipboard untouched"),
                    CopyOutcome::Failed => eprintln!("warning: failed to copy to clipboard"),
                }
            }
        }
        Commands::Interactive { classes } => {
            let mut session = Session::new(classes.to_config(), SystemClipboard::new());
            let stdin = std::io::stdin();
            if let Err(e) = shell::run(&mut session, stdin.lock(), std::io::stdout()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
