//! # Drawhand CLI Library
//!
//! This library provides the command-line interface for the drawhand engine.
//! It exposes subcommands for evaluating ten-card draw deals, inspecting the
//! generated cardsets, and dealing sample inputs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["drawhand", "deal", "--seed", "42"];
//! let code = drawhand_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `analyze`: Evaluate ten-card deal lines from stdin or a file, with an
//!   optional JSONL evaluation log
//! - `sets`: Print all 32 candidate cardsets for one deal
//! - `deal`: Deal a random ten-card input and evaluate it

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
pub mod ui;

use cli::{Commands, DrawhandCli};
use commands::{handle_analyze_command, handle_deal_command, handle_sets_command};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    match DrawhandCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(parsed) => {
            let result = match parsed.cmd {
                Commands::Analyze { input, log } => {
                    // Use stdin for real input (supports both TTY and piped stdin)
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_analyze_command(input, log, out, err, &mut stdin_lock)
                }
                Commands::Sets { tokens } => handle_sets_command(&tokens, out),
                Commands::Deal { seed } => handle_deal_command(seed, out),
            };
            match result {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
    }
}
