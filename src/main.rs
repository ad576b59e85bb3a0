//! Termtoys - Unified CLI
//!
//! Small terminal toys behind one command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use termtoys::{Cli, Command, PasswordConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Password {
            length,
            no_uppercase,
            no_numbers,
            no_symbols,
            copy,
            config,
        } => run_password(length, no_uppercase, no_numbers, no_symbols, copy, config),
        Command::Play => termtoys::run_tui(),
    }
}

/// Generates a password and prints it to stdout.
fn run_password(
    length: Option<usize>,
    no_uppercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    copy: bool,
    config_path: PathBuf,
) -> Result<()> {
    // Logs go to stderr so stdout carries only the password.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = PasswordConfig::load_or_default(&config_path)?;
    config.apply_overrides(length, no_uppercase, no_numbers, no_symbols);

    let password = termtoys::generate(&config, &mut rand::rng());
    println!("{password}");

    if copy && termtoys::copy_to_clipboard(&password) {
        println!("Password copied to clipboard!");
    }

    Ok(())
}
