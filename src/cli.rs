//! Command-line interface for termtoys.
//!
//! Examples:
//!
//! ```
//! use clap::Parser;
//! use termtoys::{Cli, Command};
//!
//! let cli = Cli::parse_from(["termtoys", "password", "-L", "24", "--no-symbols"]);
//! match cli.command {
//!     Command::Password { length, no_symbols, .. } => {
//!         assert_eq!(length, Some(24));
//!         assert!(no_symbols);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand};

/// Termtoys - Small terminal toys
#[derive(Parser, Debug)]
#[command(name = "termtoys")]
#[command(about = "Password generator and hot-seat tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a password and print it to stdout
    Password {
        /// Password length (overrides the config file)
        #[arg(short = 'L', long)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_numbers: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Copy the password to the system clipboard
        #[arg(short, long)]
        copy: bool,

        /// Path to settings file (defaults used if absent)
        #[arg(long, default_value = "termtoys.toml")]
        config: std::path::PathBuf,
    },

    /// Play hot-seat tic-tac-toe in the terminal
    Play,
}
