//! # sheldon-plugins CLI
//!
//! This is the binary entry point for the `sheldon-plugins` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up diagnostic logging.
//! - Executing the appropriate command and reporting errors on stderr with a
//!   non-zero exit code.
//!
//! The generation logic lives in the `sheldon_plugins` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
