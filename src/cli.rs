//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use sheldon_plugins::logging::LogConfig;

use crate::commands;

/// Generate a sheldon plugins.toml from package.json git dependencies
#[derive(Parser, Debug)]
#[command(name = "sheldon-plugins")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (generates the config when omitted)
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: commands::generate::GenerateArgs,

    /// Colorize log output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        LogConfig::from_flags(&self.log_level, &self.color).init();

        match self.command {
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => commands::generate::execute(self.generate),
        }
    }
}
