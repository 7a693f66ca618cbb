//! # Generate Command Implementation
//!
//! The default action of `sheldon-plugins`: read `package.json`, turn every
//! `git+` dependency into a sheldon plugin block and write
//! `~/.config/sheldon/plugins.toml`, replacing whatever was there.
//!
//! On success two lines are printed: the destination path and the number of
//! dependencies scanned (non-git ones included).
//!
//! With `--dry-run` the document is printed to stdout instead and nothing on
//! disk is touched.

use anyhow::Result;
use clap::Args;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use sheldon_plugins::defaults::{DEFAULT_MANIFEST, DEFAULT_OUTPUT};
use sheldon_plugins::error::Error;
use sheldon_plugins::generator::{self, GeneratorConfig};

// Arguments of the default action, flattened into `Cli`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the package.json manifest.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_MANIFEST,
        env = "SHELDON_PLUGINS_MANIFEST"
    )]
    pub manifest: PathBuf,

    /// Home directory the output path is resolved against.
    #[arg(long, value_name = "DIR", env = "HOME", hide_env_values = true)]
    pub home: Option<OsString>,

    /// Output file, relative to the home directory.
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        value_parser = parse_relative_path
    )]
    pub output: PathBuf,

    /// Print the generated file instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Reject absolute paths, which would replace the home directory on join.
fn parse_relative_path(value: &str) -> std::result::Result<PathBuf, String> {
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(format!(
            "'{}' must be relative to the home directory",
            value
        ));
    }
    Ok(path.to_path_buf())
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let home = args
        .home
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or(Error::HomeNotSet)?;

    let config = GeneratorConfig::new(args.manifest, home).with_output_relative_path(args.output);

    if args.dry_run {
        let rendered = generator::render(&config)?;
        print!("{}", rendered.content);
        println!("Configured {} plugins", rendered.summary.scanned);
        return Ok(());
    }

    let summary = generator::generate(&config)?;
    println!("Generated sheldon config: {}", summary.output_path.display());
    println!("Configured {} plugins", summary.scanned);

    Ok(())
}
