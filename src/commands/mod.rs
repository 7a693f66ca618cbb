//! # CLI Command Implementations
//!
//! Each command lives in its own file and provides:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `sheldon_plugins` library and prints the result.

pub mod completions;
pub mod generate;
