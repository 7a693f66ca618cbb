//! # Diagnostic Logging
//!
//! Sets up `env_logger` for the CLI. Log records go to stderr so they never
//! mix with the summary printed on stdout.
//!
//! ## Respecting User Preferences
//!
//! Colored log output follows:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::str::FromStr;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Logging configuration resolved from CLI flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub use_color: bool,
}

impl LogConfig {
    /// Resolve the `--log-level` and `--color` flag values.
    ///
    /// An unknown level falls back to `warn`.
    pub fn from_flags(log_level: &str, color_flag: &str) -> Self {
        let level = LevelFilter::from_str(log_level).unwrap_or(LevelFilter::Warn);
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => detect_color_support(),
        };

        Self { level, use_color }
    }

    fn write_style(&self) -> WriteStyle {
        if self.use_color {
            WriteStyle::Always
        } else {
            WriteStyle::Never
        }
    }

    /// Install the global logger. Calling this more than once is a no-op.
    pub fn init(&self) {
        let _ = env_logger::Builder::new()
            .filter_level(self.level)
            .write_style(self.write_style())
            .format_timestamp(None)
            .try_init();
    }
}

/// Detect whether stderr supports colors based on environment.
fn detect_color_support() -> bool {
    // The presence of the variable (even if empty) disables colors
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }

    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }

    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }

    console::Term::stderr().features().colors_supported()
}
