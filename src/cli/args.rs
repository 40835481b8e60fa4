//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "isac-shell")]
#[command(about = "Prompt provider registry for the isac shell", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Use this prompt provider instead of the highest-priority one
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) provider: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Only override if CLI is at default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.provider.is_none() {
            self.provider = config.provider.clone();
        }

        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Prompt)
    }

    /// JSON is implied by a jq filter
    pub(crate) fn wants_json(&self) -> bool {
        self.json || self.jq.is_some()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
