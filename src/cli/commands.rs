//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Print the active prompt (default)
    Prompt,
    /// Print the active provider's display name
    Name,
    /// List registered prompt providers in selection order
    Providers,
}

impl Commands {
    /// Commands whose stdout is meant to be consumed by another program
    pub(crate) fn is_quiet(self) -> bool {
        matches!(self, Commands::Prompt | Commands::Name)
    }
}
