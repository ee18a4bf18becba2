//! Command implementations for the tfc-spec CLI
//!
//! - generate: write the project spec (the default when no subcommand is
//!   given)
//! - scan: list the hidden directories found beneath the root

pub mod generate;
pub mod scan;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Generate(..) => generate::execute_generate_command(command),
        Commands::Scan(..) => scan::execute_scan_command(command),
    }
}
