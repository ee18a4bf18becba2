//! Scan command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ScanConfig;
use crate::error::TfcSpecError;

impl FromCommand for ScanConfig {
    fn from_command(command: Commands) -> Result<Self, TfcSpecError> {
        match command {
            Commands::Scan(args) => ScanConfig::builder()
                .with_root(args.common.get_root())
                .with_markers_only(args.markers_only)
                .build(),
            _ => Err(TfcSpecError::ConfigurationError {
                message: "Invalid command type for ScanConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ScanConfig);

/// Execute the scan command for listing hidden directories
pub fn execute_scan_command(command: Commands) -> Result<()> {
    let config = ScanConfig::from_command(command)
        .wrap_err("Failed to parse scan command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::scan::ScanExecutor;
    ScanExecutor::execute(config)
}
