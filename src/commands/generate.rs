//! Generate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GenerateConfig;
use crate::constants::output::DEFAULT_FILE_NAME;
use crate::error::TfcSpecError;

impl FromCommand for GenerateConfig {
    fn from_command(command: Commands) -> Result<Self, TfcSpecError> {
        match command {
            Commands::Generate(args) => {
                let root = args.common.get_root();
                let output = if args.stdout {
                    None
                } else {
                    Some(args.output.unwrap_or_else(|| root.join(DEFAULT_FILE_NAME)))
                };

                GenerateConfig::builder()
                    .with_root(root)
                    .with_output(output)
                    .with_format(args.format.format)
                    .with_tool(args.tool)
                    .with_error_on_multiple_roots(args.error_on_multiple_roots)
                    .build()
            }
            _ => Err(TfcSpecError::ConfigurationError {
                message: "Invalid command type for GenerateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GenerateConfig);

/// Execute the generate command for writing the project spec
pub fn execute_generate_command(command: Commands) -> Result<()> {
    let config = GenerateConfig::from_command(command)
        .wrap_err("Failed to parse generate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::generate::GenerateExecutor;
    GenerateExecutor::execute(config)
}
