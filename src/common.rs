//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory to scan (defaults to current directory)
    #[arg(value_name = "PATH", env = "TFC_SPEC_PATH")]
    pub path: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "TFC_SPEC_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Get the scan root, using the current directory if none was provided.
    ///
    /// The root is canonicalised when possible so its final segment names
    /// the project even when given as `.`.
    pub fn get_root(&self) -> PathBuf {
        let root = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        root.canonicalize().unwrap_or(root)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::TfcSpecError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::TfcSpecError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::TfcSpecError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_common_args_get_root_default() {
        let args = CommonArgs { path: None };

        let root = args.get_root();
        assert!(root.is_absolute() || root == std::path::Path::new("."));
    }

    #[test]
    fn test_common_args_get_root_canonicalises() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("platform")).unwrap();

        let args = CommonArgs {
            path: Some(temp.path().join("platform/../platform")),
        };

        let root = args.get_root();
        assert_eq!(root.file_name().unwrap(), "platform");
        assert!(root.is_absolute());
    }

    #[test]
    fn test_common_args_get_root_missing_path_kept() {
        let args = CommonArgs {
            path: Some(PathBuf::from("/tmp/tfc-spec-does-not-exist")),
        };

        assert_eq!(args.get_root(), PathBuf::from("/tmp/tfc-spec-does-not-exist"));
    }
}
