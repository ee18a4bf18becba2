//! # Configuration Module
//!
//! This module provides configuration structures for the tfc-spec commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **GenerateConfig**: Configuration for the `generate` command that writes
//!   the project spec
//! - **ScanConfig**: Configuration for the `scan` command that lists hidden
//!   directories
//!
//! ## Example
//!
//! ```
//! use tfc_spec::cli::OutputFormat;
//! use tfc_spec::common::ConfigBuilder;
//! use tfc_spec::config::GenerateConfig;
//!
//! let config = GenerateConfig::builder()
//!     .with_root("/srv/platform".into())
//!     .with_output(Some("/srv/platform/spec.yaml".into()))
//!     .with_format(OutputFormat::Yaml)
//!     .with_tool("terraform".to_string())
//!     .with_error_on_multiple_roots(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tool, "terraform");
//! ```

pub mod generate;
pub mod scan;

pub use generate::GenerateConfig;
pub use scan::ScanConfig;
