//! # tfc-spec - Inventory Terraform Workspaces in a Repository
//!
//! tfc-spec walks a directory tree looking for hidden marker directories:
//! `.git` names the project, and every `.terraform` marks a Terraform root
//! whose workspaces are listed with `terraform workspace list`. The result
//! is written as a small spec document:
//!
//! ```yaml
//! Project: platform
//! Workspaces:
//! - platform_default
//! - platform_module-a_default
//! ```
//!
//! ## Main Components
//!
//! - **Scanner**: finds hidden directories beneath the root
//! - **Classifier**: recognises git and Terraform markers and the directory
//!   that owns them
//! - **Project map**: groups markers and builds workspace identifiers
//! - **Reports**: renders and writes the spec
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tfc_spec::lister::TerraformCli;
//! use tfc_spec::project_map::ProjectMapBuilder;
//! use tfc_spec::reports::{SpecRenderer, YamlSpecRenderer};
//! use tfc_spec::scanner::HiddenDirectoryScanner;
//! use tfc_spec::spec_builder::to_project_record;
//!
//! # fn main() -> miette::Result<()> {
//! let root = Path::new("/path/to/your/repo");
//!
//! let paths = HiddenDirectoryScanner::new(root).scan(None)?;
//! let map = ProjectMapBuilder::new(root).build(&paths, &TerraformCli::default(), None)?;
//! let record = to_project_record(&map);
//!
//! println!("{}", YamlSpecRenderer::new().render(&record)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Listing workspaces without Terraform
//!
//! Anything implementing [`lister::WorkspaceLister`] can stand in for the
//! workspace tool, including a closure:
//!
//! ```
//! use std::path::Path;
//!
//! use tfc_spec::classifier::RelativePath;
//! use tfc_spec::error::TfcSpecError;
//! use tfc_spec::project_map::ProjectMapBuilder;
//! use tfc_spec::spec_builder::to_project_record;
//!
//! # fn main() -> Result<(), TfcSpecError> {
//! let temp = std::env::temp_dir();
//! let lister = |_: &Path| -> Result<Vec<String>, TfcSpecError> { Ok(vec!["default".into()]) };
//!
//! let paths = vec![RelativePath::from(".git"), RelativePath::from(".terraform")];
//! let builder = ProjectMapBuilder::new(&temp);
//! let record = to_project_record(&builder.build(&paths, &lister, None)?);
//!
//! assert_eq!(record.project, builder.root_name());
//! assert_eq!(record.workspaces.len(), 1);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod utils;

// Public modules
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod lister;
pub mod progress;
pub mod project_map;
pub mod reports;
pub mod scanner;
pub mod spec_builder;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    execute_command(cli.into_command())
}
