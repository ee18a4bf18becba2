use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "tfc-spec",
    about = "Inventory Terraform workspaces beneath a git repository",
    long_about = "tfc-spec scans the current directory for git and Terraform marker \
                  directories, lists the workspaces of every Terraform root it finds and \
                  writes a spec.yaml describing the project and its workspaces. Running it \
                  without a subcommand is the same as running `tfc-spec generate`.",
    args_conflicts_with_subcommands = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, env = "TFC_SPEC_QUIET")]
    pub quiet: bool,
}

impl Cli {
    /// The command to run, falling back to `generate` with the top-level
    /// arguments
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Generate(self.generate))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the project spec for the scanned tree
    ///
    /// Finds the git root and every Terraform root beneath the directory,
    /// lists the workspaces of each Terraform root and writes the result as
    /// a spec document.
    #[command(
        long_about = "Scan the directory for hidden marker directories, name the project after \
                      the first git root found, list the workspaces of every Terraform root \
                      with `terraform workspace list` and write the project spec. Nested \
                      Terraform roots produce identifiers prefixed with the project name and \
                      their relative path."
    )]
    Generate(GenerateArgs),

    /// List the hidden directories found beneath the directory
    ///
    /// Shows each hidden directory with the marker kind it was classified as
    /// and the directory that owns it. Does not run the workspace tool and
    /// does not write any file.
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Output file (defaults to spec.yaml in the scanned directory)
    #[arg(short, long, env = "TFC_SPEC_OUTPUT", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the spec to stdout instead of writing a file
    #[arg(long, env = "TFC_SPEC_STDOUT")]
    pub stdout: bool,

    /// Program used to list workspaces
    #[arg(
        long,
        value_name = "PROGRAM",
        default_value = crate::constants::tool::DEFAULT_PROGRAM,
        env = "TFC_SPEC_TOOL"
    )]
    pub tool: String,

    /// Fail when more than one git repository is found instead of keeping
    /// the first
    #[arg(long, env = "TFC_SPEC_ERROR_ON_MULTIPLE_ROOTS")]
    pub error_on_multiple_roots: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only show git and Terraform markers
    #[arg(long, env = "TFC_SPEC_MARKERS_ONLY")]
    pub markers_only: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
