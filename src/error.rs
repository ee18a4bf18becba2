use std::path::PathBuf;
use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

use crate::classifier::RelativePath;

#[derive(Error, Debug, Diagnostic)]
pub enum TfcSpecError {
    #[error("Failed to scan '{root}' for hidden directories")]
    #[diagnostic(
        code(tfc_spec::scan_error),
        help("Check that the directory exists and every subdirectory is readable")
    )]
    Scan {
        root: PathBuf,
        /// Paths collected before the walk was aborted
        partial: Vec<RelativePath>,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to run '{program}' in '{dir}'")]
    #[diagnostic(
        code(tfc_spec::command_spawn_error),
        help("Make sure the workspace tool is installed and on your PATH, or pass --tool")
    )]
    CommandSpawn {
        program: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed in '{dir}' ({status}): {stderr}")]
    #[diagnostic(
        code(tfc_spec::command_failed),
        help("Run the workspace tool by hand in that directory to see what is wrong")
    )]
    CommandFailed {
        program: String,
        dir: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("'{program}' produced output that is not valid UTF-8")]
    #[diagnostic(code(tfc_spec::command_output_error))]
    CommandOutput {
        program: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Workspace directory '{path}' does not exist")]
    #[diagnostic(
        code(tfc_spec::workspace_directory_error),
        help("The directory may have been removed while the scan was running")
    )]
    WorkspaceDirectory { path: PathBuf },

    #[error("Found workspace-tool marker '{marker}' before any version-control root")]
    #[diagnostic(
        code(tfc_spec::missing_version_control_root),
        help("Run tfc-spec from inside a git repository")
    )]
    MissingVersionControlRoot { marker: RelativePath },

    #[error("Found a second version-control root '{other}' (project is '{first}')")]
    #[diagnostic(
        code(tfc_spec::multiple_version_control_roots),
        help("Only one git repository per scan is supported; drop --error-on-multiple-roots to keep the first")
    )]
    MultipleVersionControlRoots { first: String, other: String },

    #[error("Failed to write spec to '{path}'")]
    #[diagnostic(
        code(tfc_spec::write_error),
        help("Check file permissions and disk space")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML serialization error")]
    #[diagnostic(
        code(tfc_spec::yaml_error),
        help("This is likely an internal error - please report it")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(tfc_spec::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(tfc_spec::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
