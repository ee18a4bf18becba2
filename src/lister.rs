//! Listing workspaces through the external workspace tool
//!
//! The tool is always run with an explicit working directory; the process
//! working directory is never changed.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::constants::markers::ACTIVE_WORKSPACE;
use crate::constants::tool::{DEFAULT_PROGRAM, LIST_ARGS};
use crate::error::TfcSpecError;

/// Source of workspace names for a directory
pub trait WorkspaceLister {
    /// List the workspaces visible from `dir`
    fn list_workspaces(&self, dir: &Path) -> Result<Vec<String>, TfcSpecError>;
}

impl<F> WorkspaceLister for F
where
    F: Fn(&Path) -> Result<Vec<String>, TfcSpecError>,
{
    fn list_workspaces(&self, dir: &Path) -> Result<Vec<String>, TfcSpecError> {
        self(dir)
    }
}

/// Runs `<program> workspace list` and parses its standard output
#[derive(Debug, Clone)]
pub struct TerraformCli {
    program: String,
    args: Vec<String>,
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl TerraformCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: LIST_ARGS.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Use a custom argument list instead of `workspace list`
    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl WorkspaceLister for TerraformCli {
    fn list_workspaces(&self, dir: &Path) -> Result<Vec<String>, TfcSpecError> {
        info!(program = %self.program, dir = %dir.display(), "listing workspaces");

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                debug!(program = %self.program, error = %source, "failed to run workspace tool");
                TfcSpecError::CommandSpawn {
                    program: self.program.clone(),
                    dir: dir.to_path_buf(),
                    source,
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(program = %self.program, status = %output.status, %stderr, "workspace tool failed");
            return Err(TfcSpecError::CommandFailed {
                program: self.program.clone(),
                dir: dir.to_path_buf(),
                status: output.status,
                stderr,
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|source| TfcSpecError::CommandOutput {
                program: self.program.clone(),
                source,
            })?;

        let workspaces = parse_workspace_list(&stdout);
        debug!(?workspaces, "parsed workspace list");
        Ok(workspaces)
    }
}

/// Parse `workspace list` output into workspace names.
///
/// The active-workspace marker and all whitespace other than line breaks are
/// removed before splitting; empty lines are dropped.
pub fn parse_workspace_list(output: &str) -> Vec<String> {
    let cleaned: String = output
        .chars()
        .filter(|&c| c != ACTIVE_WORKSPACE && (c == '\n' || !c.is_whitespace()))
        .collect();

    cleaned
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_workspace_list_strips_active_marker() {
        let output = "* default\n  prod\n  staging\n\n";
        assert_eq!(
            parse_workspace_list(output),
            vec!["default", "prod", "staging"]
        );
    }

    #[test]
    fn test_parse_workspace_list_handles_crlf_and_tabs() {
        let output = "  default\r\n*\tprod\r\n";
        assert_eq!(parse_workspace_list(output), vec!["default", "prod"]);
    }

    #[test]
    fn test_parse_workspace_list_empty_output() {
        assert!(parse_workspace_list("").is_empty());
        assert!(parse_workspace_list("\n \n").is_empty());
    }

    #[test]
    fn test_default_invocation() {
        let cli = TerraformCli::default();
        assert_eq!(cli.program(), "terraform");
        assert_eq!(cli.args, vec!["workspace", "list"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_workspaces_runs_in_given_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("module-a")).unwrap();

        let cli = TerraformCli::with_args(
            "sh",
            ["-c", "printf '* default\\n  %s\\n' \"$(basename \"$(pwd -P)\")\""],
        );
        let workspaces = cli
            .list_workspaces(&temp.path().join("module-a"))
            .unwrap();

        assert_eq!(workspaces, vec!["default", "module-a"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_workspaces_non_zero_exit() {
        let temp = tempfile::TempDir::new().unwrap();
        let cli = TerraformCli::with_args("sh", ["-c", "echo 'not initialized' >&2; exit 3"]);

        match cli.list_workspaces(temp.path()).unwrap_err() {
            TfcSpecError::CommandFailed { stderr, status, .. } => {
                assert_eq!(stderr, "not initialized");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_list_workspaces_missing_program() {
        let temp = tempfile::TempDir::new().unwrap();
        let cli = TerraformCli::new("tfc-spec-no-such-program");

        match cli.list_workspaces(temp.path()).unwrap_err() {
            TfcSpecError::CommandSpawn { program, .. } => {
                assert_eq!(program, "tfc-spec-no-such-program");
            }
            other => panic!("Expected CommandSpawn, got {other:?}"),
        }
    }
}
