//! Configuration constants for tfc-spec
//!
//! This module contains the fixed names and defaults used throughout the
//! application. The tool program and output location can be overridden
//! through command-line flags or environment variables.

use std::time::Duration;

/// Marker directory names and the categories they populate
pub mod markers {
    /// Hidden directory marking a version-control root
    pub const VERSION_CONTROL: &str = ".git";

    /// Hidden directory marking a workspace-tool root
    pub const WORKSPACE_TOOL: &str = ".terraform";

    /// Leading character of a hidden directory name
    pub const HIDDEN_PREFIX: char = '.';

    /// Character the workspace tool uses to flag the active workspace
    pub const ACTIVE_WORKSPACE: char = '*';

    /// Separator between the parts of a composite workspace identifier
    pub const IDENTIFIER_SEPARATOR: &str = "_";
}

/// External workspace-listing command
pub mod tool {
    /// Default program used to list workspaces
    pub const DEFAULT_PROGRAM: &str = "terraform";

    /// Subcommand passed to the program
    pub const LIST_ARGS: &[&str] = &["workspace", "list"];
}

/// Output configuration
pub mod output {
    /// File written beside the scanned root when no output path is given
    pub const DEFAULT_FILE_NAME: &str = "spec.yaml";

    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "yaml";
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while scanning
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}
