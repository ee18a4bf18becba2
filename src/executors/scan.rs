//! Scan command executor

use console::style;
use miette::{Result, WrapErr};

use crate::classifier::{RelativePath, root_name};
use crate::config::ScanConfig;
use crate::constants::markers::{VERSION_CONTROL, WORKSPACE_TOOL};
use crate::core::MarkerKind;
use crate::executors::CommandExecutor;
use crate::scanner::HiddenDirectoryScanner;

pub struct ScanExecutor;

impl CommandExecutor for ScanExecutor {
    type Config = ScanConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Scanning for hidden directories in {}",
            style("🔍").cyan(),
            style(config.root.display()).bold()
        );

        let paths = HiddenDirectoryScanner::new(&config.root)
            .scan(None)
            .wrap_err("Failed to scan for hidden directories")?;

        let root = root_name(&config.root);
        let mut shown = 0;
        for path in &paths {
            if let Some(line) = describe(path, &root, config.markers_only) {
                println!("{line}");
                shown += 1;
            }
        }

        if shown == 0 {
            eprintln!("{} No hidden directories found", style("ℹ").blue());
        }

        Ok(())
    }
}

/// One tab-separated line per path: path, marker kind, owning directory
fn describe(path: &RelativePath, root: &str, markers_only: bool) -> Option<String> {
    let owning = match path.kind() {
        MarkerKind::VersionControl => path.owning_directory(VERSION_CONTROL, root),
        MarkerKind::WorkspaceTool => path.owning_directory(WORKSPACE_TOOL, root),
        MarkerKind::None if markers_only => return None,
        MarkerKind::None => "-".to_string(),
    };

    Some(format!("{path}\t{}\t{owning}", path.kind()))
}
