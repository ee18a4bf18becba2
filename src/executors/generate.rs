//! Generate command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::GenerateConfig;
use crate::executors::CommandExecutor;
use crate::lister::TerraformCli;
use crate::progress::ProgressReporter;
use crate::project_map::ProjectMapBuilder;
use crate::reports::{renderer_for, write_spec};
use crate::scanner::HiddenDirectoryScanner;
use crate::spec_builder::to_project_record;

pub struct GenerateExecutor;

impl CommandExecutor for GenerateExecutor {
    type Config = GenerateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_stderr();

        if let Some(p) = progress.as_mut() {
            p.start_scan(&config.root);
        }

        let scanner = HiddenDirectoryScanner::new(&config.root);
        let paths = scanner
            .scan(progress.as_ref())
            .wrap_err("Failed to scan for hidden directories")?;

        if let Some(p) = progress.as_mut() {
            p.finish_scan(paths.len());
        }

        let lister = TerraformCli::new(config.tool.as_str());
        let map = ProjectMapBuilder::new(&config.root)
            .with_error_on_multiple_roots(config.error_on_multiple_roots)
            .build(&paths, &lister, progress.as_ref())
            .wrap_err("Failed to collect workspaces")?;

        let record = to_project_record(&map);

        if let Some(p) = progress.as_ref() {
            p.finish_build(record.workspaces.len());
        }

        if record.project.is_empty() {
            eprintln!(
                "{} No git repository found under {}",
                style("ℹ").blue(),
                config.root.display()
            );
        }

        let rendered = renderer_for(config.format)
            .render(&record)
            .wrap_err("Failed to render project spec")?;

        match config.output {
            Some(path) => {
                write_spec(&path, &rendered).wrap_err("Failed to write project spec")?;
                eprintln!(
                    "{} Spec written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
