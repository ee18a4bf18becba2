use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::classifier::RelativePath;
use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            current_bar: None,
        }
    }

    /// Reporter for interactive terminals only
    pub fn for_stderr() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let mut frames = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_scan(&mut self, root: &Path) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Scanning for hidden directories in {}",
            style("🔍").cyan(),
            style(root.display()).bold()
        );
        let spinner = self.create_spinner("Walking directory tree...");
        self.current_bar = Some(spinner);
    }

    pub fn found_hidden_directory(&self, path: &RelativePath) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Found: {path}"));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Found: {} ",
                style(self.next_frame()).cyan(),
                style(path).dim()
            );
        }
    }

    pub fn finish_scan(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No hidden directories found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Scan complete: found {} hidden {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("directory", count)
            );
        }
    }

    pub fn querying_workspaces(&self, owning: &str) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Listing workspaces in: {}... ",
            style(self.next_frame()).yellow(),
            style(owning).green()
        );
    }

    pub fn finish_build(&self, workspaces: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Collected {} {}",
            style("✓").green().bold(),
            style(workspaces).yellow().bold(),
            pluralize("workspace", workspaces)
        );
    }
}
