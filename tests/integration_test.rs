//! Integration tests for tfc-spec using the library interface

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tfc_spec::core::{Category, ProjectRecord, Workspace};
use tfc_spec::error::TfcSpecError;
use tfc_spec::lister::WorkspaceLister;
use tfc_spec::project_map::ProjectMapBuilder;
use tfc_spec::reports::{SpecRenderer, YamlSpecRenderer, write_spec};
use tfc_spec::scanner::HiddenDirectoryScanner;
use tfc_spec::spec_builder::to_project_record;

/// Lister that answers from a fixed table and records every directory it
/// was asked about
struct RecordingLister {
    answers: Vec<(PathBuf, Vec<&'static str>)>,
    calls: RefCell<Vec<PathBuf>>,
}

impl RecordingLister {
    fn new(answers: Vec<(PathBuf, Vec<&'static str>)>) -> Self {
        Self {
            answers,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl WorkspaceLister for RecordingLister {
    fn list_workspaces(&self, dir: &Path) -> Result<Vec<String>, TfcSpecError> {
        self.calls.borrow_mut().push(dir.to_path_buf());
        let names: Vec<String> = self
            .answers
            .iter()
            .find(|(answer_dir, _)| answer_dir == dir)
            .map(|(_, names)| names.iter().map(|n| n.to_string()).collect())
            .unwrap_or_default();
        Ok(names)
    }
}

/// Create a repository named `name` inside a fresh temp dir
fn create_repo(name: &str, dirs: &[&str]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(name);
    fs::create_dir_all(&root).unwrap();
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    (temp, root)
}

fn generate<L: WorkspaceLister>(root: &Path, lister: &L) -> Result<ProjectRecord, TfcSpecError> {
    let paths = HiddenDirectoryScanner::new(root).scan(None)?;
    let map = ProjectMapBuilder::new(root).build(&paths, lister, None)?;
    Ok(to_project_record(&map))
}

#[test]
fn test_sibling_git_and_terraform_at_root() {
    let (_temp, root) = create_repo("platform", &[".git/objects", ".terraform/modules"]);
    let lister = RecordingLister::new(vec![(root.clone(), vec!["default", "prod"])]);

    let record = generate(&root, &lister).unwrap();

    assert_eq!(
        record,
        ProjectRecord {
            project: "platform".to_string(),
            workspaces: vec![
                Workspace::from("platform_default"),
                Workspace::from("platform_prod"),
            ],
        }
    );
    assert_eq!(lister.calls(), vec![root]);
}

#[test]
fn test_nested_terraform_root() {
    let (_temp, root) = create_repo("platform", &[".git", "module-a/.terraform"]);
    let lister = RecordingLister::new(vec![(root.join("module-a"), vec!["default"])]);

    let record = generate(&root, &lister).unwrap();

    assert_eq!(record.project, "platform");
    assert_eq!(
        record.workspaces,
        vec![Workspace::from("platform_module-a_default")]
    );
    assert_eq!(lister.calls(), vec![root.join("module-a")]);
}

#[test]
fn test_mixed_depths_keep_traversal_order() {
    let (_temp, root) = create_repo(
        "platform",
        &[
            ".git",
            ".terraform",
            "envs/prod/.terraform",
            "envs/staging/.terraform",
            "modules/network",
        ],
    );
    let lister = RecordingLister::new(vec![
        (root.clone(), vec!["default"]),
        (root.join("envs/prod"), vec!["default", "blue"]),
        (root.join("envs/staging"), vec!["default"]),
    ]);

    let record = generate(&root, &lister).unwrap();

    let names: Vec<&str> = record.workspaces.iter().map(Workspace::as_str).collect();
    assert_eq!(
        names,
        vec![
            "platform_default",
            "platform_envs_prod_default",
            "platform_envs_prod_blue",
            "platform_envs_staging_default",
        ]
    );
}

#[test]
fn test_repeated_runs_are_stable() {
    let (_temp, root) = create_repo("platform", &[".git", "b/.terraform", "a/.terraform"]);
    let lister = RecordingLister::new(vec![
        (root.join("a"), vec!["default"]),
        (root.join("b"), vec!["default"]),
    ]);

    let first = generate(&root, &lister).unwrap();
    let second = generate(&root, &lister).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.workspaces[0], Workspace::from("platform_a_default"));
}

#[test]
fn test_no_hidden_directories() {
    let (_temp, root) = create_repo("plain", &["src", "docs"]);
    let lister = RecordingLister::new(Vec::new());

    let record = generate(&root, &lister).unwrap();
    let yaml = YamlSpecRenderer::new().render(&record).unwrap();

    assert_eq!(record, ProjectRecord::default());
    assert!(predicate::str::contains("Workspaces: []").eval(&yaml));
    assert!(lister.calls().is_empty());
}

#[test]
fn test_git_only_repository() {
    let (_temp, root) = create_repo("service", &[".git", ".github/workflows"]);
    let lister = RecordingLister::new(Vec::new());

    let paths = HiddenDirectoryScanner::new(&root).scan(None).unwrap();
    let map = ProjectMapBuilder::new(&root)
        .build(&paths, &lister, None)
        .unwrap();

    // `.github` contains the version-control marker name
    assert_eq!(map.values(Category::Git).len(), 2);
    assert_eq!(to_project_record(&map).project, "service");
    assert!(to_project_record(&map).workspaces.is_empty());
}

#[test]
fn test_written_spec_round_trips() {
    let (_temp, root) = create_repo("platform", &[".git", ".terraform", "module-a/.terraform"]);
    let lister = RecordingLister::new(vec![
        (root.clone(), vec!["default", "prod"]),
        (root.join("module-a"), vec!["default"]),
    ]);

    let record = generate(&root, &lister).unwrap();
    let yaml = YamlSpecRenderer::new().render(&record).unwrap();
    let spec_path = root.join("spec.yaml");
    write_spec(&spec_path, &yaml).unwrap();

    let contents = fs::read_to_string(&spec_path).unwrap();
    assert!(predicate::str::starts_with("Project: platform\n").eval(&contents));

    let parsed: ProjectRecord = serde_yaml::from_str(&contents).unwrap();
    assert_eq!(parsed, record);
    assert_eq!(parsed.workspaces.len(), 3);
}

#[test]
fn test_lister_error_aborts_without_output() {
    let (_temp, root) = create_repo("platform", &[".git", ".terraform"]);
    let lister = |dir: &Path| -> Result<Vec<String>, TfcSpecError> {
        Err(TfcSpecError::WorkspaceDirectory {
            path: dir.to_path_buf(),
        })
    };

    let result = generate(&root, &lister);

    assert!(result.is_err());
    assert!(!root.join("spec.yaml").exists());
}

#[cfg(unix)]
#[test]
fn test_terraform_cli_with_fake_program() {
    use tfc_spec::lister::TerraformCli;

    let (_temp, root) = create_repo("platform", &[".git", ".terraform", "module-a/.terraform"]);
    // Reports the directory it runs in as the second workspace
    let lister = TerraformCli::with_args(
        "sh",
        ["-c", "printf '* default\\n  %s\\n' \"$(basename \"$(pwd -P)\")\""],
    );

    let record = generate(&root, &lister).unwrap();

    let names: Vec<&str> = record.workspaces.iter().map(Workspace::as_str).collect();
    assert_eq!(
        names,
        vec![
            "platform_default",
            "platform_platform",
            "platform_module-a_default",
            "platform_module-a_module-a",
        ]
    );
}
