//! Reduction of the category map into the project record

use crate::core::{Category, CategoryMap, ProjectRecord, Workspace};

/// Build the project record: the first `git` entry names the project and
/// every `terraform` entry becomes a workspace, in bucket order.
pub fn to_project_record(map: &CategoryMap) -> ProjectRecord {
    ProjectRecord {
        project: map.first(Category::Git).unwrap_or_default().to_string(),
        workspaces: map
            .values(Category::Terraform)
            .iter()
            .map(|identifier| Workspace::new(identifier.as_str()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_project_record_from_map() {
        let mut map = CategoryMap::new();
        map.push(Category::Git, "platform");
        map.push(Category::Git, "vendor/lib");
        map.push(Category::Terraform, "platform_default");
        map.push(Category::Terraform, "platform_module-a_prod");

        let record = to_project_record(&map);

        assert_eq!(record.project, "platform");
        assert_eq!(
            record.workspaces,
            vec![
                Workspace::from("platform_default"),
                Workspace::from("platform_module-a_prod"),
            ]
        );
    }

    #[test]
    fn test_empty_map_gives_empty_record() {
        let record = to_project_record(&CategoryMap::new());
        assert_eq!(record, ProjectRecord::default());
        assert!(record.project.is_empty());
        assert!(record.workspaces.is_empty());
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let mut map = CategoryMap::new();
        map.push(Category::Git, "repo");
        map.push(Category::Terraform, "repo_default");

        assert_eq!(to_project_record(&map), to_project_record(&map));
    }
}
