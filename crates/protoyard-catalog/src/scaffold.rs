use crate::error::ScaffoldError;
use crate::templates::{escape_html, page_template, readme_template, render};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use protoyard_core::{INDEX_FILE, METADATA_FILE, PAGE_FILE, README_FILE};
use protoyard_types::{ProjectStatus, ProjectTemplate, validate_metadata};
use regex::Regex;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

static PROJECT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Names that would collide with workspace files.
pub const RESERVED_NAMES: [&str; 3] = [INDEX_FILE, "node_modules", "shared-data"];

/// Answers collected when creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Directory name and id, lowercase-with-dashes
    pub name: String,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub template: ProjectTemplate,
    pub status: ProjectStatus,
}

/// Check a prospective project name against the naming rules and the
/// current contents of the projects root.
pub fn check_project_name(projects_root: &Path, name: &str) -> Result<(), ScaffoldError> {
    if !PROJECT_NAME.is_match(name) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(ScaffoldError::ReservedName(name.to_string()));
    }
    if projects_root.join(name).exists() {
        return Err(ScaffoldError::AlreadyExists(name.to_string()));
    }
    Ok(())
}

/// Create a project directory with metadata, starter page and README,
/// stamped with today's local date.
pub fn create_project(projects_root: &Path, project: &NewProject) -> Result<PathBuf, ScaffoldError> {
    create_project_on(projects_root, project, Local::now().date_naive())
}

pub fn create_project_on(
    projects_root: &Path,
    project: &NewProject,
    created: NaiveDate,
) -> Result<PathBuf, ScaffoldError> {
    check_project_name(projects_root, &project.name)?;

    let created_date = created.format("%Y-%m-%d").to_string();
    let metadata = metadata_object(project, &created_date);
    validate_metadata(&metadata).map_err(ScaffoldError::InvalidMetadata)?;

    let dir = projects_root.join(&project.name);
    std::fs::create_dir_all(&dir)?;

    let json = serde_json::to_string_pretty(&Value::Object(metadata))?;
    std::fs::write(dir.join(METADATA_FILE), json + "\n")?;

    let title_html = escape_html(&project.title);
    let page = render(page_template(project.template), &[("title", title_html.as_str())]);
    std::fs::write(dir.join(PAGE_FILE), page)?;

    let readme = render(
        readme_template(),
        &[
            ("title", project.title.as_str()),
            ("description", project.description.as_str()),
            ("creator", project.creator.as_str()),
            ("template", project.template.as_str()),
            ("createdDate", created_date.as_str()),
        ],
    );
    std::fs::write(dir.join(README_FILE), readme)?;

    tracing::info!(project = %project.name, dir = %dir.display(), "created project");
    Ok(dir)
}

fn metadata_object(project: &NewProject, created_date: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("id".into(), Value::String(project.name.clone()));
    object.insert("title".into(), Value::String(project.title.clone()));
    object.insert("description".into(), Value::String(project.description.clone()));
    object.insert("creator".into(), Value::String(project.creator.clone()));
    object.insert("createdDate".into(), Value::String(created_date.to_string()));
    object.insert("status".into(), Value::String(project.status.as_str().into()));
    object.insert("template".into(), Value::String(project.template.as_str().into()));
    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_name_rules() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        assert!(check_project_name(root, "my-project-2").is_ok());
        assert!(matches!(
            check_project_name(root, "My Project"),
            Err(ScaffoldError::InvalidName(_))
        ));
        assert!(matches!(
            check_project_name(root, "node_modules"),
            Err(ScaffoldError::InvalidName(_))
        ));
        assert!(matches!(
            check_project_name(root, "shared-data"),
            Err(ScaffoldError::ReservedName(_))
        ));
        assert!(matches!(
            check_project_name(root, ""),
            Err(ScaffoldError::InvalidName(_))
        ));
    }

    #[test]
    fn test_existing_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("taken")).unwrap();

        let err = check_project_name(temp_dir.path(), "taken").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Project \"taken\" already exists. Please choose a different name."
        );
    }
}
