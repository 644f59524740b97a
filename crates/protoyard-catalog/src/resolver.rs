use crate::Result;
use crate::metadata::{MetadataLoad, load_metadata_object};
use protoyard_core::{PAGE_FILE, discover_project_dirs, is_safe_project_id};
use protoyard_types::{ProjectMetadata, ProjectStatus, ProjectTemplate, ValidationIssue, validate_metadata};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A project's `metadata.json` exactly as stored.
///
/// The resolver does not require the record to pass validation; a page can
/// be shown for a project the aggregator would reject.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StoredMetadata(Map<String, Value>);

impl StoredMetadata {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn creator(&self) -> Option<&str> {
        self.get_str("creator")
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description").filter(|d| !d.is_empty())
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        self.get_str("status").and_then(ProjectStatus::parse)
    }

    pub fn template(&self) -> Option<ProjectTemplate> {
        self.get_str("template").and_then(ProjectTemplate::parse)
    }

    pub fn validate(&self) -> std::result::Result<ProjectMetadata, Vec<ValidationIssue>> {
        validate_metadata(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProject {
    pub id: String,
    pub dir: PathBuf,
    pub metadata: StoredMetadata,
    /// Whether a content module is present on disk
    pub has_content: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NotFound,
    Found(ResolvedProject),
}

impl Resolution {
    pub fn found(self) -> Option<ResolvedProject> {
        match self {
            Resolution::Found(project) => Some(project),
            Resolution::NotFound => None,
        }
    }
}

/// Every identifier the resolver can be asked about, sorted.
///
/// Uses the same discovery rules as the aggregator. A projects root that
/// does not exist yet has no projects.
pub fn list_known_project_ids(projects_root: &Path) -> Result<Vec<String>> {
    if !projects_root.exists() {
        return Ok(Vec::new());
    }

    Ok(discover_project_dirs(projects_root)?
        .into_iter()
        .map(|(name, _)| name)
        .collect())
}

/// Look up one project straight from its directory, bypassing the index.
pub fn resolve_project(projects_root: &Path, id: &str) -> Resolution {
    if !is_safe_project_id(id) {
        return Resolution::NotFound;
    }

    let dir = projects_root.join(id);

    let metadata = match load_metadata_object(&dir) {
        MetadataLoad::Loaded(object) => StoredMetadata::new(object),
        MetadataLoad::Missing => {
            tracing::debug!(project = id, "no metadata for project");
            return Resolution::NotFound;
        }
        MetadataLoad::Unreadable(err) | MetadataLoad::Malformed(err) => {
            tracing::warn!(project = id, error = %err, "error reading project metadata");
            return Resolution::NotFound;
        }
    };

    let has_content = dir.join(PAGE_FILE).is_file();

    Resolution::Found(ResolvedProject {
        id: id.to_string(),
        dir,
        metadata,
        has_content,
    })
}
