use crate::metadata::{MetadataLoad, load_metadata_object};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use protoyard_core::{INDEX_FILE, discover_project_dirs};
use protoyard_types::{ProjectRecord, ValidationIssue, validate_metadata};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Why a project directory was left out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    MissingMetadata,
    Unreadable(String),
    Malformed(String),
    Invalid(Vec<ValidationIssue>),
}

impl RejectReason {
    /// One line per violated rule, for operator output.
    pub fn messages(&self) -> Vec<String> {
        match self {
            RejectReason::MissingMetadata => vec!["No metadata.json found".to_string()],
            RejectReason::Unreadable(msg) => vec![format!("Error reading metadata.json - {}", msg)],
            RejectReason::Malformed(msg) => vec![format!("Error parsing metadata.json - {}", msg)],
            RejectReason::Invalid(issues) => issues.iter().map(|i| i.to_string()).collect(),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedProject {
    pub dir_name: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone)]
pub enum AggregateProgress {
    RootCreated {
        path: PathBuf,
    },
    DirectoriesFound {
        count: usize,
    },
    ProjectAccepted {
        dir_name: String,
    },
    ProjectRejected(RejectedProject),
    Completed {
        accepted: usize,
        rejected: usize,
        output: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct AggregateReport {
    /// Index contents, most recently modified first
    pub accepted: Vec<ProjectRecord>,
    pub rejected: Vec<RejectedProject>,
    pub output: PathBuf,
}

impl AggregateReport {
    pub fn error_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Rebuilds the aggregated index from every project directory.
///
/// The index is always regenerated from scratch; the previous artifact is
/// never read.
pub struct Aggregator {
    projects_root: PathBuf,
}

impl Aggregator {
    pub fn new(projects_root: impl Into<PathBuf>) -> Self {
        Self {
            projects_root: projects_root.into(),
        }
    }

    pub fn projects_root(&self) -> &Path {
        &self.projects_root
    }

    pub fn index_path(&self) -> PathBuf {
        self.projects_root.join(INDEX_FILE)
    }

    pub fn run<F>(&self, mut on_progress: F) -> Result<AggregateReport>
    where
        F: FnMut(AggregateProgress),
    {
        if self.ensure_root()? {
            on_progress(AggregateProgress::RootCreated {
                path: self.projects_root.clone(),
            });
        }

        let dirs = discover_project_dirs(&self.projects_root).map_err(|err| match err {
            protoyard_core::Error::Walk(walk) => Error::RootUnavailable {
                path: self.projects_root.clone(),
                source: walk.into(),
            },
            other => Error::Core(other),
        })?;

        on_progress(AggregateProgress::DirectoriesFound { count: dirs.len() });

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for (dir_name, dir) in dirs {
            match load_record(&dir) {
                Ok(record) => {
                    on_progress(AggregateProgress::ProjectAccepted {
                        dir_name: dir_name.clone(),
                    });
                    accepted.push(record);
                }
                Err(reason) => {
                    tracing::warn!(project = %dir_name, %reason, "project excluded from index");
                    let rejection = RejectedProject { dir_name, reason };
                    on_progress(AggregateProgress::ProjectRejected(rejection.clone()));
                    rejected.push(rejection);
                }
            }
        }

        // Stable: ties keep directory-name order.
        accepted.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));

        let output = self.index_path();
        write_index(&output, &accepted)?;

        tracing::info!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            output = %output.display(),
            "aggregated project metadata"
        );

        on_progress(AggregateProgress::Completed {
            accepted: accepted.len(),
            rejected: rejected.len(),
            output: output.clone(),
        });

        Ok(AggregateReport {
            accepted,
            rejected,
            output,
        })
    }

    /// Returns true when the root had to be created.
    fn ensure_root(&self) -> Result<bool> {
        let root = &self.projects_root;
        if root.is_dir() {
            return Ok(false);
        }

        std::fs::create_dir_all(root).map_err(|source| Error::RootUnavailable {
            path: root.clone(),
            source,
        })?;
        Ok(true)
    }
}

fn load_record(dir: &Path) -> std::result::Result<ProjectRecord, RejectReason> {
    let object = match load_metadata_object(dir) {
        MetadataLoad::Loaded(object) => object,
        MetadataLoad::Missing => return Err(RejectReason::MissingMetadata),
        MetadataLoad::Unreadable(msg) => return Err(RejectReason::Unreadable(msg)),
        MetadataLoad::Malformed(msg) => return Err(RejectReason::Malformed(msg)),
    };

    let metadata = validate_metadata(&object).map_err(RejectReason::Invalid)?;
    Ok(ProjectRecord::new(metadata, directory_modified(dir)))
}

/// Directory mtime; falls back to now when the directory cannot be stat'ed.
pub fn directory_modified(dir: &Path) -> DateTime<Utc> {
    std::fs::metadata(dir)
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

/// Serialize the index and atomically replace the previous artifact.
fn write_index(path: &Path, records: &[ProjectRecord]) -> Result<()> {
    let write_err = |source: std::io::Error| Error::WriteIndex {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(records)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_messages() {
        let reason = RejectReason::Invalid(vec![
            ValidationIssue::MissingField("creator"),
            ValidationIssue::InvalidStatus("done".to_string()),
        ]);
        assert_eq!(
            reason.messages(),
            vec![
                "Missing required field: creator".to_string(),
                "Invalid status: done. Must be one of: in-progress, review, ready, archived"
                    .to_string(),
            ]
        );
        assert_eq!(
            RejectReason::MissingMetadata.to_string(),
            "No metadata.json found"
        );
    }

    #[test]
    fn test_missing_directory_mtime_falls_back_to_now() {
        let before = Utc::now();
        let ts = directory_modified(Path::new("/definitely/not/here"));
        assert!(ts >= before);
    }
}
