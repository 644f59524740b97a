use protoyard_catalog::{ContentSource, FsContentSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub projects_root: Arc<PathBuf>,
    pub content: Arc<dyn ContentSource>,
}

impl AppState {
    /// State serving `page.html` content modules from disk.
    pub fn new(projects_root: impl Into<PathBuf>) -> Self {
        Self::with_content(projects_root, Arc::new(FsContentSource))
    }

    pub fn with_content(projects_root: impl Into<PathBuf>, content: Arc<dyn ContentSource>) -> Self {
        Self {
            projects_root: Arc::new(projects_root.into()),
            content,
        }
    }
}
