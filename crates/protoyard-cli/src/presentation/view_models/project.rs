use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

use super::CreateView;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectListViewModel {
    pub index: PathBuf,
    pub projects: Vec<ProjectEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ProjectEntryViewModel {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub status: String,
    pub status_label: String,
    pub template: String,
    pub created_date: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectIdsViewModel {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailViewModel {
    pub id: String,
    pub dir: PathBuf,
    pub title: Option<String>,
    pub creator: Option<String>,
    pub description: Option<String>,
    pub status_label: Option<String>,
    pub template: Option<String>,
    /// `metadata.json` exactly as stored
    pub metadata: Map<String, Value>,
    /// Rules the aggregator would reject this project for
    pub issues: Vec<String>,
    pub content: ContentViewModel,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContentViewModel {
    Rendered { source: PathBuf, bytes: usize },
    Missing,
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedViewModel {
    pub id: String,
    pub dir: PathBuf,
    pub files: Vec<String>,
    pub url_path: String,
    pub aggregated: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ProjectListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectListView;
        Box::new(ProjectListView::new(self))
    }
}

impl CreateView for ProjectIdsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectIdsView;
        Box::new(ProjectIdsView::new(self))
    }
}

impl CreateView for ProjectDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectDetailView;
        Box::new(ProjectDetailView::new(self))
    }
}

impl CreateView for ProjectCreatedViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectCreatedView;
        Box::new(ProjectCreatedView::new(self))
    }
}
