use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;

/// Shown when no command is given.
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub workspace_root: PathBuf,
    pub projects_root: PathBuf,
    pub projects_root_exists: bool,
    pub index_exists: bool,
    pub indexed_projects: usize,
}

#[derive(Debug, Serialize)]
pub struct ServeViewModel {
    pub url: String,
    pub projects_root: PathBuf,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}

impl CreateView for ServeViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ServeView;
        Box::new(ServeView::new(self))
    }
}
