use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct AggregateViewModel {
    pub projects_root: PathBuf,
    pub output: PathBuf,
    pub root_created: bool,
    pub directories_found: usize,
    pub accepted: Vec<AcceptedProjectViewModel>,
    pub rejected: Vec<RejectedProjectViewModel>,
}

#[derive(Debug, Serialize)]
pub struct AcceptedProjectViewModel {
    pub id: String,
    pub title: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct RejectedProjectViewModel {
    pub dir_name: String,
    pub errors: Vec<String>,
}

/// A burst of file changes seen while watching.
#[derive(Debug, Serialize)]
pub struct ChangeBatchViewModel {
    pub changed: Vec<String>,
}

impl CreateView for AggregateViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::aggregate::AggregateView;
        Box::new(AggregateView::new(self))
    }
}

impl CreateView for ChangeBatchViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::aggregate::ChangeBatchView;
        Box::new(ChangeBatchView::new(self))
    }
}
