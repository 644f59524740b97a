use crate::presentation::view_models::{
    CommandResultViewModel, GuidanceViewModel, ServeViewModel, StatusBadge,
};
use std::path::PathBuf;

pub fn present_guidance(
    workspace_root: PathBuf,
    projects_root: PathBuf,
    projects_root_exists: bool,
    index_exists: bool,
    indexed_projects: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        workspace_root,
        projects_root,
        projects_root_exists,
        index_exists,
        indexed_projects,
    })
}

pub fn present_serve(url: String, projects_root: PathBuf) -> CommandResultViewModel<ServeViewModel> {
    let badge = StatusBadge::info(format!("Serving gallery at {}", url));
    CommandResultViewModel::new(ServeViewModel { url, projects_root }).with_badge(badge)
}
