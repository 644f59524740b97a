use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, ContentViewModel, Guidance, ProjectCreatedViewModel,
    ProjectDetailViewModel, ProjectEntryViewModel, ProjectIdsViewModel, ProjectListViewModel,
    StatusBadge,
};
use protoyard_catalog::ProjectPage;
use protoyard_core::PAGE_FILE;
use protoyard_types::{ProjectRecord, format_timestamp};
use std::path::PathBuf;

pub fn present_project_list(
    index: PathBuf,
    records: Vec<ProjectRecord>,
) -> CommandResultViewModel<ProjectListViewModel> {
    let projects: Vec<ProjectEntryViewModel> = records
        .into_iter()
        .map(|record| {
            let metadata = record.metadata;
            ProjectEntryViewModel {
                id: metadata.id,
                title: metadata.title,
                creator: metadata.creator,
                status: metadata.status.as_str().to_string(),
                status_label: metadata.status.label().to_string(),
                template: metadata.template.as_str().to_string(),
                created_date: metadata.created_date,
                last_updated: format_timestamp(&record.last_updated),
            }
        })
        .collect();

    let count = projects.len();
    let mut result = CommandResultViewModel::new(ProjectListViewModel { index, projects });

    if count == 0 {
        result = result
            .with_badge(StatusBadge::info("No projects in the index"))
            .with_suggestion(
                Guidance::new("Rebuild the index from the projects directory")
                    .with_command(cmd::AGGREGATE),
            )
            .with_suggestion(Guidance::new("Create a project").with_command(cmd::PROJECT_NEW));
    } else {
        result = result.with_badge(StatusBadge::success(format!("{} project(s)", count)));
    }

    result
}

pub fn present_project_ids(ids: Vec<String>) -> CommandResultViewModel<ProjectIdsViewModel> {
    CommandResultViewModel::new(ProjectIdsViewModel { ids })
}

/// `None` for a page that did not resolve.
pub fn present_project_detail(
    page: ProjectPage,
) -> Option<CommandResultViewModel<ProjectDetailViewModel>> {
    let (project, content) = match page {
        ProjectPage::NotFound => return None,
        ProjectPage::MetadataOnly {
            project,
            degraded: None,
        } => (project, ContentViewModel::Missing),
        ProjectPage::MetadataOnly {
            project,
            degraded: Some(error),
        } => (project, ContentViewModel::Failed { error }),
        ProjectPage::Rendered { project, content } => (
            project,
            ContentViewModel::Rendered {
                bytes: content.html.len(),
                source: content.source,
            },
        ),
    };

    let metadata = &project.metadata;
    let issues: Vec<String> = match metadata.validate() {
        Ok(_) => Vec::new(),
        Err(issues) => issues.iter().map(|i| i.to_string()).collect(),
    };

    let detail = ProjectDetailViewModel {
        id: project.id.clone(),
        dir: project.dir.clone(),
        title: metadata.title().map(String::from),
        creator: metadata.creator().map(String::from),
        description: metadata.description().map(String::from),
        status_label: metadata
            .status()
            .map(|s| s.label().to_string())
            .or_else(|| metadata.get_str("status").map(String::from)),
        template: metadata.get_str("template").map(String::from),
        metadata: metadata.fields().clone(),
        issues,
        content,
    };

    let invalid = !detail.issues.is_empty();
    let page_path = detail.dir.join(PAGE_FILE);
    let content_missing = matches!(detail.content, ContentViewModel::Missing);
    let content_failed = matches!(detail.content, ContentViewModel::Failed { .. });

    let mut result = CommandResultViewModel::new(detail);

    if invalid {
        result = result.with_badge(StatusBadge::warning(
            "Metadata is invalid; the gallery listing will skip this project",
        ));
    } else if content_failed {
        result = result.with_badge(StatusBadge::warning("Content failed to load"));
    }
    if content_missing {
        result = result.with_suggestion(Guidance::new(format!(
            "Create {} to build the prototype",
            page_path.display()
        )));
    }

    Some(result)
}

pub fn present_project_created(
    id: String,
    dir: PathBuf,
    files: Vec<String>,
    aggregate_error: Option<String>,
) -> CommandResultViewModel<ProjectCreatedViewModel> {
    let aggregated = aggregate_error.is_none();
    let content = ProjectCreatedViewModel {
        url_path: format!("/projects/{}", id),
        id: id.clone(),
        dir: dir.clone(),
        files,
        aggregated,
    };

    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Created project {}", id)));

    if let Some(error) = aggregate_error {
        result = result.with_suggestion(
            Guidance::new(format!("Index was not rebuilt ({})", error))
                .with_command(cmd::AGGREGATE),
        );
    }

    result
        .with_suggestion(Guidance::new(format!(
            "Edit {} to build the prototype",
            dir.join(PAGE_FILE).display()
        )))
        .with_suggestion(Guidance::new("Inspect it").with_command(fmt::project_show(&id)))
        .with_suggestion(Guidance::new("Preview it in the gallery").with_command(cmd::SERVE))
}
