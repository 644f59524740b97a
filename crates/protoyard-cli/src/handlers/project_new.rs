use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use protoyard_catalog::{Aggregator, NewProject, create_project};
use protoyard_core::{METADATA_FILE, PAGE_FILE, README_FILE};
use protoyard_types::{ProjectStatus, ProjectTemplate};

pub struct NewProjectArgs {
    pub name: String,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub template: String,
    pub status: String,
}

pub fn handle(ctx: &ExecutionContext, args: NewProjectArgs, format: OutputFormat) -> Result<()> {
    let template: ProjectTemplate = args.template.parse()?;
    let status: ProjectStatus = args.status.parse()?;
    let projects_root = ctx.projects_root()?;

    let project = NewProject {
        name: args.name,
        title: args.title,
        description: args.description,
        creator: args.creator,
        template,
        status,
    };
    let dir = create_project(&projects_root, &project)?;

    // The project exists either way; a failed rebuild only delays the listing.
    let aggregate_error = match Aggregator::new(&projects_root).run(|_| {}) {
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(error = %err, "project created but index was not rebuilt");
            Some(err.to_string())
        }
    };

    let files = [METADATA_FILE, PAGE_FILE, README_FILE]
        .iter()
        .map(|f| f.to_string())
        .collect();

    let view_model = presenters::present_project_created(project.name, dir, files, aggregate_error);
    ConsoleRenderer::new(format).render(view_model)
}
