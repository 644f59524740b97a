use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use protoyard_catalog::read_listing;
use protoyard_core::INDEX_FILE;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let projects_root = ctx.projects_root()?;
    let index_exists = projects_root.join(INDEX_FILE).is_file();
    let indexed_projects = if index_exists {
        read_listing(&projects_root).len()
    } else {
        0
    };

    let view_model = presenters::present_guidance(
        ctx.workspace_root().to_path_buf(),
        projects_root.clone(),
        projects_root.is_dir(),
        index_exists,
        indexed_projects,
    );

    ConsoleRenderer::new(format).render(view_model)
}
