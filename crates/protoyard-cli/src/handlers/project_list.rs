use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use protoyard_catalog::read_listing;
use protoyard_core::INDEX_FILE;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let projects_root = ctx.projects_root()?;
    let records = read_listing(&projects_root).records();

    let view_model = presenters::present_project_list(projects_root.join(INDEX_FILE), records);
    ConsoleRenderer::new(format).render(view_model)
}
