use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use protoyard_catalog::list_known_project_ids;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let projects_root = ctx.projects_root()?;
    let ids = list_known_project_ids(&projects_root)?;

    ConsoleRenderer::new(format).render(presenters::present_project_ids(ids))
}
