use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use protoyard_catalog::{FsContentSource, render_project};

pub fn handle(ctx: &ExecutionContext, id: &str, format: OutputFormat) -> Result<()> {
    let projects_root = ctx.projects_root()?;
    let page = render_project(&projects_root, id, &FsContentSource);

    let Some(view_model) = presenters::present_project_detail(page) else {
        anyhow::bail!("Project not found: {}", id);
    };

    ConsoleRenderer::new(format).render(view_model)
}
