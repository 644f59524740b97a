use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::{Context, Result};
use protoyard_server::AppState;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, bind: Option<String>, format: OutputFormat) -> Result<()> {
    let projects_root = ctx.projects_root()?;
    let bind = match bind {
        Some(bind) => bind,
        None => ctx.config()?.server.bind.clone(),
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(serve(bind, projects_root, ConsoleRenderer::new(format)))
}

async fn serve(bind: String, projects_root: PathBuf, renderer: ConsoleRenderer) -> Result<()> {
    let listener = protoyard_server::bind(&bind).await?;
    let addr = listener.local_addr()?;

    renderer.render(presenters::present_serve(
        format!("http://{}", addr),
        projects_root.clone(),
    ))?;

    protoyard_server::serve(listener, AppState::new(projects_root)).await?;
    Ok(())
}
