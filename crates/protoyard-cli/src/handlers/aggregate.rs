use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer};
use anyhow::Result;
use protoyard_catalog::{AggregateProgress, Aggregator, ProjectsWatcher};

pub fn handle(ctx: &ExecutionContext, watch: bool, format: OutputFormat) -> Result<()> {
    let projects_root = ctx.projects_root()?;
    let aggregator = Aggregator::new(&projects_root);
    let renderer = ConsoleRenderer::new(format);

    aggregate_once(&aggregator, &renderer)?;

    if !watch {
        return Ok(());
    }

    let watcher = ProjectsWatcher::new(&projects_root)?;
    tracing::info!(root = %projects_root.display(), "watching for project changes");

    while let Some(changed) = watcher.next_change() {
        renderer.render(presenters::present_change_batch(changed))?;

        // A failed pass leaves the previous index in place; keep watching.
        if let Err(err) = aggregate_once(&aggregator, &renderer) {
            tracing::error!(error = %err, "aggregation failed");
        }
    }

    Ok(())
}

fn aggregate_once(aggregator: &Aggregator, renderer: &ConsoleRenderer) -> Result<()> {
    let mut root_created = false;
    let mut directories_found = 0;

    let report = aggregator.run(|event| match event {
        AggregateProgress::RootCreated { path } => {
            tracing::info!(root = %path.display(), "created projects root");
            root_created = true;
        }
        AggregateProgress::DirectoriesFound { count } => directories_found = count,
        AggregateProgress::ProjectAccepted { dir_name } => {
            tracing::debug!(project = %dir_name, "project indexed");
        }
        AggregateProgress::ProjectRejected(_) | AggregateProgress::Completed { .. } => {}
    })?;

    let view_model = presenters::present_aggregate(
        report,
        aggregator.projects_root().to_path_buf(),
        root_created,
        directories_found,
    );
    renderer.render(view_model)
}
