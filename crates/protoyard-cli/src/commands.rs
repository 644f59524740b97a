use super::args::{Cli, Commands, ProjectCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::OutputFormat;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, cli.log_json);

    let ctx = ExecutionContext::new(cli.root.as_deref())?;
    let format = OutputFormat::from(cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx, format);
    };

    match command {
        Commands::Aggregate { watch } => handlers::aggregate::handle(&ctx, watch, format),

        Commands::Project { command } => match command {
            ProjectCommand::List => handlers::project_list::handle(&ctx, format),
            ProjectCommand::Ids => handlers::project_ids::handle(&ctx, format),
            ProjectCommand::Show { id } => handlers::project_show::handle(&ctx, &id, format),
            ProjectCommand::New {
                name,
                title,
                description,
                creator,
                template,
                status,
            } => handlers::project_new::handle(
                &ctx,
                handlers::project_new::NewProjectArgs {
                    name,
                    title,
                    description,
                    creator,
                    template,
                    status,
                },
                format,
            ),
        },

        Commands::Serve { bind } => handlers::serve::handle(&ctx, bind, format),
    }
}
