use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Rebuild the aggregated project index")]
    Aggregate {
        /// Keep running and re-aggregate whenever a project changes
        #[arg(long)]
        watch: bool,
    },

    #[command(about = "Inspect and create projects")]
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    #[command(about = "Serve the project gallery over HTTP")]
    Serve {
        /// Address to listen on (default: [server] bind in protoyard.toml)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    #[command(about = "List projects from the aggregated index, newest first")]
    List,

    #[command(about = "Print every project id the gallery can serve")]
    Ids,

    #[command(about = "Show a single project, read straight from its directory")]
    Show { id: String },

    #[command(about = "Create a new project from a template")]
    New {
        /// Directory name and id (lowercase with dashes)
        #[arg(long)]
        name: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        creator: String,

        /// blank or dashboard
        #[arg(long, default_value = "blank")]
        template: String,

        /// in-progress, review, ready or archived
        #[arg(long, default_value = "in-progress")]
        status: String,
    },
}
