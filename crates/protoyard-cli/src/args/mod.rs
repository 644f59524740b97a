// NOTE: Command Organization
//
// Workspace-wide operations (`aggregate`, `serve`) are top-level; anything
// that addresses a single prototype lives under `project`.

mod commands;
mod enums;
pub mod hints;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "protoyard")]
#[command(about = "Catalog, scaffold and serve prototype projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace root (default: $PROTOYARD_ROOT, then the current directory)
    #[arg(long, global = true)]
    pub root: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
