// NOTE: protoyard layout
//
// A workspace root holds an optional `protoyard.toml` and a projects root
// (default `projects/`). Each visible subdirectory of the projects root is
// one prototype: `metadata.json` (authored), `page.html` (the prototype),
// `README.md`.
//
// `aggregate` is the only writer of `.projects-metadata.json`; the gallery
// and `project list` only ever read it. Single-project views (`project show`,
// `/projects/:id`) go to the project directory directly, so a project is
// viewable before it has ever been aggregated.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ProjectCommand};
pub use commands::run;
