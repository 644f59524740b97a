//! Filesystem-backed catalog of prototype projects.
//!
//! A projects root holds one directory per project, each with a
//! `metadata.json` and optionally a `page.html` content module.
//!
//! - [`Aggregator`] rebuilds the aggregated index (`.projects-metadata.json`)
//!   from every project directory: validate, stamp `lastUpdated` from the
//!   directory mtime, sort newest first, write atomically.
//! - [`read_listing`] serves the last-written index and never fails.
//! - [`resolve_project`] / [`render_project`] answer for a single project
//!   straight from its directory, independent of the index.
//! - [`scaffold`] creates new projects from a template.
//!
//! The index has exactly one writer, the aggregator. Concurrent aggregator
//! runs are not locked against each other; the last rename wins.

pub mod aggregate;
pub mod content;
pub mod error;
pub mod listing;
mod metadata;
pub mod render;
pub mod resolver;
pub mod scaffold;
mod templates;
pub mod watch;

pub use aggregate::{
    AggregateProgress, AggregateReport, Aggregator, RejectReason, RejectedProject,
    directory_modified,
};
pub use content::{ContentLookup, ContentSource, FsContentSource, Renderable};
pub use error::{Error, Result, ScaffoldError};
pub use listing::{Listing, read_listing};
pub use render::{ProjectPage, RenderState, render_project};
pub use resolver::{
    Resolution, ResolvedProject, StoredMetadata, list_known_project_ids, resolve_project,
};
pub use scaffold::{NewProject, create_project, create_project_on};
pub use templates::escape_html;
pub use watch::ProjectsWatcher;
