use crate::content::{ContentLookup, ContentSource, Renderable};
use crate::resolver::{Resolution, ResolvedProject, resolve_project};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

/// Render path of a single project request.
///
/// ```text
/// Unresolved -> NotFound
/// Unresolved -> MetadataOnly
/// Unresolved -> Loading -> Rendered
///                       -> MetadataOnly (degraded)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Unresolved,
    NotFound,
    MetadataOnly,
    Loading,
    Rendered,
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RenderState::NotFound | RenderState::MetadataOnly | RenderState::Rendered
        )
    }

    fn can_advance_to(&self, next: RenderState) -> bool {
        matches!(
            (self, next),
            (RenderState::Unresolved, RenderState::NotFound)
                | (RenderState::Unresolved, RenderState::MetadataOnly)
                | (RenderState::Unresolved, RenderState::Loading)
                | (RenderState::Loading, RenderState::Rendered)
                | (RenderState::Loading, RenderState::MetadataOnly)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectPage {
    NotFound,
    MetadataOnly {
        project: ResolvedProject,
        /// Set when a content module existed but failed to load
        degraded: Option<String>,
    },
    Rendered {
        project: ResolvedProject,
        content: Renderable,
    },
}

impl ProjectPage {
    pub fn state(&self) -> RenderState {
        match self {
            ProjectPage::NotFound => RenderState::NotFound,
            ProjectPage::MetadataOnly { .. } => RenderState::MetadataOnly,
            ProjectPage::Rendered { .. } => RenderState::Rendered,
        }
    }

    pub fn project(&self) -> Option<&ResolvedProject> {
        match self {
            ProjectPage::NotFound => None,
            ProjectPage::MetadataOnly { project, .. } | ProjectPage::Rendered { project, .. } => {
                Some(project)
            }
        }
    }
}

struct RenderPath<'a> {
    id: &'a str,
    state: RenderState,
}

impl<'a> RenderPath<'a> {
    fn new(id: &'a str) -> Self {
        Self {
            id,
            state: RenderState::Unresolved,
        }
    }

    fn advance(&mut self, next: RenderState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal render transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::trace!(project = self.id, from = ?self.state, to = ?next, "render transition");
        self.state = next;
    }
}

/// Resolve `id` and decide what its page shows.
///
/// The content source is only consulted when metadata exists and the
/// resolver saw a content module. A failing or panicking load degrades to
/// the metadata-only page instead of propagating.
pub fn render_project(projects_root: &Path, id: &str, source: &dyn ContentSource) -> ProjectPage {
    let mut path = RenderPath::new(id);

    let project = match resolve_project(projects_root, id) {
        Resolution::NotFound => {
            path.advance(RenderState::NotFound);
            return ProjectPage::NotFound;
        }
        Resolution::Found(project) => project,
    };

    if !project.has_content {
        path.advance(RenderState::MetadataOnly);
        return ProjectPage::MetadataOnly {
            project,
            degraded: None,
        };
    }

    path.advance(RenderState::Loading);

    let lookup = catch_unwind(AssertUnwindSafe(|| source.lookup(&project)))
        .unwrap_or_else(|_| ContentLookup::LoadFailed("content loader panicked".to_string()));

    match lookup {
        ContentLookup::Found(content) => {
            path.advance(RenderState::Rendered);
            ProjectPage::Rendered { project, content }
        }
        ContentLookup::NotFound => {
            path.advance(RenderState::MetadataOnly);
            ProjectPage::MetadataOnly {
                project,
                degraded: None,
            }
        }
        ContentLookup::LoadFailed(err) => {
            tracing::warn!(project = id, error = %err, "error loading project content");
            path.advance(RenderState::MetadataOnly);
            ProjectPage::MetadataOnly {
                project,
                degraded: Some(err),
            }
        }
    }
}
