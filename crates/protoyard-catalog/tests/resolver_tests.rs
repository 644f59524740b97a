use protoyard_catalog::{
    ContentLookup, ContentSource, FsContentSource, ProjectPage, RenderState, Renderable,
    Resolution, ResolvedProject, list_known_project_ids, render_project, resolve_project,
};
use protoyard_testing::TestWorld;
use protoyard_testing::fixtures::metadata_with;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts lookups and always reports the given outcome.
struct CountingSource {
    calls: AtomicUsize,
    outcome: ContentLookup,
}

impl CountingSource {
    fn new(outcome: ContentLookup) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentSource for CountingSource {
    fn lookup(&self, _project: &ResolvedProject) -> ContentLookup {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

struct PanickingSource;

impl ContentSource for PanickingSource {
    fn lookup(&self, _project: &ResolvedProject) -> ContentLookup {
        panic!("loader exploded");
    }
}

#[test]
fn test_unknown_id_never_consults_content_source() {
    let world = TestWorld::new().with_project("alpha").with_page("alpha", "<p/>");
    let source = CountingSource::new(ContentLookup::NotFound);

    let page = render_project(world.projects_dir(), "ghost", &source);

    assert_eq!(page, ProjectPage::NotFound);
    assert_eq!(page.state(), RenderState::NotFound);
    assert_eq!(source.calls(), 0);
}

#[test]
fn test_unsafe_ids_are_not_found() {
    let world = TestWorld::new().with_project("alpha");

    for id in ["", "..", "../alpha", "alpha/..", ".hidden"] {
        assert_eq!(
            resolve_project(world.projects_dir(), id),
            Resolution::NotFound,
            "id {:?}",
            id
        );
    }
}

#[test]
fn test_directory_without_metadata_is_not_found() {
    let world = TestWorld::new().with_dir("alpha").with_page("alpha", "<p/>");
    assert_eq!(resolve_project(world.projects_dir(), "alpha"), Resolution::NotFound);
}

#[test]
fn test_malformed_metadata_is_not_found() {
    let world = TestWorld::new().with_raw_metadata("alpha", "{ nope");
    assert_eq!(resolve_project(world.projects_dir(), "alpha"), Resolution::NotFound);
}

#[test]
fn test_metadata_only_page_shows_stored_fields_verbatim() {
    let world = TestWorld::new().with_metadata(
        "alpha",
        json!({
            "id": "alpha",
            "title": "Checkout  flow <v2>",
            "creator": "Dana",
            "status": "archived",
            "notes": "kept",
        }),
    );
    let source = CountingSource::new(ContentLookup::NotFound);

    let page = render_project(world.projects_dir(), "alpha", &source);

    let ProjectPage::MetadataOnly { project, degraded } = page else {
        panic!("expected metadata-only page");
    };
    assert_eq!(degraded, None);
    assert!(!project.has_content);
    assert_eq!(project.metadata.title(), Some("Checkout  flow <v2>"));
    assert_eq!(project.metadata.creator(), Some("Dana"));
    assert_eq!(project.metadata.description(), None);
    assert_eq!(project.metadata.get_str("notes"), Some("kept"));
    assert_eq!(source.calls(), 0);
}

#[test]
fn test_resolver_does_not_validate() {
    // The aggregator would reject this record; the resolver still serves it.
    let world = TestWorld::new().with_metadata(
        "alpha",
        metadata_with("alpha", "status", json!("shipped")),
    );

    let project = resolve_project(world.projects_dir(), "alpha").found().unwrap();
    assert_eq!(project.metadata.status(), None);
    assert!(project.metadata.validate().is_err());
}

#[test]
fn test_content_module_is_rendered() {
    let world = TestWorld::new()
        .with_project("alpha")
        .with_page("alpha", "<h2>Hello</h2>");

    let page = render_project(world.projects_dir(), "alpha", &FsContentSource);

    let ProjectPage::Rendered { project, content } = page else {
        panic!("expected rendered page");
    };
    assert!(project.has_content);
    assert_eq!(content.html, "<h2>Hello</h2>");
    assert_eq!(content.source, project.dir.join("page.html"));
}

#[test]
fn test_failed_load_degrades_to_metadata_only() {
    let world = TestWorld::new().with_project("alpha").with_page("alpha", "<p/>");
    let source = CountingSource::new(ContentLookup::LoadFailed("disk on fire".to_string()));

    let page = render_project(world.projects_dir(), "alpha", &source);

    assert_eq!(page.state(), RenderState::MetadataOnly);
    let ProjectPage::MetadataOnly { degraded, .. } = page else {
        panic!("expected metadata-only page");
    };
    assert_eq!(degraded.as_deref(), Some("disk on fire"));
    assert_eq!(source.calls(), 1);
}

#[test]
fn test_panicking_loader_degrades_to_metadata_only() {
    let world = TestWorld::new().with_project("alpha").with_page("alpha", "<p/>");

    let page = render_project(world.projects_dir(), "alpha", &PanickingSource);

    assert_eq!(page.state(), RenderState::MetadataOnly);
    assert_eq!(page.project().map(|p| p.id.as_str()), Some("alpha"));
}

#[test]
fn test_invalid_utf8_page_degrades() {
    let world = TestWorld::new().with_project("alpha");
    std::fs::write(world.projects_dir().join("alpha/page.html"), [0xff, 0xfe, 0x00]).unwrap();

    let page = render_project(world.projects_dir(), "alpha", &FsContentSource);

    let ProjectPage::MetadataOnly { degraded, .. } = page else {
        panic!("expected metadata-only page");
    };
    assert!(degraded.unwrap().contains("UTF-8"));
}

#[test]
fn test_source_outcome_wins_over_disk_probe() {
    let world = TestWorld::new().with_project("alpha").with_page("alpha", "<p/>");
    let source = CountingSource::new(ContentLookup::Found(Renderable {
        source: "virtual".into(),
        html: "<em>from memory</em>".to_string(),
    }));

    let page = render_project(world.projects_dir(), "alpha", &source);
    let ProjectPage::Rendered { content, .. } = page else {
        panic!("expected rendered page");
    };
    assert_eq!(content.html, "<em>from memory</em>");
}

#[test]
fn test_known_ids_follow_discovery_rules() {
    let world = TestWorld::new()
        .with_project("beta")
        .with_dir("alpha")
        .with_project(".draft");
    std::fs::write(world.projects_dir().join("README.md"), "# yard").unwrap();

    let ids = list_known_project_ids(world.projects_dir()).unwrap();
    assert_eq!(ids, vec!["alpha", "beta"]);
}

#[test]
fn test_known_ids_of_missing_root_is_empty() {
    let world = TestWorld::new();
    assert!(list_known_project_ids(world.projects_dir()).unwrap().is_empty());
}

#[test]
fn test_resolver_ignores_stale_index() {
    let world = TestWorld::new().with_projects_root();
    std::fs::write(world.index_path(), r#"[{"id":"ghost","title":"Ghost"}]"#).unwrap();

    assert_eq!(resolve_project(world.projects_dir(), "ghost"), Resolution::NotFound);
}

#[cfg(unix)]
#[test]
fn test_known_ids_skip_dangling_symlinks() {
    let world = TestWorld::new().with_project("alpha");
    std::os::unix::fs::symlink(
        world.projects_dir().join("gone"),
        world.projects_dir().join("stale-link"),
    )
    .unwrap();

    let ids = list_known_project_ids(world.projects_dir()).unwrap();
    assert_eq!(ids, vec!["alpha".to_string()]);
}
