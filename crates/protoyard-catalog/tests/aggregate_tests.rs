use protoyard_catalog::{AggregateProgress, Aggregator, RejectReason, read_listing};
use protoyard_testing::assertions::{assert_index_ids, assert_newest_first};
use protoyard_testing::fixtures::metadata_with;
use protoyard_testing::TestWorld;
use protoyard_types::ValidationIssue;
use serde_json::{Value, json};

const DAY: i64 = 24 * 60 * 60;
const NOW: i64 = 1_760_000_000;

#[test]
fn test_partial_failure_keeps_valid_projects() {
    let world = TestWorld::new()
        .with_project("alpha")
        .with_metadata("beta", metadata_with("beta", "creator", Value::Null));

    let report = Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.rejected[0].dir_name, "beta");
    assert_eq!(
        report.rejected[0].reason,
        RejectReason::Invalid(vec![ValidationIssue::MissingField("creator")])
    );

    let index = world.read_index().unwrap();
    assert_index_ids(&index, &["alpha"]).unwrap();
}

#[test]
fn test_index_is_newest_first() {
    let world = TestWorld::new()
        .with_project("alpha")
        .with_project("gamma")
        .with_project("beta")
        .with_modified("alpha", NOW)
        .with_modified("gamma", NOW - DAY)
        .with_modified("beta", NOW - 2 * DAY);

    Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    let index = world.read_index().unwrap();
    assert_index_ids(&index, &["alpha", "gamma", "beta"]).unwrap();
    assert_newest_first(&index).unwrap();
}

#[test]
fn test_last_updated_comes_from_directory_mtime() {
    let world = TestWorld::new()
        .with_metadata(
            "alpha",
            metadata_with("alpha", "lastUpdated", json!("1999-01-01T00:00:00.000Z")),
        )
        .with_modified("alpha", 1_736_899_200);

    Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    let index = world.read_index().unwrap();
    assert_eq!(index[0]["lastUpdated"], "2025-01-15T00:00:00.000Z");
}

#[test]
fn test_records_keep_authored_fields() {
    let world = TestWorld::new().with_metadata(
        "alpha",
        metadata_with("alpha", "tags", json!(["nav", "mobile"])),
    );

    Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    let index = world.read_index().unwrap();
    let record = &index[0];
    assert_eq!(record["title"], "alpha prototype");
    assert_eq!(record["createdDate"], "2025-01-15");
    assert_eq!(record["status"], "in-progress");
    assert_eq!(record["tags"], json!(["nav", "mobile"]));
}

#[test]
fn test_every_kind_of_bad_directory_is_reported() {
    let world = TestWorld::new()
        .with_project("good")
        .with_dir("empty")
        .with_raw_metadata("broken", "{ not json")
        .with_raw_metadata("listy", "[1, 2, 3]")
        .with_metadata("wrong", metadata_with("wrong", "status", json!("done")));

    let report = Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    let mut rejected: Vec<(&str, &RejectReason)> = report
        .rejected
        .iter()
        .map(|r| (r.dir_name.as_str(), &r.reason))
        .collect();
    rejected.sort_by_key(|(name, _)| *name);

    assert_eq!(rejected.len(), 4);
    assert!(matches!(rejected[0], ("broken", RejectReason::Malformed(_))));
    assert!(matches!(rejected[1], ("empty", RejectReason::MissingMetadata)));
    assert!(matches!(rejected[2], ("listy", RejectReason::Malformed(_))));
    assert!(matches!(
        rejected[3],
        ("wrong", RejectReason::Invalid(issues)) if issues == &vec![ValidationIssue::InvalidStatus("done".to_string())]
    ));
    assert_eq!(report.accepted.len(), 1);
}

#[test]
fn test_hidden_entries_and_files_are_skipped() {
    let world = TestWorld::new()
        .with_project("alpha")
        .with_project(".draft");
    std::fs::write(world.projects_dir().join("notes.txt"), "loose file").unwrap();

    let report = Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.error_count(), 0);
}

#[test]
fn test_missing_root_is_created_with_empty_index() {
    let world = TestWorld::new();
    assert!(!world.projects_dir().exists());

    let mut created = false;
    let report = Aggregator::new(world.projects_dir())
        .run(|event| {
            if matches!(event, AggregateProgress::RootCreated { .. }) {
                created = true;
            }
        })
        .unwrap();

    assert!(created);
    assert!(report.accepted.is_empty());
    assert_eq!(world.read_index().unwrap(), json!([]));
}

#[test]
fn test_rerun_without_changes_is_identical() {
    let world = TestWorld::new()
        .with_project("alpha")
        .with_project("beta")
        .with_modified("alpha", NOW)
        .with_modified("beta", NOW - DAY);
    let aggregator = Aggregator::new(world.projects_dir());

    aggregator.run(|_| {}).unwrap();
    let first = std::fs::read(world.index_path()).unwrap();

    // The index lives inside the root, so the root's own mtime moves but
    // project directories do not.
    aggregator.run(|_| {}).unwrap();
    let second = std::fs::read(world.index_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_previous_index_is_replaced_not_merged() {
    let world = TestWorld::new().with_project("alpha").with_project("beta");
    let aggregator = Aggregator::new(world.projects_dir());
    aggregator.run(|_| {}).unwrap();

    std::fs::remove_dir_all(world.projects_dir().join("beta")).unwrap();
    aggregator.run(|_| {}).unwrap();

    assert_index_ids(&world.read_index().unwrap(), &["alpha"]).unwrap();
}

#[test]
fn test_listing_serves_what_aggregator_wrote() {
    let world = TestWorld::new()
        .with_project("alpha")
        .with_project("beta")
        .with_modified("alpha", NOW - DAY)
        .with_modified("beta", NOW);

    Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    let records = read_listing(world.projects_dir()).records();
    let ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["beta", "alpha"]);
}

#[test]
fn test_root_that_is_a_file_fails() {
    let world = TestWorld::new();
    std::fs::write(world.projects_dir(), "not a directory").unwrap();

    let result = Aggregator::new(world.projects_dir()).run(|_| {});
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_not_fatal() {
    let world = TestWorld::new().with_project("alpha");
    std::os::unix::fs::symlink(
        world.projects_dir().join("gone"),
        world.projects_dir().join("stale-link"),
    )
    .unwrap();

    let report = Aggregator::new(world.projects_dir()).run(|_| {}).unwrap();

    assert_eq!(report.accepted.len(), 1);
    assert!(report.rejected.is_empty());
    assert_index_ids(&world.read_index().unwrap(), &["alpha"]).unwrap();
}
