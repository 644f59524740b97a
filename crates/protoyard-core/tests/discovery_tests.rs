use protoyard_core::{INDEX_FILE, discover_project_dirs};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_discovery_skips_hidden_entries_and_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("beta")).unwrap();
    fs::create_dir(root.join("alpha")).unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(INDEX_FILE), "[]").unwrap();
    fs::write(root.join("notes.txt"), "not a project").unwrap();

    let names: Vec<String> = discover_project_dirs(root)
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn test_discovery_does_not_descend() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("alpha/components")).unwrap();

    let dirs = discover_project_dirs(root).unwrap();
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].1, root.join("alpha"));
}

#[test]
fn test_discovery_of_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    assert!(discover_project_dirs(&missing).is_err());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_does_not_abort_discovery() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("alpha")).unwrap();
    std::os::unix::fs::symlink(root.join("gone"), root.join("stale-link")).unwrap();

    let names: Vec<String> = discover_project_dirs(root)
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(names, vec!["alpha".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_a_project() {
    let temp_dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("alpha")).unwrap();
    std::os::unix::fs::symlink(outside.path(), root.join("linked")).unwrap();

    let dirs = discover_project_dirs(root).unwrap();
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].0, "alpha");
}
