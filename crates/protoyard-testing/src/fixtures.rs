//! Sample metadata documents and project trees.

use anyhow::Result;
use protoyard_core::{METADATA_FILE, PAGE_FILE};
use protoyard_types::{ProjectStatus, ProjectTemplate};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A metadata document that passes validation, keyed by `id`.
pub fn valid_metadata(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("{} prototype", id),
        "description": format!("Mockup for {}", id),
        "creator": "Dana",
        "createdDate": "2025-01-15",
        "status": ProjectStatus::InProgress.as_str(),
        "template": ProjectTemplate::Blank.as_str(),
    })
}

/// [`valid_metadata`] with one field overridden or removed (`Value::Null`
/// removes the key entirely).
pub fn metadata_with(id: &str, field: &str, value: Value) -> Value {
    let mut doc = valid_metadata(id);
    if let Some(object) = doc.as_object_mut() {
        if value.is_null() {
            object.remove(field);
        } else {
            object.insert(field.to_string(), value);
        }
    }
    doc
}

/// Write `metadata.json` into `projects_root/dir_name`, creating the directory.
pub fn write_metadata(projects_root: &Path, dir_name: &str, metadata: &Value) -> Result<()> {
    let dir = projects_root.join(dir_name);
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join(METADATA_FILE),
        serde_json::to_string_pretty(metadata)?,
    )?;
    Ok(())
}

/// Write raw bytes as `metadata.json`, for malformed-document cases.
pub fn write_raw_metadata(projects_root: &Path, dir_name: &str, raw: &str) -> Result<()> {
    let dir = projects_root.join(dir_name);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(METADATA_FILE), raw)?;
    Ok(())
}

/// Write a `page.html` content module for a project.
pub fn write_page(projects_root: &Path, dir_name: &str, html: &str) -> Result<()> {
    let dir = projects_root.join(dir_name);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(PAGE_FILE), html)?;
    Ok(())
}

/// Relative paths of every file under `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            let relative = entry.path().strip_prefix(dir)?;
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_with_removes_on_null() {
        let doc = metadata_with("alpha", "creator", Value::Null);
        assert!(doc.get("creator").is_none());
        assert_eq!(doc["id"], "alpha");
    }

    #[test]
    fn test_list_files_is_relative_and_sorted() {
        let temp = tempfile::TempDir::new().unwrap();
        write_page(temp.path(), "b", "<p>b</p>").unwrap();
        write_metadata(temp.path(), "a", &valid_metadata("a")).unwrap();

        let files = list_files(temp.path()).unwrap();
        assert_eq!(files, vec!["a/metadata.json", "b/page.html"]);
    }
}
