use protoyard_core::INDEX_FILE;
use protoyard_types::ProjectRecord;
use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Aggregated index as served to readers, newest first.
///
/// Entries are kept exactly as stored. [`Listing::records`] gives the typed
/// view for display and drops entries that no longer fit the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    entries: Vec<Value>,
}

impl Listing {
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Value> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> Vec<ProjectRecord> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| match ProjectRecord::deserialize(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(position, error = %err, "skipping off-schema index entry");
                    None
                }
            })
            .collect()
    }
}

/// Read the last-written aggregated index.
///
/// Never fails: a missing, unreadable or unparseable artifact yields an
/// empty listing. Nothing is cached; every call goes back to disk.
pub fn read_listing(projects_root: &Path) -> Listing {
    let path = projects_root.join(INDEX_FILE);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no aggregated index yet");
            return Listing::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "aggregated index unreadable");
            return Listing::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(Value::Array(entries)) => Listing { entries },
        Ok(_) => {
            tracing::warn!(path = %path.display(), "aggregated index is not an array");
            Listing::default()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "aggregated index is not valid");
            Listing::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_index_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_listing(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_missing_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_listing(&temp_dir.path().join("projects")).is_empty());
    }

    #[test]
    fn test_corrupt_index_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(INDEX_FILE), "{ not json").unwrap();
        assert!(read_listing(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_index_is_read_in_stored_order() {
        let temp_dir = TempDir::new().unwrap();
        let index = r#"[
  {
    "id": "newer",
    "title": "Newer",
    "description": "d",
    "creator": "c",
    "createdDate": "2024-01-01",
    "status": "review",
    "template": "blank",
    "lastUpdated": "2024-03-01T00:00:00.000Z"
  },
  {
    "id": "older",
    "title": "Older",
    "description": "d",
    "creator": "c",
    "createdDate": "2024-01-01",
    "status": "archived",
    "template": "dashboard",
    "lastUpdated": "2024-02-01T00:00:00.000Z"
  }
]"#;
        std::fs::write(temp_dir.path().join(INDEX_FILE), index).unwrap();

        let ids: Vec<String> = read_listing(temp_dir.path())
            .records()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(ids, vec!["newer", "older"]);
    }

    #[test]
    fn test_off_schema_entry_does_not_hide_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        let index = r#"[
  {
    "id": "good",
    "title": "Good",
    "description": "d",
    "creator": "c",
    "createdDate": "2024-01-01",
    "status": "review",
    "template": "blank",
    "lastUpdated": "2024-03-01T00:00:00.000Z"
  },
  {
    "id": "odd",
    "title": "Odd",
    "status": "shipped",
    "lastUpdated": "yesterday"
  }
]"#;
        std::fs::write(temp_dir.path().join(INDEX_FILE), index).unwrap();

        let listing = read_listing(temp_dir.path());
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.entries()[1]["status"], "shipped");
        assert_eq!(listing.entries()[1]["lastUpdated"], "yesterday");

        let records = listing.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "good");
    }

    #[test]
    fn test_non_array_index_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(INDEX_FILE), r#"{"id": "x"}"#).unwrap();
        assert!(read_listing(temp_dir.path()).is_empty());
    }
}
