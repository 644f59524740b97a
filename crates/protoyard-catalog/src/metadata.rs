use protoyard_core::METADATA_FILE;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading one project's `metadata.json`.
#[derive(Debug)]
pub(crate) enum MetadataLoad {
    Missing,
    Unreadable(String),
    Malformed(String),
    Loaded(Map<String, Value>),
}

pub(crate) fn load_metadata_object(project_dir: &Path) -> MetadataLoad {
    let path = project_dir.join(METADATA_FILE);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return MetadataLoad::Missing,
        Err(err) => return MetadataLoad::Unreadable(err.to_string()),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(object)) => MetadataLoad::Loaded(object),
        Ok(_) => MetadataLoad::Malformed("expected a JSON object".to_string()),
        Err(err) => MetadataLoad::Malformed(err.to_string()),
    }
}
