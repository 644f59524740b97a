use crate::project::ProjectMetadata;
use crate::status::{ProjectStatus, ProjectTemplate};
use serde_json::{Map, Value};
use std::fmt;

/// Fields every `metadata.json` must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "id",
    "title",
    "description",
    "creator",
    "createdDate",
    "status",
    "template",
];

/// Derived by the aggregator; an authored value is discarded.
const DERIVED_FIELDS: [&str; 1] = ["lastUpdated"];

/// A single rule a metadata record violates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Field absent, null, or an empty string
    MissingField(&'static str),
    /// Field present but not a string
    WrongType {
        field: &'static str,
        found: &'static str,
    },
    InvalidStatus(String),
    InvalidTemplate(String),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingField(field) => {
                write!(f, "Missing required field: {}", field)
            }
            ValidationIssue::WrongType { field, found } => {
                write!(f, "Invalid type for field {}: expected string, found {}", field, found)
            }
            ValidationIssue::InvalidStatus(value) => write!(
                f,
                "Invalid status: {}. Must be one of: {}",
                value,
                ProjectStatus::choices()
            ),
            ValidationIssue::InvalidTemplate(value) => write!(
                f,
                "Invalid template: {}. Must be one of: {}",
                value,
                ProjectTemplate::choices()
            ),
        }
    }
}

/// Check an authored metadata object and build the typed record.
///
/// Every violated rule is collected; a record is either fully valid or
/// rejected with the complete list of issues.
pub fn validate_metadata(
    object: &Map<String, Value>,
) -> std::result::Result<ProjectMetadata, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let mut text = |field: &'static str| -> Option<String> {
        match object.get(field) {
            None | Some(Value::Null) => {
                issues.push(ValidationIssue::MissingField(field));
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                issues.push(ValidationIssue::MissingField(field));
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                issues.push(ValidationIssue::WrongType {
                    field,
                    found: json_type_name(other),
                });
                None
            }
        }
    };

    let id = text("id");
    let title = text("title");
    let description = text("description");
    let creator = text("creator");
    let created_date = text("createdDate");
    let status_raw = text("status");
    let template_raw = text("template");

    let status = status_raw.and_then(|raw| {
        let parsed = ProjectStatus::parse(&raw);
        if parsed.is_none() {
            issues.push(ValidationIssue::InvalidStatus(raw));
        }
        parsed
    });

    let template = template_raw.and_then(|raw| {
        let parsed = ProjectTemplate::parse(&raw);
        if parsed.is_none() {
            issues.push(ValidationIssue::InvalidTemplate(raw));
        }
        parsed
    });

    if !issues.is_empty() {
        return Err(issues);
    }

    match (id, title, description, creator, created_date, status, template) {
        (
            Some(id),
            Some(title),
            Some(description),
            Some(creator),
            Some(created_date),
            Some(status),
            Some(template),
        ) => {
            let extra = object
                .iter()
                .filter(|(key, _)| {
                    !REQUIRED_FIELDS.contains(&key.as_str())
                        && !DERIVED_FIELDS.contains(&key.as_str())
                })
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();

            Ok(ProjectMetadata {
                id,
                title,
                description,
                creator,
                created_date,
                status,
                template,
                extra,
            })
        }
        // Every None above pushed an issue, so this arm is unreachable in practice.
        _ => Err(issues),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
