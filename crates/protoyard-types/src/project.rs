use crate::status::{ProjectStatus, ProjectTemplate};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Authored metadata of a single prototype, as stored in its `metadata.json`.
///
/// Keys the schema does not know about are kept in `extra` and written back
/// out unchanged, so the aggregated index mirrors what the designer wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    /// Stable identifier, expected to equal the directory name
    pub id: String,
    pub title: String,
    pub description: String,
    pub creator: String,
    /// Date the project was scaffolded (`YYYY-MM-DD`); never rewritten
    pub created_date: String,
    pub status: ProjectStatus,
    pub template: ProjectTemplate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the aggregated index: authored metadata plus the
/// directory modification time observed at aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(flatten)]
    pub metadata: ProjectMetadata,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl ProjectRecord {
    pub fn new(metadata: ProjectMetadata, last_updated: DateTime<Utc>) -> Self {
        Self {
            metadata,
            last_updated,
        }
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }
}

/// Format a timestamp the way the index stores it: RFC 3339, UTC,
/// millisecond precision, `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_metadata() -> ProjectMetadata {
        ProjectMetadata {
            id: "alpha".to_string(),
            title: "Alpha".to_string(),
            description: "First prototype".to_string(),
            creator: "Sam".to_string(),
            created_date: "2024-05-01".to_string(),
            status: ProjectStatus::Ready,
            template: ProjectTemplate::Blank,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_record_serializes_camel_case_with_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 2, 10, 30, 0).unwrap();
        let record = ProjectRecord::new(sample_metadata(), ts);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["createdDate"], "2024-05-01");
        assert_eq!(value["lastUpdated"], "2024-05-02T10:30:00.000Z");
        assert_eq!(value["status"], "ready");
        assert_eq!(value["template"], "blank");
    }

    #[test]
    fn test_record_reads_back_from_index_json() {
        let value = json!({
            "id": "alpha",
            "title": "Alpha",
            "description": "First prototype",
            "creator": "Sam",
            "createdDate": "2024-05-01",
            "status": "ready",
            "template": "blank",
            "lastUpdated": "2024-05-02T10:30:00.000Z",
            "tags": ["nav"]
        });

        let record: ProjectRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.id(), "alpha");
        assert_eq!(record.metadata.extra.get("tags"), Some(&json!(["nav"])));
        assert!(!record.metadata.extra.contains_key("lastUpdated"));
        assert_eq!(
            record.last_updated,
            Utc.with_ymd_and_hms(2024, 5, 2, 10, 30, 0).unwrap()
        );
    }
}
