//! Assertions over the aggregated index and CLI JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of an index array (or a `content.projects` array), in order.
pub fn index_ids(json: &Value) -> Result<Vec<String>> {
    let records = json
        .as_array()
        .or_else(|| json["content"]["projects"].as_array())
        .context("Expected an index array or 'content.projects' array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Record {} missing id", i))
        })
        .collect()
}

/// Assert the index lists exactly `expected`, in that order.
pub fn assert_index_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = index_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected index ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert every record carries a `lastUpdated` and that the sequence is
/// non-increasing.
pub fn assert_newest_first(json: &Value) -> Result<()> {
    let records = json.as_array().context("Expected an index array")?;

    let stamps: Vec<&str> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["lastUpdated"]
                .as_str()
                .with_context(|| format!("Record {} missing lastUpdated", i))
        })
        .collect::<Result<_>>()?;

    for pair in stamps.windows(2) {
        // RFC 3339 in UTC with fixed precision sorts lexicographically.
        if pair[0] < pair[1] {
            anyhow::bail!("Index not newest first: {} before {}", pair[0], pair[1]);
        }
    }
    Ok(())
}
