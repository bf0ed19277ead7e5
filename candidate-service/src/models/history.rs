use chrono::{DateTime, Local, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An audit-log record of an action taken on a candidate.
///
/// Entries are append-only: nothing in this service mutates or deletes them.
/// `timestamp` is server-assigned; `date` and `time` are derived display
/// strings stored alongside it (UTC calendar date and local wall-clock time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub action: String,
    pub candidate_name: String,
    #[serde(default)]
    pub details: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub date: String,
    pub time: String,
}

impl HistoryEntry {
    pub fn new(action: String, candidate_name: String, details: Option<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: None,
            action,
            candidate_name,
            details: details.unwrap_or_default(),
            timestamp,
            date: timestamp.format("%Y-%m-%d").to_string(),
            time: Local::now().format("%-I:%M:%S %p").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_default_to_empty() {
        let entry = HistoryEntry::new("Moved".to_string(), "Ada Lovelace".to_string(), None);

        assert_eq!(entry.details, "");
        assert!(entry.id.is_none());
    }

    #[test]
    fn date_is_the_utc_calendar_date() {
        let entry = HistoryEntry::new(
            "Added".to_string(),
            "Grace Hopper".to_string(),
            Some("via referral".to_string()),
        );

        assert_eq!(entry.date, entry.timestamp.format("%Y-%m-%d").to_string());
        assert_eq!(entry.date.len(), 10);
        assert_eq!(entry.details, "via referral");
    }
}
