use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::HistoryEntry;

/// Body of POST on the history route. Presence of `action` and
/// `candidateName` is the only validation this route performs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendHistoryRequest {
    pub action: Option<String>,
    pub candidate_name: Option<String>,
    pub details: Option<String>,
}

/// Shapes a stored history entry for the API, with the identifier exposed as
/// a plain string `id`.
pub fn history_response(entry: HistoryEntry) -> Value {
    let id = entry.id.map(|oid| oid.to_hex());
    json!({
        "_id": id.clone(),
        "id": id,
        "action": entry.action,
        "candidateName": entry.candidate_name,
        "details": entry.details,
        "timestamp": entry.timestamp.to_rfc3339(),
        "date": entry.date,
        "time": entry.time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn history_response_exposes_id_and_fields() {
        let mut entry = HistoryEntry::new(
            "Stage changed".to_string(),
            "Ada Lovelace".to_string(),
            Some("Applied -> Interview".to_string()),
        );
        let oid = ObjectId::new();
        entry.id = Some(oid);

        let json = history_response(entry);

        assert_eq!(json["id"], Value::String(oid.to_hex()));
        assert_eq!(json["action"], "Stage changed");
        assert_eq!(json["candidateName"], "Ada Lovelace");
        assert_eq!(json["details"], "Applied -> Interview");
        assert_eq!(json["date"].as_str().unwrap().len(), 10);
    }
}
