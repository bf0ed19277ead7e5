use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::Candidate;

/// Body of POST/PUT on the candidates route: `{ "candidate": { ... } }`.
/// The candidate itself stays untyped; its schema belongs to the frontend.
#[derive(Debug, Deserialize)]
pub struct CandidatePayload {
    pub candidate: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// Converts a BSON value into plain JSON: ObjectIds become hex strings and
/// datetimes RFC 3339 strings rather than extended-JSON wrappers.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::Double(n) => Value::from(n),
        Bson::Null => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(document: Document) -> Value {
    let mut map = Map::new();
    for (key, value) in document {
        map.insert(key, bson_to_json(value));
    }
    Value::Object(map)
}

/// Shapes a stored candidate for the API: the identifier exposed as a plain
/// string `id` alongside the document's own fields and timestamps.
pub fn candidate_response(candidate: Candidate) -> Value {
    let mut map = Map::new();
    if let Some(oid) = candidate.id {
        map.insert("_id".to_string(), Value::String(oid.to_hex()));
        map.insert("id".to_string(), Value::String(oid.to_hex()));
    }
    for (key, value) in candidate.fields {
        map.insert(key, bson_to_json(value));
    }
    map.insert(
        "createdAt".to_string(),
        Value::String(candidate.created_at.to_rfc3339()),
    );
    map.insert(
        "updatedAt".to_string(),
        Value::String(candidate.updated_at.to_rfc3339()),
    );
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::{doc, DateTime};

    #[test]
    fn object_ids_and_datetimes_become_plain_strings() {
        let oid = ObjectId::new();
        let json = document_to_json(doc! {
            "_id": oid,
            "name": "Ada Lovelace",
            "appliedAt": DateTime::from_millis(1_700_000_000_000),
            "score": 42_i32,
        });

        assert_eq!(json["_id"], Value::String(oid.to_hex()));
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["score"], 42);
        assert!(json["appliedAt"].as_str().unwrap().starts_with("2023-11-14T"));
    }

    #[test]
    fn nested_documents_and_arrays_are_converted() {
        let json = document_to_json(doc! {
            "tags": ["senior", "remote"],
            "contact": { "email": "ada@example.com" },
        });

        assert_eq!(json["tags"][1], "remote");
        assert_eq!(json["contact"]["email"], "ada@example.com");
    }

    #[test]
    fn candidate_response_exposes_id_and_timestamps() {
        let mut candidate = Candidate::new(doc! { "name": "Grace Hopper" });
        let oid = ObjectId::new();
        candidate.id = Some(oid);

        let json = candidate_response(candidate);

        assert_eq!(json["id"], Value::String(oid.to_hex()));
        assert_eq!(json["_id"], json["id"]);
        assert_eq!(json["name"], "Grace Hopper");
        assert_eq!(json["createdAt"], json["updatedAt"]);
    }
}
