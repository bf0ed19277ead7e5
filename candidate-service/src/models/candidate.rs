use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A tracked job applicant record.
///
/// Candidates are schema-less: the application defines its own fields (name
/// and so on), carried in `fields`. Only the identifier and the two
/// timestamps are server-assigned. The identifier is immutable once the
/// database assigns it; `createdAt` is set on create, `updatedAt` on create
/// and every update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Candidate {
    pub fn new(fields: Document) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            created_at: now,
            updated_at: now,
            fields,
        }
    }
}
