pub mod candidates;
pub mod history;

pub use candidates::{
    bson_to_json, candidate_response, document_to_json, CandidatePayload, DeleteParams,
};
pub use history::{history_response, AppendHistoryRequest};
