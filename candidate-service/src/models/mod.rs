pub mod candidate;
pub mod history;

pub use candidate::Candidate;
pub use history::HistoryEntry;
