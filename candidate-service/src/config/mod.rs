use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// Connection string. Optional at load time: its absence is only an
    /// error once a request actually needs the database, and the health
    /// check reports it without failing.
    pub uri: Option<String>,
    pub database: String,
    pub legacy_database: String,
}

impl CandidateConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        Ok(CandidateConfig {
            common,
            mongodb: MongoConfig {
                uri: env::var("MONGODB_URI").ok(),
                database: get_env("MONGODB_DATABASE", "candidate_management"),
                legacy_database: get_env("MONGODB_LEGACY_DATABASE", "candidatedb"),
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
