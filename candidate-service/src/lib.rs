//! Candidate tracking API: CRUD over candidate documents, an append-only
//! audit history, and a health check, backed by MongoDB.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
