//! # Healthie
//!
//! Data-source boundary for the practice-management API.
//!
//! This crate owns everything about *fetching* patient records:
//! - serde wire models for the GraphQL responses ([`records`])
//! - the query documents the viewer issues ([`queries`])
//! - an authenticated HTTP client ([`client`])
//!
//! It treats the upstream as a source of opaque records: the `quick_notes`
//! field on a patient is handed back as the raw string the API returned,
//! and parsing it is the `quicknotes` crate's job.

pub mod client;
pub mod queries;
pub mod records;

pub use client::HealthieClient;
pub use records::{Appointment, PatientOverview, PatientSummary};

/// Errors from the practice-management API boundary.
#[derive(Debug, thiserror::Error)]
pub enum HealthieError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("API key cannot be empty")]
    EmptyApiKey,
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("request to practice-management API failed: {0}")]
    Http(reqwest::Error),
    #[error("practice-management API returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode API response: {0}")]
    Decode(reqwest::Error),
    #[error("API reported errors: {0}")]
    Graphql(String),
    #[error("API response contained no data")]
    MissingData,
    #[error("patient {0} not found")]
    PatientNotFound(String),
}

pub type HealthieResult<T> = std::result::Result<T, HealthieError>;
