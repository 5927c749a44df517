//! Entity store — sole authority for durable state.
//!
//! Four independent JSON-backed collections (users, patients, analyses,
//! notifications), each persisted as one key→record object file and rewritten
//! whole on every mutation. One mutex per collection preserves the original's
//! effective single-writer semantics on a multi-threaded runtime.

pub mod clinic;
pub mod collection;

pub use clinic::ClinicStore;
pub use collection::JsonCollection;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Patient already exists: {patient_id}")]
    AlreadyExists { patient_id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}
