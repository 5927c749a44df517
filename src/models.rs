//! Typed records for the four persisted collections.
//!
//! The original prototype kept these as untyped JSON blobs; field types are
//! validated here at the load boundary instead, so a malformed record fails
//! deserialization rather than flowing through the store.

use chrono::Local;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════
// Eye — which eye a scan covers
// ═══════════════════════════════════════════

/// Which eye a retinal scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eye {
    Left,
    Right,
    Both,
}

impl Eye {
    /// Parse from the stored string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Left" => Some(Self::Left),
            "Right" => Some(Self::Right),
            "Both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Stored string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Both => "Both",
        }
    }
}

// ═══════════════════════════════════════════
// Collection records
// ═══════════════════════════════════════════

/// Login account. Seeded once at first run; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
}

/// Registered patient. Immutable after creation, keyed by patient_id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub scan_date: String, // YYYY-MM-DD
    pub eye: Eye,
    pub created_at: String,
}

/// Diagnosis judgment for one patient, entered by the clinician.
///
/// At most one per patient_id — later saves overwrite, no history retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub patient_id: String,
    pub diagnosis: String,
    pub confidence: u8, // 0–100
    pub details: Option<String>,
    pub timestamp: String,
}

/// Append-only notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: String,
}

// ═══════════════════════════════════════════
// View types — serialised to the presentation layer
// ═══════════════════════════════════════════

/// Patient joined with its analysis (if any) for the report screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientReport {
    pub patient: Patient,
    pub analysis: Option<Analysis>,
}

/// Current local time as an ISO-8601 string — the shared timestamp format
/// across all collections.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
