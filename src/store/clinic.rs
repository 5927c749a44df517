//! The entity store consumed by the presentation layer.
//!
//! `ClinicStore` owns the four collections and mediates every read and write.
//! It is constructed explicitly at process start and passed by reference to
//! all operations — no ambient global. Every mutation is a synchronous
//! read-modify-persist of the whole affected collection; one mutex per
//! collection serializes those cycles so interleaved writers cannot corrupt
//! a file. There is no cross-collection transaction.

use std::path::Path;
use std::sync::Mutex;

use uuid::Uuid;

use crate::auth;
use crate::models::{
    now_timestamp, Analysis, Eye, Notification, Patient, PatientReport, UserAccount,
};

use super::collection::JsonCollection;
use super::StoreError;

const USERS_FILE: &str = "users.json";
const PATIENTS_FILE: &str = "patients.json";
const ANALYSES_FILE: &str = "analyses.json";
const NOTIFICATIONS_FILE: &str = "notifications.json";

// ═══════════════════════════════════════════
// ClinicStore
// ═══════════════════════════════════════════

/// The four collections behind per-collection locks.
///
/// Lock order where two are held: patients before analyses.
pub struct ClinicStore {
    users: Mutex<JsonCollection<UserAccount>>,
    patients: Mutex<JsonCollection<Patient>>,
    analyses: Mutex<JsonCollection<Analysis>>,
    notifications: Mutex<JsonCollection<Notification>>,
}

impl ClinicStore {
    /// Open the store rooted at `dir`, loading all four collections.
    ///
    /// An empty user collection (first run, or a reset users file) is seeded
    /// with the bootstrap account and persisted immediately. There is no
    /// user-registration path; the seed is the only credential.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let mut users = JsonCollection::load(&dir.join(USERS_FILE), "users");
        if users.is_empty() {
            users.insert(
                auth::SEED_USERNAME.to_string(),
                UserAccount {
                    username: auth::SEED_USERNAME.to_string(),
                    password_hash: auth::hash_password(auth::SEED_PASSWORD),
                },
            );
            users.persist()?;
            tracing::info!(username = auth::SEED_USERNAME, "Seeded bootstrap account");
        }

        Ok(Self {
            users: Mutex::new(users),
            patients: Mutex::new(JsonCollection::load(&dir.join(PATIENTS_FILE), "patients")),
            analyses: Mutex::new(JsonCollection::load(&dir.join(ANALYSES_FILE), "analyses")),
            notifications: Mutex::new(JsonCollection::load(
                &dir.join(NOTIFICATIONS_FILE),
                "notifications",
            )),
        })
    }

    // ── Authentication ──────────────────────────────────

    /// Check a username/password pair.
    ///
    /// Fails closed: an unknown username and a wrong password both come back
    /// `false`, indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        match users.get(username) {
            Some(account) => Ok(auth::verify_password(password, &account.password_hash)),
            None => Ok(false),
        }
    }

    // ── Patients ────────────────────────────────────────

    /// Register a patient.
    ///
    /// Rejects an id already present and leaves the existing record unchanged.
    pub fn create_patient(
        &self,
        patient_id: &str,
        scan_date: &str,
        eye: Eye,
    ) -> Result<Patient, StoreError> {
        if patient_id.trim().is_empty() {
            return Err(StoreError::Validation("Patient ID must not be empty".into()));
        }

        let mut patients = self.patients.lock().map_err(|_| StoreError::LockPoisoned)?;
        if patients.contains(patient_id) {
            return Err(StoreError::AlreadyExists {
                patient_id: patient_id.into(),
            });
        }

        let patient = Patient {
            patient_id: patient_id.to_string(),
            scan_date: scan_date.to_string(),
            eye,
            created_at: now_timestamp(),
        };
        patients.insert(patient.patient_id.clone(), patient.clone());
        if let Err(e) = patients.persist() {
            // A failed write must not leave a phantom record in memory
            patients.remove(patient_id);
            return Err(e);
        }

        tracing::info!(patient_id, eye = eye.as_str(), "Patient registered");
        Ok(patient)
    }

    pub fn get_patient(&self, patient_id: &str) -> Result<Patient, StoreError> {
        let patients = self.patients.lock().map_err(|_| StoreError::LockPoisoned)?;
        patients
            .get(patient_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity_type: "Patient".into(),
                id: patient_id.into(),
            })
    }

    /// All registered patients, in storage order. The history screen sorts.
    pub fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        let patients = self.patients.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(patients.values().cloned().collect())
    }

    // ── Analyses ────────────────────────────────────────

    /// Record the diagnosis judgment for a patient — unconditional upsert.
    ///
    /// Overwrites any prior analysis for the same patient_id with no history
    /// retained, and makes no patient-existence check (the analysis form is
    /// reachable before registration completes).
    pub fn save_analysis(
        &self,
        patient_id: &str,
        diagnosis: &str,
        confidence: u8,
        details: Option<String>,
    ) -> Result<Analysis, StoreError> {
        if confidence > 100 {
            return Err(StoreError::Validation(format!(
                "Confidence must be 0–100, got {confidence}"
            )));
        }

        let analysis = Analysis {
            patient_id: patient_id.to_string(),
            diagnosis: diagnosis.to_string(),
            confidence,
            details,
            timestamp: now_timestamp(),
        };

        let mut analyses = self.analyses.lock().map_err(|_| StoreError::LockPoisoned)?;
        let prior = analyses.insert(analysis.patient_id.clone(), analysis.clone());
        if let Err(e) = analyses.persist() {
            // Restore whatever the durable file still holds
            match prior {
                Some(prior) => {
                    analyses.insert(analysis.patient_id.clone(), prior);
                }
                None => {
                    analyses.remove(&analysis.patient_id);
                }
            }
            return Err(e);
        }

        tracing::info!(patient_id, diagnosis, confidence, "Analysis saved");
        Ok(analysis)
    }

    /// The stored analysis for a patient. A patient that was never analysed
    /// is a `NotFound`, never a default record.
    pub fn get_analysis(&self, patient_id: &str) -> Result<Analysis, StoreError> {
        let analyses = self.analyses.lock().map_err(|_| StoreError::LockPoisoned)?;
        analyses
            .get(patient_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity_type: "Analysis".into(),
                id: patient_id.into(),
            })
    }

    // ── Search & reports ────────────────────────────────

    /// Filtered patient search.
    ///
    /// Both filters are case-insensitive substring matches. A patient with no
    /// analysis never matches a diagnosis filter; a missing filter places no
    /// constraint. Order is storage order — the caller sorts for display.
    pub fn search_patients(
        &self,
        patient_id_filter: Option<&str>,
        diagnosis_filter: Option<&str>,
    ) -> Result<Vec<Patient>, StoreError> {
        let patients = self.patients.lock().map_err(|_| StoreError::LockPoisoned)?;
        let analyses = self.analyses.lock().map_err(|_| StoreError::LockPoisoned)?;

        let id_needle = patient_id_filter.map(str::to_lowercase);
        let diag_needle = diagnosis_filter.map(str::to_lowercase);

        let mut matches = Vec::new();
        for patient in patients.values() {
            if let Some(ref needle) = id_needle {
                if !patient.patient_id.to_lowercase().contains(needle) {
                    continue;
                }
            }
            if let Some(ref needle) = diag_needle {
                match analyses.get(&patient.patient_id) {
                    Some(analysis) if analysis.diagnosis.to_lowercase().contains(needle) => {}
                    _ => continue,
                }
            }
            matches.push(patient.clone());
        }
        Ok(matches)
    }

    /// A patient joined with its analysis (if any) for the report screen.
    pub fn patient_report(&self, patient_id: &str) -> Result<PatientReport, StoreError> {
        let patients = self.patients.lock().map_err(|_| StoreError::LockPoisoned)?;
        let analyses = self.analyses.lock().map_err(|_| StoreError::LockPoisoned)?;

        let patient = patients
            .get(patient_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity_type: "Patient".into(),
                id: patient_id.into(),
            })?;

        Ok(PatientReport {
            patient,
            analysis: analyses.get(patient_id).cloned(),
        })
    }

    // ── Notifications ───────────────────────────────────

    /// Append a notification with a fresh unique id and current timestamp.
    pub fn add_notification(&self, message: &str) -> Result<Notification, StoreError> {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            message: message.to_string(),
            timestamp: now_timestamp(),
        };

        let mut notifications = self
            .notifications
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        notifications.insert(notification.id.clone(), notification.clone());
        if let Err(e) = notifications.persist() {
            notifications.remove(&notification.id);
            return Err(e);
        }

        Ok(notification)
    }

    /// All notifications, unsorted. The caller sorts by timestamp descending
    /// before display.
    pub fn list_notifications(&self) -> Result<Vec<Notification>, StoreError> {
        let notifications = self
            .notifications
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(notifications.values().cloned().collect())
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
