use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "RetinaView";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "retinaview=info"
}

/// Get the application data directory
/// ~/RetinaView/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("RetinaView")
}

/// Get the store directory holding the per-entity JSON collection files
pub fn store_dir() -> PathBuf {
    app_data_dir().join("store")
}

/// Get the uploaded-images directory
pub fn images_dir() -> PathBuf {
    app_data_dir().join("images")
}

/// Get the image directory for one patient.
///
/// Uploaded retinal scans are opaque blobs grouped under the patient_id they
/// belong to; the upload handler itself lives in the presentation layer.
pub fn patient_images_dir(patient_id: &str) -> PathBuf {
    images_dir().join(patient_id)
}
