//! RetinaView core — clinical-workflow entity store for retinal screening.
//!
//! One component: the entity store ([`store::ClinicStore`]), sole authority
//! for durable state across four independently persisted JSON collections
//! (users, patients, analyses, notifications). The presentation layer
//! supplies user input, consumes the typed results, and handles rendering,
//! sorting, pagination, and the upload byte-copy itself — none of that lives
//! here.

pub mod auth; // Password digests + verification
pub mod config; // Data-directory layout
pub mod models; // Typed records for the four collections
pub mod store; // The entity store

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host process.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate default
/// filter. Call once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
