//! Core module for `CampusAnalytics`

pub mod academics;
pub mod config;
pub mod ingest;
pub mod models;
pub mod registration;
pub mod report;
pub mod requests;
pub mod session;
pub mod sources;

/// Returns the current version of the `CampusAnalytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
