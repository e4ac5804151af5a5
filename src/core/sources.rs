//! External collaborator seams
//!
//! The backend is an opaque HTTP API; the core only ever sees these
//! traits. Tests and the CLI provide in-memory implementations, the real
//! transport (authentication, timeouts, retries) lives in the surrounding
//! application. A failed fetch surfaces as [`SourceError::Unavailable`]
//! and callers recover with an empty display state; it is never fatal to
//! the core.

use serde::Serialize;
use thiserror::Error;

use crate::core::ingest::{RawCourse, RawGrade};
use crate::core::models::StudentProfile;
use crate::core::requests::DocumentRequestPayload;

/// Failure reported by an external source or sink
#[derive(Debug, Error)]
pub enum SourceError {
    /// The endpoint could not deliver data
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The session token was rejected
    #[error("session expired or unauthorized")]
    Unauthorized,
}

/// Authoritative student record source (`/core/profile/`)
pub trait ProfileSource {
    /// Fetch the signed-in student's profile
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the profile cannot be fetched.
    fn fetch_profile(&self) -> Result<StudentProfile, SourceError>;
}

/// Grade history source (`/academics/grades/`)
///
/// Returns raw wire records; validation happens in [`crate::core::ingest`]
/// so there is exactly one place malformed data can be rejected.
pub trait GradeSource {
    /// Fetch all grade records of the signed-in student
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the records cannot be fetched.
    fn fetch_grades(&self) -> Result<Vec<RawGrade>, SourceError>;
}

/// Course catalog source for a term (`/academics/courses/`)
pub trait CourseCatalog {
    /// Fetch the offerings for a term slug such as `"monsoon-2024"`
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the catalog cannot be fetched.
    fn fetch_courses(&self, term: &str) -> Result<Vec<RawCourse>, SourceError>;
}

/// Finalized-registration payload for the enrollment endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    /// Term slug the registration applies to
    pub term: String,
    /// Registered course ids, in registration order
    pub course_ids: Vec<String>,
}

/// Accepts finalized registrations and document requests
pub trait SubmissionSink {
    /// Submit a finalized registration
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the submission is not accepted.
    fn submit_registration(&self, payload: &RegistrationPayload) -> Result<(), SourceError>;

    /// Submit a document request; returns the created request id
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the submission is not accepted.
    fn submit_document_request(
        &self,
        payload: &DocumentRequestPayload,
    ) -> Result<String, SourceError>;
}
