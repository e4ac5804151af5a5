//! Student profile model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Enrolled student
    Student,
    /// Faculty member
    Faculty,
    /// Administrative staff
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Faculty => write!(f, "faculty"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// The authoritative student record delivered by the profile source
///
/// The `cgpa` field is the institutional value and may legitimately differ
/// from the CGPA computed out of grade records (the registrar can apply
/// non-grade adjustments); see `academics::cgpa_discrepancy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// Stable student identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Institute e-mail address
    pub email: String,
    /// Portal role
    pub role: Role,
    /// Roll number (e.g., "2021101")
    pub roll_number: String,
    /// Enrolled program (e.g., "B.Tech CSE")
    pub program: String,
    /// Cumulative GPA as recorded by the registrar
    pub cgpa: f64,
    /// Credits completed so far
    pub credits_completed: u32,
    /// Whether the enrollment is active
    pub is_active: bool,
}
