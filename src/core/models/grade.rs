//! Grade record model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Semester;

/// Whether a course counts toward the core curriculum or as an elective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Required course for the program
    Core,
    /// Student-chosen elective
    Elective,
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "elective" => Ok(Self::Elective),
            _ => Err(format!("Unknown course type: '{s}'")),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "Core"),
            Self::Elective => write!(f, "Elective"),
        }
    }
}

/// Letter grade on the institute's 10-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// A+
    APlus,
    /// A
    A,
    /// A-
    AMinus,
    /// B
    B,
    /// B-
    BMinus,
    /// C
    C,
    /// C-
    CMinus,
    /// D
    D,
    /// F (fail)
    F,
}

impl LetterGrade {
    /// Grade as printed on the transcript
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown grade: '{s}'")),
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single graded course outcome
///
/// Issued by the registrar and read-only from the portal's point of view.
/// Instances are produced by the ingestion boundary, which guarantees
/// positive credits and grade points within the 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Course code (e.g., "CSE101")
    pub course_code: String,

    /// Full course name
    pub course_name: String,

    /// Core or elective
    pub course_type: CourseType,

    /// Credit hours (positive)
    pub credits: u32,

    /// Letter grade awarded
    pub grade: LetterGrade,

    /// Grade points on the 10-point scale
    pub grade_points: f64,

    /// Semester the course was taken in
    pub semester: Semester,

    /// Instructor feedback text
    pub feedback: String,
}

impl GradeRecord {
    /// Create a new grade record with empty feedback
    #[must_use]
    pub const fn new(
        course_code: String,
        course_name: String,
        course_type: CourseType,
        credits: u32,
        grade: LetterGrade,
        grade_points: f64,
        semester: Semester,
    ) -> Self {
        Self {
            course_code,
            course_name,
            course_type,
            credits,
            grade,
            grade_points,
            semester,
            feedback: String::new(),
        }
    }

    /// Grade points weighted by the course's credits
    #[must_use]
    pub fn weighted_points(&self) -> f64 {
        self.grade_points * f64::from(self.credits)
    }
}
