//! Data-ingestion boundary
//!
//! The REST API delivers loosely-shaped snake_case JSON. Everything is
//! validated here and converted into the typed model before any
//! computation sees it: non-positive credits, grade points outside the
//! 10-point scale, unknown grades/days, and unparsable semesters or times
//! are rejected loudly. Malformed data is a backend or programmer error,
//! not something the aggregator or validator should paper over
//! mid-computation.

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{
    ClockTime, CourseOffering, GradeRecord, MeetingSlot, Semester, Weekday,
};

/// Feedback text substituted when the API sends none
const NO_FEEDBACK: &str = "No feedback provided.";

/// Validation failure at the ingestion boundary
#[derive(Debug, Error)]
pub enum IngestError {
    /// The document is not valid JSON of the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Credits must be a positive integer
    #[error("{course}: credits must be a positive integer (got {credits})")]
    BadCredits {
        /// Course code or id the record belongs to
        course: String,
        /// Offending value
        credits: i64,
    },

    /// Grade points must sit on the 10-point scale
    #[error("{course}: grade points {points} outside the 0-10 scale")]
    GradePointsOutOfRange {
        /// Course code the record belongs to
        course: String,
        /// Offending value
        points: f64,
    },

    /// Unknown letter grade
    #[error("{course}: unknown grade {grade:?}")]
    UnknownGrade {
        /// Course code the record belongs to
        course: String,
        /// Offending value
        grade: String,
    },

    /// Unknown course type
    #[error("{course}: unknown course type {value:?}")]
    UnknownCourseType {
        /// Course code the record belongs to
        course: String,
        /// Offending value
        value: String,
    },

    /// Unparsable semester label
    #[error("{course}: unparsable semester label {label:?}")]
    BadSemester {
        /// Course code the record belongs to
        course: String,
        /// Offending value
        label: String,
    },

    /// Unknown weekday in a schedule
    #[error("{course}: unknown weekday {day:?}")]
    BadDay {
        /// Course id the schedule belongs to
        course: String,
        /// Offending value
        day: String,
    },

    /// Unparsable meeting time
    #[error("{course}: unparsable time {time:?} (expected HH:MM)")]
    BadTime {
        /// Course id the schedule belongs to
        course: String,
        /// Offending value
        time: String,
    },

    /// Meeting interval is empty or inverted
    #[error("{course}: meeting ends at or before it starts")]
    EmptyMeeting {
        /// Course id the schedule belongs to
        course: String,
    },
}

/// Grade record as delivered by `/academics/grades/`
#[derive(Debug, Clone, Deserialize)]
pub struct RawGrade {
    /// Course code
    pub course_code: String,
    /// Course name
    pub course_name: String,
    /// "Core" or "Elective"
    pub course_type: String,
    /// Credit hours
    pub credits: i64,
    /// Letter grade
    pub grade: String,
    /// Grade points
    pub grade_points: f64,
    /// Semester label, e.g. "Monsoon 2024"
    pub semester: String,
    /// Instructor feedback, possibly absent
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Meeting slot as delivered inside a catalog course
#[derive(Debug, Clone, Deserialize)]
pub struct RawSchedule {
    /// Day name, e.g. "Monday"
    pub day: String,
    /// Start time "HH:MM"
    pub start_time: String,
    /// End time "HH:MM"
    pub end_time: String,
}

/// Catalog course as delivered by `/academics/courses/`
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    /// Catalog identifier
    pub id: String,
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credits: i64,
    /// Instructor name
    pub instructor: String,
    /// Weekly meeting slot
    pub schedule: RawSchedule,
}

fn positive_credits(course: &str, credits: i64) -> Result<u32, IngestError> {
    u32::try_from(credits)
        .ok()
        .filter(|c| *c > 0)
        .ok_or_else(|| IngestError::BadCredits {
            course: course.to_string(),
            credits,
        })
}

/// Validate one raw grade and convert it into the typed model
///
/// # Errors
///
/// Returns the first validation failure found in the record.
pub fn grade_from_raw(raw: &RawGrade) -> Result<GradeRecord, IngestError> {
    let credits = positive_credits(&raw.course_code, raw.credits)?;

    if !(0.0..=10.0).contains(&raw.grade_points) {
        return Err(IngestError::GradePointsOutOfRange {
            course: raw.course_code.clone(),
            points: raw.grade_points,
        });
    }

    let course_type = raw
        .course_type
        .parse()
        .map_err(|_| IngestError::UnknownCourseType {
            course: raw.course_code.clone(),
            value: raw.course_type.clone(),
        })?;

    let grade = raw.grade.parse().map_err(|_| IngestError::UnknownGrade {
        course: raw.course_code.clone(),
        grade: raw.grade.clone(),
    })?;

    let semester: Semester = raw
        .semester
        .parse()
        .map_err(|_| IngestError::BadSemester {
            course: raw.course_code.clone(),
            label: raw.semester.clone(),
        })?;

    Ok(GradeRecord {
        course_code: raw.course_code.clone(),
        course_name: raw.course_name.clone(),
        course_type,
        credits,
        grade,
        grade_points: raw.grade_points,
        semester,
        feedback: raw
            .feedback
            .clone()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| NO_FEEDBACK.to_string()),
    })
}

/// Validate one raw catalog course and convert it into the typed model
///
/// # Errors
///
/// Returns the first validation failure found in the course.
pub fn course_from_raw(raw: &RawCourse) -> Result<CourseOffering, IngestError> {
    let credits = positive_credits(&raw.id, raw.credits)?;

    let day: Weekday = raw
        .schedule
        .day
        .parse()
        .map_err(|_| IngestError::BadDay {
            course: raw.id.clone(),
            day: raw.schedule.day.clone(),
        })?;

    let parse_time = |time: &str| {
        time.parse::<ClockTime>().map_err(|_| IngestError::BadTime {
            course: raw.id.clone(),
            time: time.to_string(),
        })
    };
    let start = parse_time(&raw.schedule.start_time)?;
    let end = parse_time(&raw.schedule.end_time)?;

    let schedule = MeetingSlot::new(day, start, end).map_err(|_| IngestError::EmptyMeeting {
        course: raw.id.clone(),
    })?;

    Ok(CourseOffering {
        id: raw.id.clone(),
        code: raw.code.clone(),
        name: raw.name.clone(),
        credits,
        instructor: raw.instructor.clone(),
        schedule,
    })
}

/// Decode and validate a JSON array of grade records
///
/// # Errors
///
/// Fails on malformed JSON or the first invalid record.
pub fn parse_grades(json: &str) -> Result<Vec<GradeRecord>, IngestError> {
    let raw: Vec<RawGrade> = serde_json::from_str(json)?;
    raw.iter().map(grade_from_raw).collect()
}

/// Decode and validate a JSON array of catalog courses
///
/// # Errors
///
/// Fails on malformed JSON or the first invalid course.
pub fn parse_courses(json: &str) -> Result<Vec<CourseOffering>, IngestError> {
    let raw: Vec<RawCourse> = serde_json::from_str(json)?;
    raw.iter().map(course_from_raw).collect()
}
