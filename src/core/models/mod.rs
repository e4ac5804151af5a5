//! Data models for `CampusAnalytics`

pub mod course;
pub mod grade;
pub mod semester;
pub mod student;

pub use course::{ClockTime, CourseOffering, MeetingSlot, Weekday};
pub use grade::{CourseType, GradeRecord, LetterGrade};
pub use semester::{Season, Semester};
pub use student::{Role, StudentProfile};
